use super::*;

/// Tests creating a new camper.
///
/// Verifies that the repository inserts the row, assigns an ID and sets both
/// timestamps.
///
/// Expected: Ok with camper created
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo
        .create(CreateCamperParams {
            name: "Ann".to_string(),
            age: 10,
        })
        .await?;

    assert_eq!(camper.name, "Ann");
    assert_eq!(camper.age, 10);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_camper.name, "Ann");
    assert_eq!(db_camper.created_at, db_camper.updated_at);

    Ok(())
}

/// Tests that consecutive creations receive distinct IDs.
///
/// Expected: Ok with increasing IDs
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let first = repo
        .create(CreateCamperParams {
            name: "Ann".to_string(),
            age: 10,
        })
        .await?;
    let second = repo
        .create(CreateCamperParams {
            name: "Ben".to_string(),
            age: 11,
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
