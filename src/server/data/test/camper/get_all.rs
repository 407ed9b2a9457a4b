use super::*;

/// Tests listing campers when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campers = CamperRepository::new(db).get_all().await?;

    assert!(campers.is_empty());

    Ok(())
}

/// Tests listing campers returns every row ordered by ID.
///
/// Expected: Ok with campers in insertion order
#[tokio::test]
async fn returns_all_campers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_camper(db).await?;
    let second = factory::create_camper(db).await?;
    let third = factory::create_camper(db).await?;

    let campers = CamperRepository::new(db).get_all().await?;

    let ids: Vec<i32> = campers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
