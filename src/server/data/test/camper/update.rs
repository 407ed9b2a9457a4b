use super::*;

/// Tests updating only the name of a camper.
///
/// Verifies that the age is left untouched and `updated_at` moves forward.
///
/// Expected: Ok(Some) with new name and old age
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::CamperFactory::new(db)
        .name("Ann")
        .age(10)
        .build()
        .await?;

    let updated = CamperRepository::new(db)
        .update(
            camper.id,
            UpdateCamperParams {
                name: Some("Annie".to_string()),
                age: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Annie");
    assert_eq!(updated.age, 10);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_camper.name, "Annie");
    assert!(db_camper.updated_at >= camper.updated_at);

    Ok(())
}

/// Tests updating both fields of a camper.
///
/// Expected: Ok(Some) with both fields changed
#[tokio::test]
async fn updates_name_and_age() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let updated = CamperRepository::new(db)
        .update(
            camper.id,
            UpdateCamperParams {
                name: Some("Ben".to_string()),
                age: Some(17),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Ben");
    assert_eq!(updated.age, 17);

    Ok(())
}

/// Tests updating a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db)
        .update(
            999,
            UpdateCamperParams {
                name: Some("Ghost".to_string()),
                age: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
