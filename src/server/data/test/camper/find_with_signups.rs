use super::*;

/// Tests fetching a camper that has no signups.
///
/// Expected: Ok(Some) with empty signup list
#[tokio::test]
async fn finds_camper_without_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(result.camper.id, camper.id);
    assert!(result.signups.is_empty());

    Ok(())
}

/// Tests fetching a camper returns only its own signups, ordered by ID.
///
/// Expected: Ok(Some) with the camper's two signups
#[tokio::test]
async fn finds_camper_with_own_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let other = factory::create_camper(db).await?;
    let archery = factory::create_activity(db).await?;
    let canoeing = factory::create_activity(db).await?;

    let first = factory::signup::SignupFactory::new(db, camper.id, archery.id)
        .time(9)
        .build()
        .await?;
    let second = factory::signup::SignupFactory::new(db, camper.id, canoeing.id)
        .time(14)
        .build()
        .await?;
    factory::create_signup(db, other.id, archery.id).await?;

    let result = CamperRepository::new(db)
        .find_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(result.signups.len(), 2);
    assert_eq!(result.signups[0].id, first.id);
    assert_eq!(result.signups[0].activity_id, archery.id);
    assert_eq!(result.signups[0].time, 9);
    assert_eq!(result.signups[1].id, second.id);
    assert_eq!(result.signups[1].time, 14);

    Ok(())
}

/// Tests fetching a camper that does not exist.
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

    let result = CamperRepository::new(db).find_with_signups(999).await?;

    assert!(result.is_none());

    Ok(())
}
