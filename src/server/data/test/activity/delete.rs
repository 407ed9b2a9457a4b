use super::*;

/// Tests deleting an activity without signups.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let deleted = ActivityRepository::new(db).delete(activity.id).await?;

    assert!(deleted);
    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_none());

    Ok(())
}

/// Tests deleting an activity removes its signups but no others.
///
/// Expected: Ok(true), the activity's signups are gone, other signups and the
/// camper remain
#[tokio::test]
async fn deletes_signups_of_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, _signup) =
        factory::helpers::create_signup_with_dependencies(db).await?;
    let other_activity = factory::create_activity(db).await?;
    let kept = factory::create_signup(db, camper.id, other_activity.id).await?;

    let deleted = ActivityRepository::new(db).delete(activity.id).await?;

    assert!(deleted);

    let remaining = entity::prelude::Signup::find()
        .filter(entity::signup::Column::ActivityId.eq(activity.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let kept_signup = entity::prelude::Signup::find_by_id(kept.id).one(db).await?;
    assert!(kept_signup.is_some());

    let db_camper = entity::prelude::Camper::find_by_id(camper.id).one(db).await?;
    assert!(db_camper.is_some());

    Ok(())
}

/// Tests deleting an activity that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ActivityRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
