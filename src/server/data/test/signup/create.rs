use super::*;

/// Tests creating a signup between an existing camper and activity.
///
/// Expected: Ok with signup created
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let signup = SignupRepository::new(db)
        .create(CreateSignupParams {
            camper_id: camper.id,
            activity_id: activity.id,
            time: 10,
        })
        .await?;

    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);
    assert_eq!(signup.time, 10);

    let db_signup = entity::prelude::Signup::find_by_id(signup.id)
        .one(db)
        .await?;
    assert!(db_signup.is_some());

    Ok(())
}

/// Tests that the same camper may sign up for an activity more than once.
///
/// Expected: Ok with two distinct signups
#[tokio::test]
async fn allows_repeat_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let repo = SignupRepository::new(db);
    let morning = repo
        .create(CreateSignupParams {
            camper_id: camper.id,
            activity_id: activity.id,
            time: 9,
        })
        .await?;
    let evening = repo
        .create(CreateSignupParams {
            camper_id: camper.id,
            activity_id: activity.id,
            time: 18,
        })
        .await?;

    assert_ne!(morning.id, evening.id);

    Ok(())
}
