use super::*;

/// Tests creating a new activity.
///
/// Expected: Ok with activity created
#[tokio::test]
async fn creates_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = ActivityRepository::new(db)
        .create(CreateActivityParams {
            name: "Archery".to_string(),
            difficulty: 2,
        })
        .await?;

    assert_eq!(activity.name, "Archery");
    assert_eq!(activity.difficulty, 2);

    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_some());

    Ok(())
}
