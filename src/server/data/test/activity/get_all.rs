use super::*;

/// Tests listing activities returns every row ordered by ID.
///
/// Expected: Ok with activities in insertion order
#[tokio::test]
async fn returns_all_activities_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_camp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .difficulty(2)
        .build()
        .await?;
    let second = factory::create_activity(db).await?;

    let activities = ActivityRepository::new(db).get_all().await?;

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, first.id);
    assert_eq!(activities[0].name, "Archery");
    assert_eq!(activities[0].difficulty, 2);
    assert_eq!(activities[1].id, second.id);

    Ok(())
}
