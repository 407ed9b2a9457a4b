//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    difficulty: i32,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - difficulty: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Activity {}", id),
            difficulty: 1,
        }
    }

    /// Sets the name for the activity.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the difficulty rating for the activity.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        let now = Utc::now();
        entity::activity::ActiveModel {
            name: ActiveValue::Set(self.name),
            difficulty: ActiveValue::Set(self.difficulty),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(db).build().await`.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_activity_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Activity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = create_activity(db).await?;

        assert!(activity.name.starts_with("Activity "));
        assert_eq!(activity.difficulty, 1);

        Ok(())
    }

    #[tokio::test]
    async fn creates_activity_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Activity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = ActivityFactory::new(db)
            .name("Archery")
            .difficulty(3)
            .build()
            .await?;

        assert_eq!(activity.name, "Archery");
        assert_eq!(activity.difficulty, 3);

        Ok(())
    }
}
