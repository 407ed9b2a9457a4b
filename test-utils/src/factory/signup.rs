//! Signup factory for creating test signup entities.
//!
//! Signups reference a camper and an activity, so the factory takes both IDs. Use
//! `helpers::create_signup_with_dependencies` to create the parents as well.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test signups with customizable fields.
pub struct SignupFactory<'a> {
    db: &'a DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
    time: i32,
}

impl<'a> SignupFactory<'a> {
    /// Creates a new SignupFactory for the given camper and activity.
    ///
    /// Defaults:
    /// - time: `9`
    pub fn new(db: &'a DatabaseConnection, camper_id: i32, activity_id: i32) -> Self {
        Self {
            db,
            camper_id,
            activity_id,
            time: 9,
        }
    }

    /// Sets the hour of the day for the signup.
    pub fn time(mut self, time: i32) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the signup entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::signup::Model)` - Created signup entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::signup::Model, DbErr> {
        let now = Utc::now();
        entity::signup::ActiveModel {
            camper_id: ActiveValue::Set(self.camper_id),
            activity_id: ActiveValue::Set(self.activity_id),
            time: ActiveValue::Set(self.time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a signup with default values for the given camper and activity.
pub async fn create_signup(
    db: &DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
) -> Result<entity::signup::Model, DbErr> {
    SignupFactory::new(db, camper_id, activity_id).build().await
}
