//! Signup data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::signup::{CreateSignupParams, Signup};

/// Repository providing database operations for signups.
pub struct SignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupRepository<'a> {
    /// Creates a new SignupRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new signup.
    ///
    /// Callers must have checked that the referenced camper and activity exist.
    ///
    /// # Returns
    /// - `Ok(Signup)` - The created signup with its generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, params: CreateSignupParams) -> Result<Signup, DbErr> {
        let now = Utc::now();
        let signup = entity::signup::ActiveModel {
            camper_id: ActiveValue::Set(params.camper_id),
            activity_id: ActiveValue::Set(params.activity_id),
            time: ActiveValue::Set(params.time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(signup))
    }
}
