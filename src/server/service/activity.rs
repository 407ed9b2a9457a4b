use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::{Activity, CreateActivityParams},
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every activity
    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        let repo = ActivityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new activity
    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, AppError> {
        let repo = ActivityRepository::new(self.db);

        let activity = repo.create(params).await?;

        tracing::info!("Created activity {}", activity.id);

        Ok(activity)
    }

    /// Deletes an activity along with its signups
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ActivityRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::info!("Deleted activity {}", id);
        }

        Ok(deleted)
    }
}
