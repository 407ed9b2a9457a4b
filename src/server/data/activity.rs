//! Activity data repository for database operations.
//!
//! Provides the `ActivityRepository` for listing, fetching, creating and deleting
//! activities. Deletion removes the activity's signups in the same transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::activity::{Activity, CreateActivityParams};

/// Repository providing database operations for activity management.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every activity ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - All activities, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    /// Finds an activity by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Activity found
    /// - `Ok(None)` - No activity with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let activity = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(activity.map(Activity::from_entity))
    }

    /// Inserts a new activity.
    ///
    /// # Returns
    /// - `Ok(Activity)` - The created activity with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, DbErr> {
        let now = Utc::now();
        let activity = entity::activity::ActiveModel {
            name: ActiveValue::Set(params.name),
            difficulty: ActiveValue::Set(params.difficulty),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(activity))
    }

    /// Deletes an activity and every signup referencing it.
    ///
    /// Both deletes run in one transaction, so a failure leaves the signups intact.
    ///
    /// # Returns
    /// - `Ok(true)` - The activity existed and was deleted
    /// - `Ok(false)` - No activity with that ID; nothing was changed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let signups = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        tracing::debug!(
            "Deleted activity {} and {} signup(s)",
            id,
            signups.rows_affected
        );

        Ok(true)
    }
}
