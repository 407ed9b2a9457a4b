//! Camper data repository for database operations.
//!
//! Provides the `CamperRepository` for listing, fetching, creating and updating campers,
//! converting entity models into domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    camper::{Camper, CamperWithSignups, CreateCamperParams, UpdateCamperParams},
    signup::Signup,
};

/// Repository providing database operations for camper management.
pub struct CamperRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperRepository<'a> {
    /// Creates a new CamperRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every camper ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Camper>)` - All campers, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Camper>, DbErr> {
        let campers = entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .all(self.db)
            .await?;

        Ok(campers.into_iter().map(Camper::from_entity).collect())
    }

    /// Finds a camper by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - Camper found
    /// - `Ok(None)` - No camper with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camper>, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(id).one(self.db).await?;

        Ok(camper.map(Camper::from_entity))
    }

    /// Finds a camper by ID together with its signups, ordered by signup ID.
    ///
    /// # Returns
    /// - `Ok(Some(CamperWithSignups))` - Camper found, with zero or more signups
    /// - `Ok(None)` - No camper with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_signups(&self, id: i32) -> Result<Option<CamperWithSignups>, DbErr> {
        let result = entity::prelude::Camper::find_by_id(id)
            .find_with_related(entity::prelude::Signup)
            .all(self.db)
            .await?;

        Ok(result.into_iter().next().map(|(camper, signups)| {
            let mut signups: Vec<Signup> = signups.into_iter().map(Signup::from_entity).collect();
            signups.sort_by_key(|signup| signup.id);

            CamperWithSignups {
                camper: Camper::from_entity(camper),
                signups,
            }
        }))
    }

    /// Checks whether a camper with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Camper::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a new camper.
    ///
    /// # Returns
    /// - `Ok(Camper)` - The created camper with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, DbErr> {
        let now = Utc::now();
        let camper = entity::camper::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camper::from_entity(camper))
    }

    /// Applies a partial update to a camper.
    ///
    /// Only fields set in `params` are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The updated camper
    /// - `Ok(None)` - No camper with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCamperParams,
    ) -> Result<Option<Camper>, DbErr> {
        let Some(camper) = entity::prelude::Camper::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::camper::ActiveModel = camper.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let camper = active_model.update(self.db).await?;

        Ok(Some(Camper::from_entity(camper)))
    }
}
