use sea_orm::DatabaseConnection;

use crate::server::{
    data::camper::CamperRepository,
    error::AppError,
    model::camper::{Camper, CamperWithSignups, CreateCamperParams, UpdateCamperParams},
};

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every camper
    pub async fn get_all(&self) -> Result<Vec<Camper>, AppError> {
        let repo = CamperRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a camper with its signups
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CamperWithSignups>, AppError> {
        let repo = CamperRepository::new(self.db);

        Ok(repo.find_with_signups(id).await?)
    }

    /// Checks whether a camper exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = CamperRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Creates a new camper
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, AppError> {
        let repo = CamperRepository::new(self.db);

        let camper = repo.create(params).await?;

        tracing::info!("Created camper {}", camper.id);

        Ok(camper)
    }

    /// Applies a partial update to a camper
    /// Returns None if the camper doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCamperParams,
    ) -> Result<Option<Camper>, AppError> {
        let repo = CamperRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }
}
