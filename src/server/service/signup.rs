use sea_orm::DatabaseConnection;

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::AppError,
    model::signup::{CreateSignupParams, SignupRequest, SignupWithRelations, HOUR_RANGE},
    util::validate,
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a camper up for an activity at an hour of the day.
    ///
    /// Both references are resolved before the time is checked, so a request with a
    /// missing camper and a bad time reports the missing camper.
    ///
    /// # Returns
    /// - `Ok(SignupWithRelations)` - The created signup with its camper and activity
    /// - `Err(AppError::NotFound)` - Camper or activity is missing or not an integer ID
    /// - `Err(AppError::Validation)` - Time is not an integer between 0 and 23
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(&self, request: SignupRequest) -> Result<SignupWithRelations, AppError> {
        let camper = match request.camper_id {
            Some(id) => CamperRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };
        let activity = match request.activity_id {
            Some(id) => ActivityRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        let (Some(camper), Some(activity)) = (camper, activity) else {
            return Err(AppError::NotFound(
                "Camper or activity not found".to_string(),
            ));
        };

        let time = request
            .time
            .as_ref()
            .and_then(|value| validate::integer_in_range(value, HOUR_RANGE))
            .ok_or_else(|| AppError::Validation(vec!["Invalid time".to_string()]))?;

        let signup = SignupRepository::new(self.db)
            .create(CreateSignupParams {
                camper_id: camper.id,
                activity_id: activity.id,
                time,
            })
            .await?;

        tracing::info!(
            "Signed camper {} up for activity {} at {}:00",
            camper.id,
            activity.id,
            time
        );

        Ok(SignupWithRelations {
            signup,
            camper,
            activity,
        })
    }
}
