//! Signup domain models and parameters.

use std::ops::RangeInclusive;

use crate::{
    model::{camper::CamperSignupDto, signup::CreateSignupDto, signup::SignupDto},
    server::{
        model::{activity::Activity, camper::Camper},
        util::validate,
    },
};

/// Hours of the day a signup may be scheduled at.
pub const HOUR_RANGE: RangeInclusive<i64> = 0..=23;

/// The signup domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub id: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub time: i32,
}

impl Signup {
    /// Converts an entity model to the signup domain model.
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
            time: entity.time,
        }
    }

    /// Converts to the DTO listed under a camper.
    pub fn into_camper_dto(self) -> CamperSignupDto {
        CamperSignupDto {
            id: self.id,
            activity_id: self.activity_id,
            time: self.time,
        }
    }
}

/// A signup with the camper and activity it joins.
#[derive(Debug, Clone)]
pub struct SignupWithRelations {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

impl SignupWithRelations {
    pub fn into_dto(self) -> SignupDto {
        SignupDto {
            id: self.signup.id,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            activity: self.activity.into_dto(),
            camper: self.camper.into_dto(),
            time: self.signup.time,
        }
    }
}

/// Unchecked signup request as received from the client.
///
/// IDs that are absent or not integers are `None` and resolve to "not found";
/// the time is range-checked by the service once both references exist.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub camper_id: Option<i32>,
    pub activity_id: Option<i32>,
    pub time: Option<serde_json::Value>,
}

impl From<CreateSignupDto> for SignupRequest {
    fn from(dto: CreateSignupDto) -> Self {
        Self {
            camper_id: validate::id(dto.camper_id.as_ref()),
            activity_id: validate::id(dto.activity_id.as_ref()),
            time: dto.time,
        }
    }
}

/// Validated parameters for inserting a signup.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSignupParams {
    pub camper_id: i32,
    pub activity_id: i32,
    pub time: i32,
}
