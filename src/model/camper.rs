use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::JsonFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Signup as listed under a camper, without the camper reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperSignupDto {
    pub id: i32,
    pub activity_id: i32,
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperDetailDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub signups: Vec<CamperSignupDto>,
}

/// Camper creation payload.
///
/// Fields are kept as raw JSON values so type mismatches are reported as
/// validation messages rather than body rejections. An explicit `null` counts as
/// missing.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CreateCamperDto {
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[schema(value_type = i32)]
    pub age: Option<Value>,
}

impl<'de> Deserialize<'de> for CreateCamperDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = JsonFields::deserialize(deserializer)?;

        Ok(Self {
            name: fields.take("name"),
            age: fields.take("age"),
        })
    }
}

/// Partial camper update; only fields present in the payload are touched.
///
/// An explicit `null` is kept as `Some(Value::Null)` so it fails validation.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct UpdateCamperDto {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub age: Option<Value>,
}

impl<'de> Deserialize<'de> for UpdateCamperDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = JsonFields::deserialize(deserializer)?;

        Ok(Self {
            name: fields.take_present("name"),
            age: fields.take_present("age"),
        })
    }
}
