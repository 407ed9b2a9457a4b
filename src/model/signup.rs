use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::{activity::ActivityDto, api::JsonFields, camper::CamperDto};

/// Created signup with its camper and activity embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub id: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub activity: ActivityDto,
    pub camper: CamperDto,
    pub time: i32,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CreateSignupDto {
    #[schema(value_type = i32)]
    pub camper_id: Option<Value>,
    #[schema(value_type = i32)]
    pub activity_id: Option<Value>,
    #[schema(value_type = i32)]
    pub time: Option<Value>,
}

impl<'de> Deserialize<'de> for CreateSignupDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = JsonFields::deserialize(deserializer)?;

        Ok(Self {
            camper_id: fields.take("camper_id"),
            activity_id: fields.take("activity_id"),
            time: fields.take("time"),
        })
    }
}
