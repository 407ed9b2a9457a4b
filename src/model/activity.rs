use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::JsonFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CreateActivityDto {
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[schema(value_type = i32)]
    pub difficulty: Option<Value>,
}

impl<'de> Deserialize<'de> for CreateActivityDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = JsonFields::deserialize(deserializer)?;

        Ok(Self {
            name: fields.take("name"),
            difficulty: fields.take("difficulty"),
        })
    }
}
