use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Single error message body, used for 404s and malformed requests.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field validation failures collected while checking a request body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}

/// Fields of a request body that must be a JSON object.
///
/// Request DTOs deserialize through this so arrays, scalars and `null` bodies are
/// rejected instead of being read as positional fields.
pub struct JsonFields(Map<String, Value>);

impl JsonFields {
    /// Takes a field, treating an explicit `null` the same as an absent field.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name).filter(|value| !value.is_null())
    }

    /// Takes a field, keeping an explicit `null` as `Some(Value::Null)`.
    ///
    /// Partial updates use this to tell "not provided" apart from "provided but empty".
    pub fn take_present(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }
}

impl<'de> Deserialize<'de> for JsonFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(de::Error::custom("request body must be a JSON object")),
        }
    }
}
