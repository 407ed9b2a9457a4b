//! Activity domain models and parameters.

use crate::{
    model::activity::{ActivityDto, CreateActivityDto},
    server::{
        error::AppError,
        util::validate::{self, TextError},
    },
};

/// The activity domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

impl Activity {
    /// Converts an entity model to the activity domain model.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}

/// Parameters for creating a new activity.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateActivityParams {
    pub name: String,
    pub difficulty: i32,
}

impl CreateActivityParams {
    /// Validates a creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateActivityParams)` - Name is a non-empty string and difficulty an integer
    /// - `Err(AppError::Validation)` - One message per invalid field
    pub fn try_from_dto(dto: CreateActivityDto) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let name = match validate::non_empty_text(dto.name.as_ref()) {
            Ok(name) => Some(name.to_string()),
            Err(TextError::Empty) => {
                errors.push("Name is required".to_string());
                None
            }
            Err(TextError::NotAString) => {
                errors.push("Name must be a string".to_string());
                None
            }
        };

        let difficulty = match dto.difficulty.as_ref() {
            None => {
                errors.push("Difficulty is required".to_string());
                None
            }
            Some(value) => {
                let difficulty = validate::integer(value).and_then(|n| i32::try_from(n).ok());
                if difficulty.is_none() {
                    errors.push("Difficulty must be an integer".to_string());
                }
                difficulty
            }
        };

        match (name, difficulty) {
            (Some(name), Some(difficulty)) if errors.is_empty() => Ok(Self { name, difficulty }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}
