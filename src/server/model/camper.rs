//! Camper domain models and parameters.

use std::ops::RangeInclusive;

use crate::{
    model::camper::{CamperDetailDto, CamperDto, CreateCamperDto, UpdateCamperDto},
    server::{
        error::AppError,
        model::signup::Signup,
        util::validate::{self, TextError},
    },
};

/// Accepted camper ages.
pub const AGE_RANGE: RangeInclusive<i64> = 8..=18;

const AGE_RANGE_MESSAGE: &str = "Age must be an integer between 8 and 18";

/// The camper domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl Camper {
    /// Converts an entity model to the camper domain model.
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
        }
    }

    /// Converts the domain model to its summary DTO.
    pub fn into_dto(self) -> CamperDto {
        CamperDto {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }
}

/// A camper together with every signup it owns.
#[derive(Debug, Clone)]
pub struct CamperWithSignups {
    pub camper: Camper,
    pub signups: Vec<Signup>,
}

impl CamperWithSignups {
    /// Converts to the detail DTO, listing signups without their camper reference.
    pub fn into_dto(self) -> CamperDetailDto {
        CamperDetailDto {
            id: self.camper.id,
            name: self.camper.name,
            age: self.camper.age,
            signups: self
                .signups
                .into_iter()
                .map(Signup::into_camper_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new camper.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCamperParams {
    pub name: String,
    pub age: i32,
}

impl CreateCamperParams {
    /// Validates a creation payload.
    ///
    /// Every failing field contributes one message so clients can fix them all at once.
    ///
    /// # Returns
    /// - `Ok(CreateCamperParams)` - Name is a non-empty string and age an integer in range
    /// - `Err(AppError::Validation)` - One message per invalid field
    pub fn try_from_dto(dto: CreateCamperDto) -> Result<Self, AppError> {
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

        let age = match dto.age.as_ref() {
            None => {
                errors.push("Age is required".to_string());
                None
            }
            Some(value) => {
                let age = validate::integer_in_range(value, AGE_RANGE);
                if age.is_none() {
                    errors.push(AGE_RANGE_MESSAGE.to_string());
                }
                age
            }
        };

        match (name, age) {
            (Some(name), Some(age)) if errors.is_empty() => Ok(Self { name, age }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Parameters for a partial camper update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCamperParams {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UpdateCamperParams {
    /// Validates the fields present in an update payload.
    ///
    /// # Returns
    /// - `Ok(UpdateCamperParams)` - Every present field is valid
    /// - `Err(AppError::Validation)` - One message per invalid field
    pub fn try_from_dto(dto: UpdateCamperDto) -> Result<Self, AppError> {
        let mut errors = Vec::new();
        let mut params = Self::default();

        if let Some(value) = dto.name.as_ref() {
            match validate::non_empty_text(Some(value)) {
                Ok(name) => params.name = Some(name.to_string()),
                Err(TextError::Empty) => errors.push("Name cannot be empty".to_string()),
                Err(TextError::NotAString) => errors.push("Name must be a string".to_string()),
            }
        }

        if let Some(value) = dto.age.as_ref() {
            match validate::integer_in_range(value, AGE_RANGE) {
                Some(age) => params.age = Some(age),
                None => errors.push(AGE_RANGE_MESSAGE.to_string()),
            }
        }

        if errors.is_empty() {
            Ok(params)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_errors(dto: CreateCamperDto) -> Vec<String> {
        match CreateCamperParams::try_from_dto(dto) {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_boundary_ages() {
        for age in [8, 18] {
            let params = CreateCamperParams::try_from_dto(CreateCamperDto {
                name: Some(json!("Ann")),
                age: Some(json!(age)),
            })
            .unwrap();

            assert_eq!(params.age, age);
        }
    }

    #[test]
    fn rejects_ages_outside_range() {
        for age in [7, 19] {
            let errors = create_errors(CreateCamperDto {
                name: Some(json!("Ann")),
                age: Some(json!(age)),
            });

            assert_eq!(errors, vec![AGE_RANGE_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn rejects_non_integer_age() {
        let errors = create_errors(CreateCamperDto {
            name: Some(json!("Ann")),
            age: Some(json!("ten")),
        });

        assert_eq!(errors, vec![AGE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn zero_age_is_out_of_range_not_missing() {
        let errors = create_errors(CreateCamperDto {
            name: Some(json!("Ann")),
            age: Some(json!(0)),
        });

        assert_eq!(errors, vec![AGE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn collects_every_missing_field() {
        let errors = create_errors(CreateCamperDto::default());

        assert_eq!(
            errors,
            vec!["Name is required".to_string(), "Age is required".to_string()]
        );
    }

    #[test]
    fn update_ignores_absent_fields() {
        let params = UpdateCamperParams::try_from_dto(UpdateCamperDto::default()).unwrap();

        assert_eq!(params, UpdateCamperParams::default());
    }

    #[test]
    fn update_rejects_empty_name_and_bad_age() {
        let result = UpdateCamperParams::try_from_dto(UpdateCamperDto {
            name: Some(json!("")),
            age: Some(json!(30)),
        });

        match result {
            Err(AppError::Validation(errors)) => assert_eq!(
                errors,
                vec![
                    "Name cannot be empty".to_string(),
                    AGE_RANGE_MESSAGE.to_string()
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn update_accepts_boundary_ages() {
        for age in [8, 18] {
            let params = UpdateCamperParams::try_from_dto(UpdateCamperDto {
                name: None,
                age: Some(json!(age)),
            })
            .unwrap();

            assert_eq!(
                params,
                UpdateCamperParams {
                    name: None,
                    age: Some(age)
                }
            );
        }
    }

    #[test]
    fn update_rejects_null_age() {
        let result = UpdateCamperParams::try_from_dto(UpdateCamperDto {
            name: None,
            age: Some(serde_json::Value::Null),
        });

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors, vec![AGE_RANGE_MESSAGE.to_string()])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_string_name() {
        let errors = create_errors(CreateCamperDto {
            name: Some(json!(5)),
            age: Some(json!(10)),
        });
        assert_eq!(errors, vec!["Name must be a string".to_string()]);

        let result = UpdateCamperParams::try_from_dto(UpdateCamperDto {
            name: Some(json!(5)),
            age: None,
        });
        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors, vec!["Name must be a string".to_string()])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn update_rejects_null_name() {
        let result = UpdateCamperParams::try_from_dto(UpdateCamperDto {
            name: Some(serde_json::Value::Null),
            age: None,
        });

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
