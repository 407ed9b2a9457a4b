use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        camper::{CamperDetailDto, CamperDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        error::AppError,
        model::camper::{Camper, CreateCamperParams, UpdateCamperParams},
        service::camper::CamperService,
        state::AppState,
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

fn camper_not_found() -> AppError {
    AppError::NotFound("Camper not found".to_string())
}

/// Extracts the camper ID, treating a non-integer path segment as an unknown camper.
fn camper_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id).map_err(|_| camper_not_found())
}

/// List all campers.
///
/// # Returns
/// - `200 OK` - Every camper as `{id, name, age}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campers", body = Vec<CamperDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::new(&state.db).get_all().await?;

    let dto: Vec<CamperDto> = campers.into_iter().map(Camper::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a camper by ID with its signups.
///
/// # Returns
/// - `200 OK` - Camper with nested `{id, activity_id, time}` signups
/// - `404 Not Found` - No camper with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved camper", body = CamperDetailDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = camper_id(id)?;

    let camper = CamperService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(camper_not_found)?;

    Ok((StatusCode::OK, Json(camper.into_dto())))
}

/// Create a new camper.
///
/// Validates that the name is a non-empty string and the age an integer between 8 and
/// 18, reporting every failing field at once.
///
/// # Returns
/// - `201 Created` - The created camper
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateCamperParams::try_from_dto(payload)?;

    let camper = CamperService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(camper.into_dto())))
}

/// Partially update a camper.
///
/// Only fields present in the body are validated and written. A missing camper is
/// reported before any field validation.
///
/// # Returns
/// - `202 Accepted` - The updated camper
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No camper with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 202, description = "Successfully updated camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCamperDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = camper_id(id)?;
    let service = CamperService::new(&state.db);

    if !service.exists(id).await? {
        return Err(camper_not_found());
    }

    let Json(payload) = payload?;

    let params = UpdateCamperParams::try_from_dto(payload)?;

    let camper = service
        .update(id, params)
        .await?
        .ok_or_else(camper_not_found)?;

    Ok((StatusCode::ACCEPTED, Json(camper.into_dto())))
}
