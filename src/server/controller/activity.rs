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
        activity::{ActivityDto, CreateActivityDto},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        error::AppError,
        model::activity::{Activity, CreateActivityParams},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

fn activity_not_found() -> AppError {
    AppError::NotFound("Activity not found".to_string())
}

/// List all activities.
///
/// # Returns
/// - `200 OK` - Every activity as `{id, name, difficulty}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    let dto: Vec<ActivityDto> = activities.into_iter().map(Activity::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a new activity.
///
/// # Returns
/// - `201 Created` - The created activity
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/activities",
    tag = ACTIVITY_TAG,
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Successfully created activity", body = ActivityDto),
        (status = 400, description = "Invalid activity data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<CreateActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateActivityParams::try_from_dto(payload)?;

    let activity = ActivityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

/// Delete an activity and its signups.
///
/// # Returns
/// - `204 No Content` - Activity deleted
/// - `404 Not Found` - No activity with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted activity"),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(Path(id)) = id else {
        return Err(activity_not_found());
    };

    let deleted = ActivityService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(activity_not_found())
    }
}
