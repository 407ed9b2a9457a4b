use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::AppError, model::signup::SignupRequest, service::signup::SignupService,
        state::AppState,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// Sign a camper up for an activity.
///
/// # Returns
/// - `201 Created` - The signup with its camper and activity embedded
/// - `400 Bad Request` - Malformed body or time outside 0-23
/// - `404 Not Found` - Camper or activity not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 400, description = "Invalid signup data", body = ValidationErrorDto),
        (status = 404, description = "Camper or activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let signup = SignupService::new(&state.db)
        .create(SignupRequest::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(signup.into_dto())))
}
