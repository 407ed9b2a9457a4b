use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{activity, camper, signup},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camp API",
        description = "Campers, activities and the signups joining them"
    ),
    tags(
        (name = "camper", description = "Registered campers"),
        (name = "activity", description = "Activities campers can sign up for"),
        (name = "signup", description = "Camper signups for activities")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Registers every endpoint together with its OpenAPI description, serves the
/// generated document through Swagger UI at `/swagger-ui` and wraps everything in
/// request tracing and permissive CORS.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(camper::get_campers, camper::create_camper))
        .routes(routes!(camper::get_camper_by_id, camper::update_camper))
        .routes(routes!(activity::get_activities, activity::create_activity))
        .routes(routes!(activity::delete_activity))
        .routes(routes!(signup::create_signup))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
