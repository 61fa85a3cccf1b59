use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{client, trip},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trips API", description = "Trip listing and client registration"),
    tags((name = "trip", description = "Trips and their clients"))
)]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document under `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(trip::get_trips))
        .routes(routes!(trip::register_client))
        .routes(routes!(client::delete_client))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
