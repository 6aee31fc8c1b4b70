use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{group, message, root::root, user},
    middleware::preflight::preflight,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Chat Backend API",
    description = "Users, groups and group messages"
))]
struct ApiDoc;

/// Builds the application router with all endpoints, API docs and middleware applied.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(user::routes())
        .merge(group::routes())
        .merge(message::routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(api_router)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .with_state(state)
        .layer(middleware::from_fn(preflight))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
