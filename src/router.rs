use axum::{Router, middleware};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::cors::{cors_layer, short_circuit_options};
use crate::middleware::error_body::{fill_empty_error_body, route_not_found};
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::health::router::init_health_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;

/// Builds the full application.
///
/// Layers run outermost first: request logging, CORS, the `OPTIONS`
/// short-circuit, JSON bodies for bodiless errors, the request timeout, then
/// the route. Role gates are enforced by each handler's extractor.
pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);
    let request_timeout = state.request_timeout;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_health_router())
                .nest("/auth", init_auth_router())
                .nest("/admin/teachers", init_teachers_router())
                .nest("/classes", init_classes_router()),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(fill_empty_error_body))
        .layer(middleware::from_fn(short_circuit_options))
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
