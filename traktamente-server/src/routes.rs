//! Router assembly

use crate::handlers;
use crate::manifest::{BY_CODE, BY_COUNTRY, LIST, ROOT};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Routes serving allowance data, without middleware
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(ROOT, get(handlers::describe))
        .route(LIST, get(handlers::list_allowances))
        .route(BY_CODE, get(handlers::allowance_by_code))
        .route(BY_COUNTRY, get(handlers::allowance_by_country))
        // Empty path segments are a bad request, not an unknown route
        .route("/traktamente/code", get(handlers::missing_code))
        .route("/traktamente/code/", get(handlers::missing_code))
        .route("/traktamente/country", get(handlers::missing_country))
        .route("/traktamente/country/", get(handlers::missing_country))
}

/// Full application: API routes, metrics, and middleware
pub fn app(state: AppState) -> Router {
    api_routes()
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
