//! HTTP API route definitions.
//!
//! Layer order matters: CORS wraps everything, then tracing, then the
//! body limit and metrics middleware, then the routes themselves. The
//! fallback catches unmatched paths and the error type renders every
//! handler failure, so no request escapes with a bare framework response.

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_restaurant, delete_restaurant, get_restaurant, health, list_restaurants, not_found,
    prometheus_metrics, update_restaurant, AppState,
};
use super::middleware::track_metrics;
use crate::config::Config;

/// Create the API router with default configuration.
pub fn create_router(state: AppState) -> Router {
    create_router_with(state, &Config::default())
}

/// Create the API router, honoring the CORS origin and body limit
/// from configuration.
pub fn create_router_with(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest("/api/restaurants", restaurant_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(track_metrics))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants).post(create_restaurant))
        .route(
            "/:id",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
}

fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config
        .cors_allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => base.allow_origin(origin),
        None => base.allow_origin(Any),
    }
}
