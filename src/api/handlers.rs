//! HTTP API handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::extract::JsonOrForm;
use crate::error::{ApiError, ErrorBody};
use crate::metrics;
use crate::restaurants::{CreateRestaurant, Restaurant, RestaurantStore, UpdateRestaurant};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Restaurant store.
    pub store: Arc<RestaurantStore>,
    /// Prometheus exposition handle, when the recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RestaurantStore::new()),
            prometheus: None,
        }
    }

    /// Create app state wired to an installed Prometheus recorder.
    pub fn with_prometheus(handle: PrometheusHandle) -> Self {
        Self {
            prometheus: Some(handle),
            ..Self::new()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Query parameters for listing restaurants.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Filter by cuisine (case-insensitive exact match).
    #[serde(default)]
    pub cuisine: Option<String>,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("not_found", format!("no route for {uri}"))),
    )
}

/// Prometheus exposition handler.
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// List restaurants, optionally filtered by cuisine.
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Restaurant>> {
    Json(state.store.list(params.cuisine.as_deref()))
}

/// Create a restaurant. Returns 201 with a Location header.
pub async fn create_restaurant(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateRestaurant>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(|errors| {
        metrics::inc_validation_failures();
        ApiError::Validation(errors)
    })?;

    let restaurant = state.store.insert(payload);
    metrics::inc_restaurants_created();
    info!(id = %restaurant.id, name = %restaurant.name, "Restaurant created");

    let location = format!("/api/restaurants/{}", restaurant.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(restaurant),
    ))
}

/// Fetch a single restaurant by id.
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Restaurant>, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.get(id).map(Json).ok_or(ApiError::NotFound(id))
}

/// Update a restaurant. Absent fields are left unchanged.
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonOrForm(payload): JsonOrForm<UpdateRestaurant>,
) -> Result<Json<Restaurant>, ApiError> {
    let id = parse_id(&raw_id)?;
    payload.validate().map_err(|errors| {
        metrics::inc_validation_failures();
        ApiError::Validation(errors)
    })?;

    let restaurant = state
        .store
        .update(id, payload)
        .ok_or(ApiError::NotFound(id))?;
    metrics::inc_restaurants_updated();
    info!(id = %restaurant.id, "Restaurant updated");

    Ok(Json(restaurant))
}

/// Delete a restaurant. Returns 204 on success.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    if !state.store.remove(id) {
        return Err(ApiError::NotFound(id));
    }
    metrics::inc_restaurants_deleted();
    info!(id = %id, "Restaurant deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_starts_empty() {
        let state = AppState::new();
        assert!(state.store.is_empty());
        assert!(state.prometheus.is_none());
    }

    #[test]
    fn parse_id_accepts_uuids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("42").unwrap_err();
        assert!(matches!(err, ApiError::InvalidId(_)));
    }
}
