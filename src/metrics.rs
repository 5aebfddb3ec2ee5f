//! Prometheus metrics for request tracking and monitoring.
//!
//! This module provides metrics for:
//! - HTTP request counts and latency
//! - Restaurant create/update/delete throughput
//! - Validation failures

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Restaurants created counter metric name.
pub const METRIC_RESTAURANTS_CREATED: &str = "restaurants_created_total";
/// Restaurants updated counter metric name.
pub const METRIC_RESTAURANTS_UPDATED: &str = "restaurants_updated_total";
/// Restaurants deleted counter metric name.
pub const METRIC_RESTAURANTS_DELETED: &str = "restaurants_deleted_total";
/// Validation failures counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(
        METRIC_RESTAURANTS_CREATED,
        "Total number of restaurants created"
    );
    describe_counter!(
        METRIC_RESTAURANTS_UPDATED,
        "Total number of restaurants updated"
    );
    describe_counter!(
        METRIC_RESTAURANTS_DELETED,
        "Total number of restaurants deleted"
    );
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of request payloads that failed validation"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and return a handle for exposition.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Record HTTP request latency for an endpoint.
pub fn record_http_latency(start: Instant, path: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "path" => path.to_string()).record(latency_ms);
}

/// Increment the served-request counter.
pub fn inc_requests(method: &str, path: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
}

/// Increment the restaurants created counter.
pub fn inc_restaurants_created() {
    counter!(METRIC_RESTAURANTS_CREATED).increment(1);
}

/// Increment the restaurants updated counter.
pub fn inc_restaurants_updated() {
    counter!(METRIC_RESTAURANTS_UPDATED).increment(1);
}

/// Increment the restaurants deleted counter.
pub fn inc_restaurants_deleted() {
    counter!(METRIC_RESTAURANTS_DELETED).increment(1);
}

/// Increment the validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}
