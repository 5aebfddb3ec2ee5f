//! Request tracking middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::metrics;

/// Record a request counter and latency histogram per matched route.
///
/// Uses the matched route pattern (e.g. `/api/restaurants/:id`) rather
/// than the raw path to keep metric cardinality bounded.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().clone();

    let response = next.run(req).await;

    metrics::inc_requests(method.as_str(), &path, response.status().as_u16());
    metrics::record_http_latency(start, &path);

    response
}
