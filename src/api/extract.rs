//! Body extraction accepting JSON and URL-encoded forms.

use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extractor that deserializes the request body from either
/// `application/json` or `application/x-www-form-urlencoded`,
/// negotiated on the `Content-Type` header. Anything else is
/// rejected with 415.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| body_error(rejection.status(), rejection.body_text()))?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| body_error(rejection.status(), rejection.body_text()))?;
            Ok(Self(value))
        } else {
            Err(ApiError::UnsupportedMediaType(content_type))
        }
    }
}

/// Map an extractor rejection into the API taxonomy, keeping the
/// body-limit rejection distinct from plain deserialization failures.
fn body_error(status: axum::http::StatusCode, text: String) -> ApiError {
    if status == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::MalformedBody(text)
    }
}
