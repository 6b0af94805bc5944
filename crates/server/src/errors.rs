use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const AD_NOT_FOUND: &str = "Ad not found";
pub const URL_NOT_FOUND: &str = "The requested URL was not found on the server.";
pub const STORAGE_FAILURE: &str = "An internal storage error occurred.";

/// Uniform JSON error envelope: `{"error": <category>, "message": <detail>}`.
#[derive(Debug, Error)]
#[error("{error}: {message}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self { status, error, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", STORAGE_FAILURE)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => JsonApiError::bad_request(msg),
            ServiceError::NotFound(_) => JsonApiError::not_found(AD_NOT_FOUND),
            ServiceError::Storage(msg) => {
                error!(err = %msg, "storage error surfaced as 500");
                JsonApiError::internal()
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        warn!(%status, reason = %rejection.body_text(), "rejected request body");
        // oversized bodies keep their 413; every other body problem is a 400
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return JsonApiError::new(status, "Payload Too Large", rejection.body_text());
        }
        JsonApiError::bad_request(rejection.body_text())
    }
}

/// Only integer ids match `/ads/{id}`; anything else is treated like an unknown route.
impl From<PathRejection> for JsonApiError {
    fn from(_: PathRejection) -> Self {
        JsonApiError::not_found(AD_NOT_FOUND)
    }
}
