//! Error responses for the state endpoint

use crate::services::StateError;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the state endpoint
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The request body is not JSON
    #[error("invalid JSON body: {0}")]
    InvalidJson(serde_json::Error),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// Storage failed; not retried
    #[error(transparent)]
    State(#[from] StateError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl EndpointError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::State(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::InvalidJson(e) => {
                tracing::debug!(error = %e, "rejected request body");
                (status, Json(ErrorBody { error: "Invalid JSON" })).into_response()
            }
            Self::MethodNotAllowed(method) => {
                tracing::debug!(%method, "rejected method");
                (status, "Method Not Allowed").into_response()
            }
            // Storage details stay in the log
            Self::State(e) => {
                tracing::error!(error = %e, "state request failed");
                (status, Json(ErrorBody { error: "Storage unavailable" })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_error_status_codes() {
        let invalid = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        assert_eq!(
            EndpointError::InvalidJson(invalid).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EndpointError::MethodNotAllowed(Method::PUT).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            EndpointError::from(StateError::from(StoreError::Unavailable("down".into())))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
