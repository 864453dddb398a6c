//! Mapping errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scrivener_error::{ScrivenerError, ScrivenerErrorKind};
use serde_json::json;

/// A [`ScrivenerError`] rendered as `{"detail": ...}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub ScrivenerError);

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ScrivenerErrorKind::SchemaValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScrivenerErrorKind::UnknownStrategy(_) | ScrivenerErrorKind::DomainValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            ScrivenerErrorKind::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ScrivenerErrorKind::Generation(_)
            | ScrivenerErrorKind::Config(_)
            | ScrivenerErrorKind::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ScrivenerError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivener_error::{
        DomainValidationError, GenerationFailure, SchemaValidationError, TimeoutError,
        UnknownStrategyError,
    };
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(SchemaValidationError::new("x")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(UnknownStrategyError::new("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainValidationError::new("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(GenerationFailure::new("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TimeoutError::new(Duration::from_secs(1))).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }
}
