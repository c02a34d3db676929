//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wares_domain::error::WaresError;

/// JSON error body returned by API endpoints. `kind` is a stable
/// discriminant clients can match on instead of parsing the message.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

/// Maps [`WaresError`] to an HTTP response with appropriate status code.
pub struct ApiError(WaresError);

impl From<WaresError> for ApiError {
    fn from(err: WaresError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self.0 {
            WaresError::NotFound(err) => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
            WaresError::Unavailable(_) => {
                tracing::warn!(error = %self.0, "store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "unavailable",
                    self.0.to_string(),
                )
            }
            WaresError::Unexpected(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                kind,
            }),
        )
            .into_response()
    }
}
