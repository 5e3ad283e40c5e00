use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Gateway-level error type.
///
/// The gateway refuses malformed input itself and treats any failure to
/// reach the server tier as a bad gateway; every other outcome is the
/// server's response relayed verbatim.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request body failed schema validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The server tier could not be reached.
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Convenience type alias for handler return values.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<validator::ValidationErrors> for GatewayError {
    fn from(errors: validator::ValidationErrors) -> Self {
        GatewayError::Validation(errors.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::Upstream(err) => {
                tracing::error!(error = %err, "Failed to reach server tier");
                (
                    StatusCode::BAD_GATEWAY,
                    "The server is unavailable".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
