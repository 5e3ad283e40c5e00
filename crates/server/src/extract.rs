//! Caller-identity extractor for axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shareit_core::types::DbId;

use crate::error::AppError;

/// Header carrying the caller's user ID on every endpoint.
pub const SHARER_USER_ID: &str = "x-sharer-user-id";

/// Caller identity extracted from the `X-Sharer-User-Id` header.
///
/// The header value is trusted as-is (no session verification); handlers
/// still check that the ID refers to an existing user wherever the
/// operation requires it. Use this as an extractor parameter in any handler
/// that needs the caller:
///
/// ```ignore
/// async fn my_handler(caller: SharerId) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = caller.0, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SharerId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for SharerId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::BadRequest("Missing X-Sharer-User-Id header".into())
            })?;

        let user_id: DbId = header.parse().map_err(|_| {
            AppError::BadRequest("X-Sharer-User-Id must be a numeric user id".into())
        })?;

        Ok(SharerId(user_id))
    }
}
