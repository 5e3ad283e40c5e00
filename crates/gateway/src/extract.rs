//! Caller-identity extractor for gateway handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shareit_core::types::DbId;

use crate::error::GatewayError;

/// Header carrying the caller's user ID on every endpoint.
pub const SHARER_USER_ID: &str = "x-sharer-user-id";

/// Caller identity extracted from the `X-Sharer-User-Id` header.
///
/// The gateway only checks the header is present and numeric; the server
/// decides whether the ID refers to an existing user.
#[derive(Debug, Clone, Copy)]
pub struct SharerId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for SharerId {
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                GatewayError::BadRequest("Missing X-Sharer-User-Id header".into())
            })?;

        let user_id: DbId = header.parse().map_err(|_| {
            GatewayError::BadRequest("X-Sharer-User-Id must be a numeric user id".into())
        })?;

        Ok(SharerId(user_id))
    }
}
