//! Request DTOs with the gateway's schema-validation rules.
//!
//! Only shape and field-level rules live here; business rules (existence,
//! availability, authorization) belong to the server tier.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shareit_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

/// Body of `POST /bookings`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_booking_period"))]
pub struct BookItemRequest {
    pub item_id: DbId,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// The booking window must be future-facing and non-empty: `start` may be
/// present or future, `end` must be strictly future and after `start`.
fn validate_booking_period(dto: &BookItemRequest) -> Result<(), ValidationError> {
    let now = Utc::now();
    if dto.start < now {
        return Err(ValidationError::new("start_in_past")
            .with_message("booking start must not be in the past".into()));
    }
    if dto.end <= now {
        return Err(ValidationError::new("end_not_future")
            .with_message("booking end must be in the future".into()));
    }
    if dto.end <= dto.start {
        return Err(ValidationError::new("end_before_start")
            .with_message("booking end must be after booking start".into()));
    }
    Ok(())
}

/// Body of `POST /items`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub available: bool,
    pub request_id: Option<DbId>,
}

/// Body of `PATCH /items/{itemId}`. Free-form; absent fields are left
/// untouched by the server.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Body of `POST /users`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Body of `PATCH /users/{id}`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Body of `POST /items/{itemId}/comment`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CommentCreate {
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

/// Body of `POST /requests`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RequestCreate {
    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

/// Reject strings that are empty or whitespace-only.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
