//! Item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shareit_core::types::{DbId, Timestamp};

use crate::models::booking::BookingWindow;
use crate::models::comment::CommentResponse;

/// Full item row from the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: DbId,
    /// Set when the item was listed in answer to an item request.
    pub request_id: Option<DbId>,
}

/// DTO for listing a new item. The owner comes from the caller header,
/// not the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<DbId>,
}

/// DTO for patching an item. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Item representation for API responses.
///
/// `last_booking` / `next_booking` are populated only when the viewer is
/// the item's owner; other viewers see neither field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<DbId>,
    pub last_booking: Option<Timestamp>,
    pub next_booking: Option<Timestamp>,
    pub comments: Vec<CommentResponse>,
}

impl ItemResponse {
    /// Build the owner-facing view, including the derived booking window.
    pub fn for_owner(item: Item, window: BookingWindow, comments: Vec<CommentResponse>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: window.last_booking,
            next_booking: window.next_booking,
            comments,
        }
    }

    /// Build the view shown to any non-owner: no booking window.
    pub fn for_viewer(item: Item, comments: Vec<CommentResponse>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments,
        }
    }
}

/// Minimal item reference embedded in item-request responses.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItem {
    pub id: DbId,
    pub name: String,
    pub owner_id: DbId,
}
