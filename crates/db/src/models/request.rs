//! Item-request entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shareit_core::types::{DbId, Timestamp};

use crate::models::item::RequestedItem;

/// Full item-request row from the `item_requests` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRequest {
    pub id: DbId,
    pub description: String,
    pub requester_id: DbId,
    pub created: Timestamp,
}

/// DTO for creating an item request. The requester comes from the header.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub description: String,
}

/// Item-request representation for API responses, with the derived list of
/// items offered in answer to it.
#[derive(Debug, Serialize)]
pub struct ItemRequestResponse {
    pub id: DbId,
    pub description: String,
    pub created: Timestamp,
    pub items: Vec<RequestedItem>,
}

impl ItemRequestResponse {
    /// Pure mapping from an already-fetched request and its answers.
    pub fn from_parts(request: ItemRequest, items: Vec<RequestedItem>) -> Self {
        Self {
            id: request.id,
            description: request.description,
            created: request.created,
            items,
        }
    }
}
