//! Repository for the `item_requests` table.

use sqlx::PgPool;
use shareit_core::types::{DbId, Timestamp};

use crate::models::request::{CreateItemRequest, ItemRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, requester_id, created";

/// Provides CRUD operations for item requests.
pub struct ItemRequestRepo;

impl ItemRequestRepo {
    /// Insert a new item request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        requester_id: DbId,
        input: &CreateItemRequest,
        created: Timestamp,
    ) -> Result<ItemRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO item_requests (description, requester_id, created)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(&input.description)
            .bind(requester_id)
            .bind(created)
            .fetch_one(pool)
            .await
    }

    /// Find an item request by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItemRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_requests WHERE id = $1");
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the caller's own requests, newest first.
    pub async fn list_by_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<ItemRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_requests WHERE requester_id = $1 ORDER BY created DESC"
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }

    /// List other users' requests, newest first.
    pub async fn list_by_other_requesters(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<ItemRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_requests WHERE requester_id <> $1 ORDER BY created DESC"
        );
        sqlx::query_as::<_, ItemRequest>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }
}
