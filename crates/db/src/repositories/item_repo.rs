//! Repository for the `items` table.

use sqlx::PgPool;
use shareit_core::types::DbId;

use crate::models::item::{CreateItem, Item, RequestedItem, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, available, owner_id, request_id";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, description, available, owner_id, request_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.available)
            .bind(owner_id)
            .bind(input.request_id)
            .fetch_one(pool)
            .await
    }

    /// Find an item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an item with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM items WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Patch an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                available = COALESCE($4, available)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    /// List all items belonging to an owner, ordered by ID.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Item>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over name and description,
    /// available items only. LIKE metacharacters in the text match
    /// themselves, not as wildcards.
    pub async fn search(pool: &PgPool, text: &str) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE available AND (name ILIKE $1 OR description ILIKE $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(format!("%{}%", Self::escape_like(text)))
            .fetch_all(pool)
            .await
    }

    /// Escape `\`, `%` and `_` so user-supplied search text cannot act as
    /// a LIKE pattern.
    fn escape_like(text: &str) -> String {
        text.replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    }

    /// List the minimal references of items offered in answer to a request.
    pub async fn list_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<RequestedItem>, sqlx::Error> {
        sqlx::query_as::<_, RequestedItem>(
            "SELECT id, name, owner_id FROM items WHERE request_id = $1 ORDER BY id",
        )
        .bind(request_id)
        .fetch_all(pool)
        .await
    }
}
