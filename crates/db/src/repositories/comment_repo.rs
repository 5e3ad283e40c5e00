//! Repository for the `comments` table.

use sqlx::PgPool;
use shareit_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CommentWithAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, item_id, author_id, created";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        item_id: DbId,
        author_id: DbId,
        text: &str,
        created: Timestamp,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (text, item_id, author_id, created)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(text)
            .bind(item_id)
            .bind(author_id)
            .bind(created)
            .fetch_one(pool)
            .await
    }

    /// List an item's comments with their authors' display names, oldest
    /// first.
    pub async fn list_for_item(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.text, u.name AS author_name, c.created
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.item_id = $1
             ORDER BY c.created",
        )
        .bind(item_id)
        .fetch_all(pool)
        .await
    }
}
