//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shareit_core::types::{DbId, Timestamp};

/// Full comment row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub text: String,
    pub item_id: DbId,
    pub author_id: DbId,
    pub created: Timestamp,
}

/// DTO for posting a comment. Item and author come from path and header.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub text: String,
}

/// Comment row joined with its author, as read back for item views.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub text: String,
    pub author_name: String,
    pub created: Timestamp,
}

/// Comment representation for API responses, with the author's display
/// name denormalized in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: DbId,
    pub text: String,
    pub author_name: String,
    pub created: Timestamp,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(row: CommentWithAuthor) -> Self {
        Self {
            id: row.id,
            text: row.text,
            author_name: row.author_name,
            created: row.created,
        }
    }
}

impl CommentResponse {
    /// Build a response from a freshly persisted comment and its
    /// already-fetched author name. Pure mapping, no store access.
    pub fn from_parts(comment: Comment, author_name: String) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author_name,
            created: comment.created,
        }
    }
}
