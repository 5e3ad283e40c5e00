//! Route definitions for the `/items` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// POST   /                  -> add_item
/// GET    /                  -> list_own_items
/// GET    /search            -> search_items
/// GET    /{itemId}          -> get_item
/// PATCH  /{itemId}          -> patch_item
/// POST   /{itemId}/comment  -> add_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_own_items).post(items::add_item))
        .route("/search", get(items::search_items))
        .route("/{itemId}", get(items::get_item).patch(items::patch_item))
        .route("/{itemId}/comment", post(items::add_comment))
}
