//! Gateway endpoints for the `/items` resource.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Method;
use shareit_core::types::DbId;
use validator::Validate;

use crate::dto::{CommentCreate, ItemCreate, ItemPatch};
use crate::error::GatewayResult;
use crate::extract::SharerId;
use crate::state::GatewayState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                  -> list_own_items
/// POST   /                  -> add_item
/// GET    /search            -> search_items
/// GET    /{itemId}          -> get_item
/// PATCH  /{itemId}          -> patch_item
/// POST   /{itemId}/comment  -> add_comment
/// ```
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_own_items).post(add_item))
        .route("/search", get(search_items))
        .route("/{itemId}", get(get_item).patch(patch_item))
        .route("/{itemId}/comment", axum::routing::post(add_comment))
}

async fn list_own_items(
    caller: SharerId,
    State(state): State<GatewayState>,
) -> GatewayResult<Response> {
    state.client.forward(Method::GET, "/items", Some(caller.0)).await
}

async fn add_item(
    caller: SharerId,
    State(state): State<GatewayState>,
    Json(input): Json<ItemCreate>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(Method::POST, "/items", Some(caller.0), &input)
        .await
}

/// Search is anonymous: no caller header is required or forwarded. The
/// search text arrives percent-encoded and is relayed as-is; decoding is
/// the server's business.
async fn search_items(
    State(state): State<GatewayState>,
    RawQuery(query): RawQuery,
) -> GatewayResult<Response> {
    let path = match query {
        Some(q) => format!("/items/search?{q}"),
        None => "/items/search".to_string(),
    };
    state.client.forward(Method::GET, &path, None).await
}

async fn get_item(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(item_id): Path<DbId>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(Method::GET, &format!("/items/{item_id}"), Some(caller.0))
        .await
}

async fn patch_item(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<ItemPatch>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(
            Method::PATCH,
            &format!("/items/{item_id}"),
            Some(caller.0),
            &input,
        )
        .await
}

async fn add_comment(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<CommentCreate>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(
            Method::POST,
            &format!("/items/{item_id}/comment"),
            Some(caller.0),
            &input,
        )
        .await
}
