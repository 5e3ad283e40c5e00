//! Handlers for the `/items` resource.
//!
//! Item views consume the Booking Engine's output: the owner-facing view
//! carries the item's derived booking window, and comment posting checks
//! the caller's completed rentals.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use shareit_core::error::CoreError;
use shareit_core::types::DbId;
use shareit_db::models::comment::{CommentResponse, CreateComment};
use shareit_db::models::item::{CreateItem, Item, ItemResponse, UpdateItem};
use shareit_db::repositories::{BookingRepo, CommentRepo, ItemRepo, ItemRequestRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::SharerId;
use crate::state::AppState;

/// Query parameters for `GET /items/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub text: String,
}

/// POST /items
///
/// List a new item. The caller is the owner; an optional `requestId` links
/// the item to the request it answers.
pub async fn add_item(
    caller: SharerId,
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<ItemResponse>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    if let Some(request_id) = input.request_id {
        ItemRequestRepo::find_by_id(&state.pool, request_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "ItemRequest",
                id: request_id,
            })?;
    }

    let item = ItemRepo::create(&state.pool, caller.0, &input).await?;
    tracing::info!(item_id = item.id, owner_id = caller.0, "item listed");

    Ok(Json(ItemResponse::for_viewer(item, Vec::new())))
}

/// PATCH /items/{itemId}
///
/// Patch an item's name, description or availability. Owner only.
pub async fn patch_item(
    caller: SharerId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<ItemResponse>> {
    let item = ItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;

    if item.owner_id != caller.0 {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the item's owner may modify it".into(),
        )));
    }

    let updated = ItemRepo::update(&state.pool, item_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;

    Ok(Json(ItemResponse::for_viewer(updated, Vec::new())))
}

/// GET /items/{itemId}
///
/// Fetch one item with its comments. When the caller is the owner, the
/// response also carries the derived booking window; other viewers see
/// neither field. An unknown caller is refused outright.
pub async fn get_item(
    caller: SharerId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<Json<ItemResponse>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "unknown caller may not view items".into(),
        )));
    }

    let item = ItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;

    Ok(Json(render_item(&state.pool, item, caller.0).await?))
}

/// GET /items
///
/// List all of the caller's own items, each with booking window and
/// comments.
pub async fn list_own_items(
    caller: SharerId,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let items = ItemRepo::list_by_owner(&state.pool, caller.0).await?;

    let mut responses = Vec::with_capacity(items.len());
    for item in items {
        responses.push(render_item(&state.pool, item, caller.0).await?);
    }

    Ok(Json(responses))
}

/// GET /items/search?text=
///
/// Case-insensitive substring search over available items. Blank text
/// yields an empty list without touching the store.
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    if params.text.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }

    let items = ItemRepo::search(&state.pool, &params.text).await?;

    Ok(Json(
        items
            .into_iter()
            .map(|item| ItemResponse::for_viewer(item, Vec::new()))
            .collect(),
    ))
}

/// POST /items/{itemId}/comment
///
/// Leave a review on an item. Allowed only when the caller has a booking on
/// the item that ended before now; the booking's status is not consulted.
pub async fn add_comment(
    caller: SharerId,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<Json<CommentResponse>> {
    let now = Utc::now();

    let author = UserRepo::find_by_id(&state.pool, caller.0)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        })?;

    if !ItemRepo::exists(&state.pool, item_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        }));
    }

    if !BookingRepo::has_completed_booking(&state.pool, caller.0, item_id, now).await? {
        return Err(AppError::Core(CoreError::Validation(
            "user has no completed rental of this item and may not comment".into(),
        )));
    }

    let comment = CommentRepo::create(&state.pool, item_id, caller.0, &input.text, now).await?;

    Ok(Json(CommentResponse::from_parts(comment, author.name)))
}

/// Assemble the item view for a given caller: comments always, booking
/// window only when the caller owns the item.
async fn render_item(pool: &PgPool, item: Item, caller_id: DbId) -> AppResult<ItemResponse> {
    let comments: Vec<CommentResponse> = CommentRepo::list_for_item(pool, item.id)
        .await?
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    if item.owner_id == caller_id {
        let window = BookingRepo::booking_window(pool, item.id, Utc::now()).await?;
        Ok(ItemResponse::for_owner(item, window, comments))
    } else {
        Ok(ItemResponse::for_viewer(item, comments))
    }
}
