//! Handlers for the `/requests` resource (item requests).
//!
//! Request responses embed the derived list of items that were listed in
//! answer to them.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use shareit_core::error::CoreError;
use shareit_core::types::DbId;
use shareit_db::models::request::{CreateItemRequest, ItemRequest, ItemRequestResponse};
use shareit_db::repositories::{ItemRepo, ItemRequestRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::SharerId;
use crate::state::AppState;

/// POST /requests
///
/// File a request for an item that does not exist in the catalog yet.
pub async fn add_request(
    caller: SharerId,
    State(state): State<AppState>,
    Json(input): Json<CreateItemRequest>,
) -> AppResult<Json<ItemRequestResponse>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let request = ItemRequestRepo::create(&state.pool, caller.0, &input, Utc::now()).await?;

    Ok(Json(ItemRequestResponse::from_parts(request, Vec::new())))
}

/// GET /requests
///
/// The caller's own requests, newest first, each with its answers.
pub async fn list_own_requests(
    caller: SharerId,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItemRequestResponse>>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let requests = ItemRequestRepo::list_by_requester(&state.pool, caller.0).await?;
    Ok(Json(render_requests(&state.pool, requests).await?))
}

/// GET /requests/all
///
/// Other users' requests, newest first. An unknown caller is refused.
pub async fn list_other_requests(
    caller: SharerId,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItemRequestResponse>>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "unknown caller may not view item requests".into(),
        )));
    }

    let requests = ItemRequestRepo::list_by_other_requesters(&state.pool, caller.0).await?;
    Ok(Json(render_requests(&state.pool, requests).await?))
}

/// GET /requests/{requestId}
///
/// One request with its answers. An unknown caller is refused.
pub async fn get_request(
    caller: SharerId,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<Json<ItemRequestResponse>> {
    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "unknown caller may not view item requests".into(),
        )));
    }

    let request = ItemRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ItemRequest",
            id: request_id,
        })?;

    let items = ItemRepo::list_by_request(&state.pool, request.id).await?;
    Ok(Json(ItemRequestResponse::from_parts(request, items)))
}

/// Attach each request's answering items.
async fn render_requests(
    pool: &PgPool,
    requests: Vec<ItemRequest>,
) -> AppResult<Vec<ItemRequestResponse>> {
    let mut responses = Vec::with_capacity(requests.len());
    for request in requests {
        let items = ItemRepo::list_by_request(pool, request.id).await?;
        responses.push(ItemRequestResponse::from_parts(request, items));
    }
    Ok(responses)
}
