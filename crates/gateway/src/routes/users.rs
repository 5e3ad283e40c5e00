//! Gateway endpoints for the `/users` resource.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Method;
use shareit_core::types::DbId;
use validator::Validate;

use crate::dto::{UserCreate, UserPatch};
use crate::error::GatewayResult;
use crate::state::GatewayState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /       -> list_users
/// POST   /       -> add_user
/// GET    /{id}   -> get_user
/// PATCH  /{id}   -> patch_user
/// DELETE /{id}   -> delete_user
/// ```
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_users).post(add_user))
        .route(
            "/{id}",
            get(get_user).patch(patch_user).delete(delete_user),
        )
}

async fn list_users(State(state): State<GatewayState>) -> GatewayResult<Response> {
    state.client.forward(Method::GET, "/users", None).await
}

async fn add_user(
    State(state): State<GatewayState>,
    Json(input): Json<UserCreate>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(Method::POST, "/users", None, &input)
        .await
}

async fn get_user(
    State(state): State<GatewayState>,
    Path(user_id): Path<DbId>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(Method::GET, &format!("/users/{user_id}"), None)
        .await
}

async fn patch_user(
    State(state): State<GatewayState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UserPatch>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(Method::PATCH, &format!("/users/{user_id}"), None, &input)
        .await
}

async fn delete_user(
    State(state): State<GatewayState>,
    Path(user_id): Path<DbId>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(Method::DELETE, &format!("/users/{user_id}"), None)
        .await
}
