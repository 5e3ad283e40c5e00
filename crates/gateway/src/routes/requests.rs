//! Gateway endpoints for the `/requests` resource.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Method;
use shareit_core::types::DbId;
use validator::Validate;

use crate::dto::RequestCreate;
use crate::error::GatewayResult;
use crate::extract::SharerId;
use crate::state::GatewayState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET   /              -> list_own_requests
/// POST  /              -> add_request
/// GET   /all           -> list_other_requests
/// GET   /{requestId}   -> get_request
/// ```
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_own_requests).post(add_request))
        .route("/all", get(list_other_requests))
        .route("/{requestId}", get(get_request))
}

async fn add_request(
    caller: SharerId,
    State(state): State<GatewayState>,
    Json(input): Json<RequestCreate>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(Method::POST, "/requests", Some(caller.0), &input)
        .await
}

async fn list_own_requests(
    caller: SharerId,
    State(state): State<GatewayState>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(Method::GET, "/requests", Some(caller.0))
        .await
}

async fn list_other_requests(
    caller: SharerId,
    State(state): State<GatewayState>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(Method::GET, "/requests/all", Some(caller.0))
        .await
}

async fn get_request(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(request_id): Path<DbId>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(
            Method::GET,
            &format!("/requests/{request_id}"),
            Some(caller.0),
        )
        .await
}
