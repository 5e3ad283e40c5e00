//! Gateway endpoints for the `/bookings` resource.
//!
//! Besides body validation, the gateway normalizes the `state` bucket and
//! the `approved` flag so the server only ever sees well-formed query
//! parameters.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Method;
use serde::Deserialize;
use shareit_core::booking::BookingState;
use shareit_core::types::DbId;
use validator::Validate;

use crate::dto::BookItemRequest;
use crate::error::{GatewayError, GatewayResult};
use crate::extract::SharerId;
use crate::state::GatewayState;

#[derive(Debug, Deserialize)]
struct BookingListQuery {
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApproveQuery {
    approved: Option<String>,
}

impl BookingListQuery {
    /// Parse the requested bucket, defaulting to `ALL`.
    fn bucket(&self) -> GatewayResult<BookingState> {
        match self.state.as_deref() {
            None => Ok(BookingState::default()),
            Some(raw) => raw
                .parse()
                .map_err(|_| GatewayError::BadRequest(format!("Unknown state: {raw}"))),
        }
    }
}

impl ApproveQuery {
    fn approved(&self) -> GatewayResult<bool> {
        let raw = self.approved.as_deref().ok_or_else(|| {
            GatewayError::BadRequest("Missing approved query parameter".into())
        })?;
        raw.parse().map_err(|_| {
            GatewayError::BadRequest("approved must be true or false".into())
        })
    }
}

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /              -> create_booking
/// GET    /              -> list_for_renter
/// GET    /owner         -> list_for_owner
/// GET    /{bookingId}   -> get_booking
/// PATCH  /{bookingId}   -> approve_booking
/// ```
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_for_renter).post(create_booking))
        .route("/owner", get(list_for_owner))
        .route("/{bookingId}", get(get_booking).patch(approve_booking))
}

async fn create_booking(
    caller: SharerId,
    State(state): State<GatewayState>,
    Json(input): Json<BookItemRequest>,
) -> GatewayResult<Response> {
    input.validate()?;
    state
        .client
        .forward_json(Method::POST, "/bookings", Some(caller.0), &input)
        .await
}

async fn approve_booking(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(booking_id): Path<DbId>,
    Query(params): Query<ApproveQuery>,
) -> GatewayResult<Response> {
    let approved = params.approved()?;
    state
        .client
        .forward(
            Method::PATCH,
            &format!("/bookings/{booking_id}?approved={approved}"),
            Some(caller.0),
        )
        .await
}

async fn get_booking(
    caller: SharerId,
    State(state): State<GatewayState>,
    Path(booking_id): Path<DbId>,
) -> GatewayResult<Response> {
    state
        .client
        .forward(
            Method::GET,
            &format!("/bookings/{booking_id}"),
            Some(caller.0),
        )
        .await
}

async fn list_for_renter(
    caller: SharerId,
    State(state): State<GatewayState>,
    Query(params): Query<BookingListQuery>,
) -> GatewayResult<Response> {
    let bucket = params.bucket()?;
    state
        .client
        .forward(
            Method::GET,
            &format!("/bookings?state={}", bucket.as_str()),
            Some(caller.0),
        )
        .await
}

async fn list_for_owner(
    caller: SharerId,
    State(state): State<GatewayState>,
    Query(params): Query<BookingListQuery>,
) -> GatewayResult<Response> {
    let bucket = params.bucket()?;
    state
        .client
        .forward(
            Method::GET,
            &format!("/bookings/owner?state={}", bucket.as_str()),
            Some(caller.0),
        )
        .await
}
