//! Handlers for the `/bookings` resource — the booking lifecycle.
//!
//! Bookings are created `WAITING` by a prospective renter, decided exactly
//! once (in intent) by the item's owner, and queried by either party.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use shareit_core::booking::{validate_period, BookingState};
use shareit_core::error::CoreError;
use shareit_core::types::DbId;
use shareit_db::models::booking::{BookingResponse, BookingStatus, CreateBooking};
use shareit_db::repositories::{BookingRepo, ItemRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::SharerId;
use crate::state::AppState;

/// Query parameters for booking listings.
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    /// State bucket to filter by. Defaults to `ALL`.
    pub state: Option<BookingState>,
}

/// Query parameters for `PATCH /bookings/{id}`.
#[derive(Debug, Deserialize)]
pub struct ApproveQuery {
    pub approved: bool,
}

/// POST /bookings
///
/// Create a booking in `WAITING` status. The caller is the booker.
///
/// No overlap check against existing bookings on the item is performed;
/// two overlapping bookings by different users both succeed and the owner
/// arbitrates via approval.
pub async fn create_booking(
    caller: SharerId,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<Json<BookingResponse>> {
    let now = Utc::now();

    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let item = ItemRepo::find_by_id(&state.pool, input.item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: input.item_id,
        })?;

    if !item.available {
        return Err(AppError::Core(CoreError::Validation(
            "item is not available for booking".into(),
        )));
    }

    validate_period(input.start, input.end, now)?;

    let booking = BookingRepo::create(&state.pool, caller.0, &input).await?;
    tracing::info!(booking_id = booking.id, item_id = item.id, booker_id = caller.0, "booking created");

    Ok(Json(BookingResponse::from_parts(booking, item.name)))
}

/// PATCH /bookings/{id}?approved=bool
///
/// Approve or reject a waiting booking. Only the item's owner may decide.
/// There is no terminal-state guard: a second call flips the status again.
pub async fn approve_booking(
    caller: SharerId,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    Query(params): Query<ApproveQuery>,
) -> AppResult<Json<BookingResponse>> {
    let mut detail = BookingRepo::find_detail_by_id(&state.pool, booking_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        })?;

    if detail.item_owner_id != caller.0 {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the item's owner may approve or reject a booking".into(),
        )));
    }

    let status = if params.approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };

    BookingRepo::update_status(&state.pool, booking_id, status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        })?;
    tracing::info!(booking_id, ?status, "booking decided");

    detail.status = status;
    Ok(Json(BookingResponse::from(detail)))
}

/// GET /bookings/{id}
///
/// Fetch a single booking. Visible only to the booker or the item's owner.
pub async fn get_booking(
    caller: SharerId,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<Json<BookingResponse>> {
    let detail = BookingRepo::find_detail_by_id(&state.pool, booking_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        })?;

    if caller.0 != detail.booker_id && caller.0 != detail.item_owner_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the booker or the item's owner may view this booking".into(),
        )));
    }

    Ok(Json(BookingResponse::from(detail)))
}

/// GET /bookings?state=...
///
/// List the caller's bookings as renter, filtered by state bucket and
/// ordered by start descending.
pub async fn list_for_renter(
    caller: SharerId,
    State(state): State<AppState>,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bucket = params.state.unwrap_or_default();

    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let bookings =
        BookingRepo::list_for_booker(&state.pool, caller.0, bucket, Utc::now()).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// GET /bookings/owner?state=...
///
/// List bookings on the caller's items, filtered by state bucket and
/// ordered by start descending.
pub async fn list_for_owner(
    caller: SharerId,
    State(state): State<AppState>,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bucket = params.state.unwrap_or_default();

    if !UserRepo::exists(&state.pool, caller.0).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.0,
        }));
    }

    let bookings =
        BookingRepo::list_for_owner(&state.pool, caller.0, bucket, Utc::now()).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
