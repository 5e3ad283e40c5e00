//! Route definitions for the `/bookings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /              -> create_booking
/// GET    /              -> list_for_renter
/// GET    /owner         -> list_for_owner
/// GET    /{bookingId}   -> get_booking
/// PATCH  /{bookingId}   -> approve_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bookings::list_for_renter).post(bookings::create_booking),
        )
        .route("/owner", get(bookings::list_for_owner))
        .route(
            "/{bookingId}",
            get(bookings::get_booking).patch(bookings::approve_booking),
        )
}
