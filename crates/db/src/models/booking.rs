//! Booking entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shareit_core::types::{DbId, Timestamp};

/// Lifecycle status of a booking.
///
/// Every booking starts as `Waiting`; the item's owner moves it exactly
/// once (in intent, see the approve handler) to `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

/// Full booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: DbId,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub status: BookingStatus,
    pub item_id: DbId,
    pub booker_id: DbId,
}

/// Booking row joined with the booked item, for authorization checks and
/// enriched responses.
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetail {
    pub id: DbId,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub status: BookingStatus,
    pub item_id: DbId,
    pub booker_id: DbId,
    pub item_name: String,
    pub item_owner_id: DbId,
}

/// DTO for creating a booking. The booker comes from the caller header.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub item_id: DbId,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Derived booking window for an item, visible only to its owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingWindow {
    /// Latest booking end at or before now, if any.
    pub last_booking: Option<Timestamp>,
    /// Earliest booking start at or after now, if any.
    pub next_booking: Option<Timestamp>,
}

/// Minimal item reference in booking responses.
#[derive(Debug, Serialize)]
pub struct BookedItemRef {
    pub id: DbId,
    pub name: String,
}

/// Minimal booker reference in booking responses.
#[derive(Debug, Serialize)]
pub struct BookerRef {
    pub id: DbId,
}

/// Booking representation for API responses, enriched with minimal
/// item/booker identity for display.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: DbId,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: BookingStatus,
    pub item: BookedItemRef,
    pub booker: BookerRef,
}

impl From<BookingDetail> for BookingResponse {
    fn from(detail: BookingDetail) -> Self {
        Self {
            id: detail.id,
            start: detail.starts_at,
            end: detail.ends_at,
            status: detail.status,
            item: BookedItemRef {
                id: detail.item_id,
                name: detail.item_name,
            },
            booker: BookerRef {
                id: detail.booker_id,
            },
        }
    }
}

impl BookingResponse {
    /// Build a response from a freshly persisted booking and its
    /// already-fetched item. Pure mapping, no store access.
    pub fn from_parts(booking: Booking, item_name: String) -> Self {
        Self {
            id: booking.id,
            start: booking.starts_at,
            end: booking.ends_at,
            status: booking.status,
            item: BookedItemRef {
                id: booking.item_id,
                name: item_name,
            },
            booker: BookerRef {
                id: booking.booker_id,
            },
        }
    }
}
