//! Repository for the `bookings` table.
//!
//! Listing queries join `items` so each row carries the booked item's name
//! and owner, which the server needs for authorization checks and enriched
//! responses without further lookups.

use sqlx::PgPool;
use shareit_core::booking::BookingState;
use shareit_core::types::{DbId, Timestamp};

use crate::models::booking::{Booking, BookingDetail, BookingStatus, BookingWindow, CreateBooking};

/// Column list for plain `bookings` rows.
const COLUMNS: &str = "id, starts_at, ends_at, status, item_id, booker_id";

/// Column list for booking rows joined with their item.
const DETAIL_COLUMNS: &str = "b.id, b.starts_at, b.ends_at, b.status, b.item_id, b.booker_id, \
                              i.name AS item_name, i.owner_id AS item_owner_id";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking in `WAITING` status, returning the created row.
    ///
    /// No overlap check against existing bookings for the same item is
    /// performed; concurrent bookings of the same interval both succeed.
    pub async fn create(
        pool: &PgPool,
        booker_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (starts_at, ends_at, status, item_id, booker_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.start)
            .bind(input.end)
            .bind(BookingStatus::Waiting)
            .bind(input.item_id)
            .bind(booker_id)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID, joined with its item.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE b.id = $1"
        );
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a booking's status, returning the updated row.
    ///
    /// No terminal-state guard: an already decided booking can be flipped
    /// again. Returns `None` if the booking does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List a booker's bookings in the given state bucket, most recent
    /// start first.
    pub async fn list_for_booker(
        pool: &PgPool,
        booker_id: DbId,
        state: BookingState,
        now: Timestamp,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        Self::list_for("b.booker_id", pool, booker_id, state, now).await
    }

    /// List bookings on items owned by the given user in the given state
    /// bucket, most recent start first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        state: BookingState,
        now: Timestamp,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        Self::list_for("i.owner_id", pool, owner_id, state, now).await
    }

    /// Shared listing query. `user_column` selects the caller's role:
    /// `b.booker_id` for renter listings, `i.owner_id` for owner listings.
    async fn list_for(
        user_column: &str,
        pool: &PgPool,
        user_id: DbId,
        state: BookingState,
        now: Timestamp,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let base = format!(
            "SELECT {DETAIL_COLUMNS} FROM bookings b
             JOIN items i ON i.id = b.item_id
             WHERE {user_column} = $1"
        );
        let order = "ORDER BY b.starts_at DESC";

        match state {
            BookingState::All => {
                sqlx::query_as::<_, BookingDetail>(&format!("{base} {order}"))
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            BookingState::Current => {
                let query =
                    format!("{base} AND b.starts_at <= $2 AND b.ends_at > $2 {order}");
                sqlx::query_as::<_, BookingDetail>(&query)
                    .bind(user_id)
                    .bind(now)
                    .fetch_all(pool)
                    .await
            }
            BookingState::Past => {
                let query = format!("{base} AND b.ends_at < $2 {order}");
                sqlx::query_as::<_, BookingDetail>(&query)
                    .bind(user_id)
                    .bind(now)
                    .fetch_all(pool)
                    .await
            }
            BookingState::Future => {
                let query = format!("{base} AND b.starts_at > $2 {order}");
                sqlx::query_as::<_, BookingDetail>(&query)
                    .bind(user_id)
                    .bind(now)
                    .fetch_all(pool)
                    .await
            }
            BookingState::Waiting => {
                let query = format!("{base} AND b.status = $2 {order}");
                sqlx::query_as::<_, BookingDetail>(&query)
                    .bind(user_id)
                    .bind(BookingStatus::Waiting)
                    .fetch_all(pool)
                    .await
            }
            BookingState::Rejected => {
                let query = format!("{base} AND b.status = $2 {order}");
                sqlx::query_as::<_, BookingDetail>(&query)
                    .bind(user_id)
                    .bind(BookingStatus::Rejected)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Check whether the user has any booking on the item that ended before
    /// `now`. Completion evidence is purely temporal; status is ignored.
    pub async fn has_completed_booking(
        pool: &PgPool,
        booker_id: DbId,
        item_id: DbId,
        now: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE booker_id = $1 AND item_id = $2 AND ends_at < $3
             )",
        )
        .bind(booker_id)
        .bind(item_id)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Derive the item's booking window around `now`: the latest booking
    /// end at or before now, and the earliest booking start at or after now.
    pub async fn booking_window(
        pool: &PgPool,
        item_id: DbId,
        now: Timestamp,
    ) -> Result<BookingWindow, sqlx::Error> {
        let last_booking: Option<Timestamp> = sqlx::query_scalar(
            "SELECT ends_at FROM bookings
             WHERE item_id = $1 AND ends_at <= $2
             ORDER BY ends_at DESC
             LIMIT 1",
        )
        .bind(item_id)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        let next_booking: Option<Timestamp> = sqlx::query_scalar(
            "SELECT starts_at FROM bookings
             WHERE item_id = $1 AND starts_at >= $2
             ORDER BY starts_at ASC
             LIMIT 1",
        )
        .bind(item_id)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(BookingWindow {
            last_booking,
            next_booking,
        })
    }
}
