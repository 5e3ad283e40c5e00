//! Booking-period rules and listing state buckets.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Filter bucket for booking listings.
///
/// `Current`, `Past` and `Future` are derived from the booking period
/// relative to "now"; `Waiting` and `Rejected` match the stored status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    #[default]
    All,
    /// `start <= now < end`.
    Current,
    /// `end < now`.
    Past,
    /// `start > now`.
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Wire-format name of the bucket, as used in `?state=` query params.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for BookingState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            other => Err(CoreError::Validation(format!("Unknown state: {other}"))),
        }
    }
}

/// Validate a requested booking period.
///
/// The period must have `end > start`, and `start` must not lie in the past
/// at creation time. The same rule runs in the gateway (schema validation)
/// and in the server (business precondition).
pub fn validate_period(
    start: Timestamp,
    end: Timestamp,
    now: Timestamp,
) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(
            "booking end must be after booking start".into(),
        ));
    }
    if start < now {
        return Err(CoreError::Validation(
            "booking start must not be in the past".into(),
        ));
    }
    Ok(())
}
