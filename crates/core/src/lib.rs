//! Shared domain vocabulary for the ShareIt platform.
//!
//! Everything here is persistence- and transport-agnostic: id/timestamp
//! aliases, the domain error taxonomy, and the booking-period rules shared
//! by the gateway (schema validation) and the server (business logic).

pub mod booking;
pub mod error;
pub mod types;
