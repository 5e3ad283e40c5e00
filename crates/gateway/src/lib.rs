//! ShareIt gateway tier: schema validation in front of the server.
//!
//! The gateway owns no business logic and no storage. It validates request
//! bodies with `validator` derives, refuses malformed input with 400 before
//! any forwarding happens, and relays everything else to the server tier
//! verbatim -- status code and body included.

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod router;
pub mod routes;
pub mod state;
