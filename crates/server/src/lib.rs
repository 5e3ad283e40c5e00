//! ShareIt server tier: business logic and persistence behind an axum API.
//!
//! The gateway forwards validated requests here; this crate enforces every
//! domain precondition (existence, availability, authorization by role,
//! temporal rules) and talks to PostgreSQL through `shareit-db`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
