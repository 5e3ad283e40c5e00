//! Shared harness for HTTP-level integration tests.
//!
//! Uses axum's `tower::ServiceExt::oneshot` to send requests directly to
//! the router without a TCP listener, mirroring the router construction in
//! `main.rs` so tests exercise the same middleware stack.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use shareit_core::types::DbId;
use shareit_db::models::booking::{Booking, BookingStatus, CreateBooking};
use shareit_db::models::item::CreateItem;
use shareit_db::models::user::CreateUser;
use shareit_db::repositories::{BookingRepo, ItemRepo, UserRepo};
use shareit_server::config::ServerConfig;
use shareit_server::router::build_app_router;
use shareit_server::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request carrying an optional `X-Sharer-User-Id` header and an
/// optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    caller: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = caller {
        builder = builder.header("X-Sharer-User-Id", user_id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, caller: Option<DbId>) -> Response {
    send(app, Method::GET, uri, caller, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    caller: Option<DbId>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, caller, Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    caller: Option<DbId>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, caller, Some(body)).await
}

pub async fn patch(app: Router, uri: &str, caller: Option<DbId>) -> Response {
    send(app, Method::PATCH, uri, caller, None).await
}

pub async fn delete(app: Router, uri: &str, caller: Option<DbId>) -> Response {
    send(app, Method::DELETE, uri, caller, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures (seeded through the repository layer)
// ---------------------------------------------------------------------------

/// Seed a user, returning its ID.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Seed an item, returning its ID.
pub async fn seed_item(pool: &PgPool, owner_id: DbId, name: &str, available: bool) -> DbId {
    ItemRepo::create(
        pool,
        owner_id,
        &CreateItem {
            name: name.to_string(),
            description: format!("{name} description"),
            available,
            request_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

/// Seed a booking directly through the repository, bypassing the API's
/// temporal validation so tests can plant past bookings.
pub async fn seed_booking(
    pool: &PgPool,
    booker_id: DbId,
    item_id: DbId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Booking {
    BookingRepo::create(
        pool,
        booker_id,
        &CreateBooking {
            item_id,
            start,
            end,
        },
    )
    .await
    .unwrap()
}

/// Seed a booking and move it to the given status.
pub async fn seed_booking_with_status(
    pool: &PgPool,
    booker_id: DbId,
    item_id: DbId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> Booking {
    let booking = seed_booking(pool, booker_id, item_id, start, end).await;
    BookingRepo::update_status(pool, booking.id, status)
        .await
        .unwrap()
        .unwrap()
}

/// A timestamp `days` whole days from now, RFC 3339 encoded for JSON bodies.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}
