//! HTTP-level integration tests for the booking lifecycle.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, days_from_now, get, patch, post_json, seed_booking, seed_item, seed_user,
};
use shareit_db::models::booking::BookingStatus;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_starts_waiting(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let start = days_from_now(1);
    let end = days_from_now(2);
    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": start.to_rfc3339(),
            "end": end.to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "WAITING");
    assert_eq!(json["item"]["id"].as_i64(), Some(item));
    assert_eq!(json["item"]["name"], "drill");
    assert_eq!(json["booker"]["id"].as_i64(), Some(booker));
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_round_trips_period(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let start = days_from_now(1);
    let end = days_from_now(3);
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": start.to_rfc3339(),
            "end": end.to_rfc3339(),
        }),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/bookings/{id}"),
        Some(booker),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["start"], created["start"]);
    assert_eq!(fetched["end"], created["end"]);
    assert_eq!(fetched["item"]["id"].as_i64(), Some(item));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_unknown_booker_returns_404(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        Some(999_999),
        serde_json::json!({
            "itemId": item,
            "start": days_from_now(1).to_rfc3339(),
            "end": days_from_now(2).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_unknown_item_returns_404(pool: PgPool) {
    let booker = seed_user(&pool, "booker", "booker@example.com").await;

    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": 999_999,
            "start": days_from_now(1).to_rfc3339(),
            "end": days_from_now(2).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_on_unavailable_item_returns_400(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", false).await;

    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": days_from_now(1).to_rfc3339(),
            "end": days_from_now(2).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_with_end_before_start_returns_400(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": days_from_now(3).to_rfc3339(),
            "end": days_from_now(1).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_without_caller_header_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/bookings",
        None,
        serde_json::json!({
            "itemId": 1,
            "start": days_from_now(1).to_rfc3339(),
            "end": days_from_now(2).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn overlapping_bookings_on_same_item_both_succeed(pool: PgPool) {
    // Documents the absence of overlap prevention: owner arbitration, not
    // the engine, resolves competing windows.
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let first = seed_user(&pool, "first", "first@example.com").await;
    let second = seed_user(&pool, "second", "second@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let body = serde_json::json!({
        "itemId": item,
        "start": days_from_now(1).to_rfc3339(),
        "end": days_from_now(3).to_rfc3339(),
    });

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/bookings",
        Some(first),
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(common::build_test_app(pool), "/bookings", Some(second), body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Approval
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_approval_sets_status_approved(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;
    let booking = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;

    let response = patch(
        common::build_test_app(pool),
        &format!("/bookings/{}?approved=true", booking.id),
        Some(owner),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "APPROVED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_rejection_sets_status_rejected(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;
    let booking = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;

    let response = patch(
        common::build_test_app(pool),
        &format!("/bookings/{}?approved=false", booking.id),
        Some(owner),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "REJECTED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approval_by_non_owner_returns_403(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let stranger = seed_user(&pool, "stranger", "stranger@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;
    let booking = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;

    // Neither the booker nor a stranger may decide.
    let response = patch(
        common::build_test_app(pool.clone()),
        &format!("/bookings/{}?approved=true", booking.id),
        Some(booker),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch(
        common::build_test_app(pool),
        &format!("/bookings/{}?approved=true", booking.id),
        Some(stranger),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approval_of_unknown_booking_returns_404(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;

    let response = patch(
        common::build_test_app(pool),
        "/bookings/999999?approved=true",
        Some(owner),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn decided_booking_can_be_flipped_again(pool: PgPool) {
    // No terminal-state guard: a second owner decision overwrites the first.
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;
    let booking = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;

    let response = patch(
        common::build_test_app(pool.clone()),
        &format!("/bookings/{}?approved=true", booking.id),
        Some(owner),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "APPROVED");

    let response = patch(
        common::build_test_app(pool),
        &format!("/bookings/{}?approved=false", booking.id),
        Some(owner),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "REJECTED");
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_visible_to_booker_and_owner_only(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let stranger = seed_user(&pool, "stranger", "stranger@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;
    let booking = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;
    let uri = format!("/bookings/{}", booking.id);

    let response = get(common::build_test_app(pool.clone()), &uri, Some(booker)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool.clone()), &uri, Some(owner)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), &uri, Some(stranger)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fetching_unknown_booking_returns_404(pool: PgPool) {
    let user = seed_user(&pool, "user", "user@example.com").await;

    let response = get(common::build_test_app(pool), "/bookings/999999", Some(user)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn renter_listing_buckets_by_period(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let now = Utc::now();
    let past = seed_booking(&pool, booker, item, now - Duration::days(5), now - Duration::days(3)).await;
    let current =
        seed_booking(&pool, booker, item, now - Duration::hours(1), now + Duration::hours(1)).await;
    let future = seed_booking(&pool, booker, item, now + Duration::days(3), now + Duration::days(5)).await;

    let cases = [
        ("PAST", past.id),
        ("CURRENT", current.id),
        ("FUTURE", future.id),
    ];
    for (bucket, expected_id) in cases {
        let response = get(
            common::build_test_app(pool.clone()),
            &format!("/bookings?state={bucket}"),
            Some(booker),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![expected_id], "bucket {bucket}");
    }

    let response = get(common::build_test_app(pool), "/bookings?state=ALL", Some(booker)).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn renter_listing_filters_by_status(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let waiting = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;
    let rejected = common::seed_booking_with_status(
        &pool,
        booker,
        item,
        days_from_now(3),
        days_from_now(4),
        BookingStatus::Rejected,
    )
    .await;

    let response = get(
        common::build_test_app(pool.clone()),
        "/bookings?state=WAITING",
        Some(booker),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"].as_i64(), Some(waiting.id));
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get(
        common::build_test_app(pool),
        "/bookings?state=REJECTED",
        Some(booker),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"].as_i64(), Some(rejected.id));
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listings_order_by_start_descending(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let item = seed_item(&pool, owner, "drill", true).await;

    let early = seed_booking(&pool, booker, item, days_from_now(1), days_from_now(2)).await;
    let late = seed_booking(&pool, booker, item, days_from_now(5), days_from_now(6)).await;
    let middle = seed_booking(&pool, booker, item, days_from_now(3), days_from_now(4)).await;

    let response = get(common::build_test_app(pool), "/bookings", Some(booker)).await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![late.id, middle.id, early.id]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_listing_selects_bookings_on_owned_items(pool: PgPool) {
    let owner = seed_user(&pool, "owner", "owner@example.com").await;
    let other_owner = seed_user(&pool, "other", "other@example.com").await;
    let booker = seed_user(&pool, "booker", "booker@example.com").await;
    let owned = seed_item(&pool, owner, "drill", true).await;
    let foreign = seed_item(&pool, other_owner, "saw", true).await;

    let on_owned = seed_booking(&pool, booker, owned, days_from_now(1), days_from_now(2)).await;
    seed_booking(&pool, booker, foreign, days_from_now(1), days_from_now(2)).await;

    let response = get(common::build_test_app(pool), "/bookings/owner", Some(owner)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![on_owned.id]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_with_unknown_user_returns_404(pool: PgPool) {
    for uri in ["/bookings?state=ALL", "/bookings/owner?state=ALL"] {
        let response = get(common::build_test_app(pool.clone()), uri, Some(999_999)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_with_unknown_state_returns_400(pool: PgPool) {
    let user = seed_user(&pool, "user", "user@example.com").await;

    let response = get(
        common::build_test_app(pool),
        "/bookings?state=SOMEDAY",
        Some(user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Full lifecycle scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_lifecycle_end_to_end(pool: PgPool) {
    let owner = seed_user(&pool, "alice", "alice@example.com").await;
    let booker = seed_user(&pool, "bob", "bob@example.com").await;
    let stranger = seed_user(&pool, "carol", "carol@example.com").await;
    let item = seed_item(&pool, owner, "tent", true).await;

    // Bob books the tent for tomorrow through the day after.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": days_from_now(1).to_rfc3339(),
            "end": days_from_now(2).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["status"], "WAITING");
    let id = created["id"].as_i64().unwrap();

    // Alice approves.
    let response = patch(
        common::build_test_app(pool.clone()),
        &format!("/bookings/{id}?approved=true"),
        Some(owner),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "APPROVED");

    // Bob can fetch it; Carol cannot.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/bookings/{id}"),
        Some(booker),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool),
        &format!("/bookings/{id}"),
        Some(stranger),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
