pub mod bookings;
pub mod health;
pub mod items;
pub mod requests;
pub mod users;

use axum::Router;

use crate::state::GatewayState;

/// Build the gateway route tree.
///
/// Mirrors the server tier one-to-one; every handler validates what it can
/// at the edge and forwards the rest:
///
/// ```text
/// /users                list, create
/// /users/{id}           get, patch, delete
///
/// /items                list own, create
/// /items/search         search available items
/// /items/{itemId}       get, patch
/// /items/{itemId}/comment  post review
///
/// /bookings             list as renter, create
/// /bookings/owner       list as owner
/// /bookings/{bookingId} get, approve/reject
///
/// /requests             list own, create
/// /requests/all         other users' requests
/// /requests/{requestId} get
/// ```
pub fn api_routes() -> Router<GatewayState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/items", items::router())
        .nest("/bookings", bookings::router())
        .nest("/requests", requests::router())
}
