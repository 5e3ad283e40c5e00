//! Route definitions for the `/requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// POST   /              -> add_request
/// GET    /              -> list_own_requests
/// GET    /all           -> list_other_requests
/// GET    /{requestId}   -> get_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(requests::list_own_requests).post(requests::add_request),
        )
        .route("/all", get(requests::list_other_requests))
        .route("/{requestId}", get(requests::get_request))
}
