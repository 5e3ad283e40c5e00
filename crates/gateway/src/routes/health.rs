use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::GatewayState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<GatewayState> {
    Router::new().route("/health", get(health_check))
}
