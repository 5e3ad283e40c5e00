use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shareit_gateway::client::ServerClient;
use shareit_gateway::config::GatewayConfig;
use shareit_gateway::router::build_app_router;
use shareit_gateway::state::GatewayState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shareit_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();
    tracing::info!(server_url = %config.server_url, "Forwarding to server tier");

    let host = config.host.clone();
    let port = config.port;

    let state = GatewayState {
        client: ServerClient::new(config.server_url.clone()),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(host.parse().expect("Invalid HOST"), port);
    tracing::info!("Starting gateway on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind gateway address");
    axum::serve(listener, app)
        .await
        .expect("Gateway error");
}
