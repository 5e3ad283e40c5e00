use std::sync::Arc;

use crate::client::ServerClient;
use crate::config::GatewayConfig;

/// Shared gateway state available to all axum handlers via
/// `State<GatewayState>`.
#[derive(Clone)]
pub struct GatewayState {
    /// HTTP client targeting the server tier.
    pub client: ServerClient,
    /// Gateway configuration.
    pub config: Arc<GatewayConfig>,
}
