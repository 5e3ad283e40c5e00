//! HTTP client forwarding validated requests to the server tier.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use reqwest::Method;
use serde::Serialize;
use shareit_core::types::DbId;

use crate::error::GatewayResult;
use crate::extract::SHARER_USER_ID;

/// Client targeting the server tier. Cheap to clone.
#[derive(Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward a bodyless request, relaying the server's status and body.
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        caller: Option<DbId>,
    ) -> GatewayResult<Response> {
        self.send(method, path_and_query, caller, None::<&()>).await
    }

    /// Forward a request carrying a JSON body, relaying the server's
    /// status and body.
    pub async fn forward_json<T: Serialize>(
        &self,
        method: Method,
        path_and_query: &str,
        caller: Option<DbId>,
        body: &T,
    ) -> GatewayResult<Response> {
        self.send(method, path_and_query, caller, Some(body)).await
    }

    async fn send<T: Serialize>(
        &self,
        method: Method,
        path_and_query: &str,
        caller: Option<DbId>,
        body: Option<&T>,
    ) -> GatewayResult<Response> {
        let url = format!("{}{path_and_query}", self.base_url);
        let mut request = self.http.request(method, &url);
        if let Some(user_id) = caller {
            request = request.header(SHARER_USER_ID, user_id.to_string());
        }
        if let Some(json) = body {
            request = request.json(json);
        }

        let upstream = request.send().await?;
        let status =
            StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let bytes = upstream.bytes().await?;

        let response = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .unwrap_or_default();
        Ok(response)
    }
}
