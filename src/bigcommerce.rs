//! HTTP client for the BigCommerce v3 REST API.
//!
//! Builds authenticated requests against
//! `https://api.<host>/stores/<store-hash>/v3/` and hands the raw status and
//! body back to the caller. Non-2xx statuses are not errors at this layer:
//! handlers decide how to surface them. No retries, no timeout overrides.

use axum::http::StatusCode;
use reqwest::{Client, Method};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct BigCommerceClient {
    client: Client,
    base_url: String,
    access_token: String,
}

/// Raw upstream reply: status plus the unparsed body text.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl BigCommerceClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url(), config.access_token.clone())
    }

    /// Point the client at an explicit base URL. Tests use this to target a
    /// local stand-in for the BigCommerce API.
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            access_token: access_token.into(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<UpstreamResponse> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<UpstreamResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<UpstreamResponse> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<UpstreamResponse> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        // BigCommerce accepts the token both as a bearer credential and as
        // its own X-Auth-Token header; the original integration sent both.
        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("X-Auth-Token", &self.access_token)
            .header("Accept", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(UpstreamResponse { status, body })
    }
}
