// File: crates/rankchart-fetch/src/source.rs
// Summary: Data source trait and its HTTP implementation (GET payload, POST it back for detail).

use async_trait::async_trait;
use rankchart_core::WirePayload;
use reqwest::Url;

use crate::endpoint::Endpoint;
use crate::error::{RenderError, RenderResult};

#[async_trait]
pub trait RankSource: Send + Sync {
    /// Fetch and decode the primary payload, keeping the body bytes
    async fn fetch_payload(&self) -> RenderResult<WirePayload>;

    /// Submit the rendered payload's bytes unchanged and return the detail content to inject
    async fn fetch_detail(&self, rendered: &WirePayload) -> RenderResult<String>;
}

/// Same-origin style HTTP source: one client with a cookie store shared by both requests
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpSource {
    pub fn new(endpoint: Endpoint) -> RenderResult<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn with_client(client: reqwest::Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn check_status(url: &Url, response: &reqwest::Response) -> RenderResult<()> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered with status {}", url, status);
            return Err(RenderError::Status { url: url.to_string(), status: status.as_u16() });
        }
        Ok(())
    }
}

#[async_trait]
impl RankSource for HttpSource {
    async fn fetch_payload(&self) -> RenderResult<WirePayload> {
        let url = &self.endpoint.primary;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        Self::check_status(url, &response)?;
        let body = response.bytes().await?;
        Ok(WirePayload::from_bytes(body.to_vec())?)
    }

    async fn fetch_detail(&self, rendered: &WirePayload) -> RenderResult<String> {
        let url = &self.endpoint.detail;
        tracing::debug!("POST {} ({} bytes)", url, rendered.bytes().len());
        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(rendered.bytes().to_vec())
            .send()
            .await?;
        Self::check_status(url, &response)?;
        let body = response.text().await?;
        Ok(unwrap_json_string(body))
    }
}

/// Detail endpoints usually answer with a JSON-encoded markup string; unwrap it if so,
/// otherwise return the body untouched.
pub fn unwrap_json_string(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(serde_json::Value::String(s)) => s,
        _ => body,
    }
}
