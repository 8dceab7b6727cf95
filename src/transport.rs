//! HTTP transport to the prediction service. The adapter only sees the [`Transport`] trait.

use crate::config::ApiConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET with `Content-Type: application/json` and no body
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// POST `body` as JSON with `Content-Type: application/json`
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Timeouts are only applied when configured.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { client })
    }

    async fn finish(
        url: &str,
        res: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<HttpResponse, TransportError> {
        let res = res.map_err(|e| request_error(url, e))?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| request_error(url, e))?;
        Ok(HttpResponse { status, body })
    }
}

fn request_error(url: &str, e: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let res = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await;
        Self::finish(url, res).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        // `.json()` sets Content-Type: application/json
        let res = self.client.post(url).json(body).send().await;
        Self::finish(url, res).await
    }
}
