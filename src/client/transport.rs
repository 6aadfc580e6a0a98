use crate::error::{ModelsLabError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Raw HTTP exchange with the backend. Bodies are returned as text so the
/// caller decides how a non-JSON reply is reported.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<String>;

    async fn get_text(&self, url: &str) -> Result<String>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<String> {
        let response = self
            .client
            .post(url)
            .headers(Self::build_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ModelsLabError::TransportError(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            // Error statuses still carry a JSON body with `status`/`message`.
            log::debug!("POST {} returned HTTP {}", url, status);
        }

        Ok(response.text().await?)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ModelsLabError::TransportError(format!("GET {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ModelsLabError::TransportError(format!(
                "GET {} returned HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
