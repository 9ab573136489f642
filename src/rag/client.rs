use crate::{Error, Result, config::RagConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait RagBackend: Send + Sync {
    async fn search(&self, question: &str) -> Result<serde_json::Value>;
}

/// HTTP client for the external RAG search backend. Issues one GET per
/// question and relays the backend's JSON payload without interpreting it.
pub struct HttpRagClient {
    client: reqwest::Client,
    api_url: String,
}

impl HttpRagClient {
    pub fn new(config: RagConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url,
        }
    }
}

#[async_trait]
impl RagBackend for HttpRagClient {
    async fn search(&self, question: &str) -> Result<serde_json::Value> {
        debug!("Forwarding question to RAG backend at {}", self.api_url);

        // `.query` applies standard form urlencoding to the question value.
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("question", question)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
            });
        }

        let payload = response.json::<serde_json::Value>().await?;

        debug!("Received backend response");

        Ok(payload)
    }
}
