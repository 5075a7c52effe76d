//! HTTP-based document loader.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::errors::SourceError;
use crate::source::DocumentLoader;

/// Loads raw documents from HTTP/HTTPS URLs. One fetch, no retries; redirect
/// and timeout policy belong to the transport client.
pub struct HttpLoader {
    client: Client,
}

impl HttpLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLoader for HttpLoader {
    async fn load(&self, source: &str) -> Result<String, SourceError> {
        let url = Url::parse(source).map_err(|e| SourceError::Network {
            url: source.to_string(),
            reason: format!("invalid URL: {e}"),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SourceError::Network {
                url: source.to_string(),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| SourceError::Network {
                    url: source.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::Missing(source.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Network {
                url: source.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        response.text().await.map_err(|e| SourceError::Network {
            url: source.to_string(),
            reason: format!("failed to read response body: {e}"),
        })
    }
}
