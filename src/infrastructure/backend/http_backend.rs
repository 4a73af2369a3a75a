//! reqwest implementation of [`DashBackend`].

use async_trait::async_trait;
use reqwest::{Client, Method};

use super::BackendUrl;
use crate::domain::backend::{BackendResponse, DashBackend};
use crate::domain::endpoints;
use crate::error::BackendError;

/// HTTP client for the dashboard backend.
///
/// Wraps a pooled [`reqwest::Client`]; cloning is cheap. No retries and no
/// request timeout are applied: each call is issued once and awaited.
#[derive(Debug, Clone)]
pub struct HttpDashBackend {
    client: Client,
    base_url: BackendUrl,
}

impl HttpDashBackend {
    pub fn new(client: Client, base_url: BackendUrl) -> Self {
        Self { client, base_url }
    }

    /// Builds a backend with a default client identifying this crate.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if the TLS backend cannot be initialised.
    pub fn with_base_url(base_url: BackendUrl) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::transport(base_url.as_str(), e))?;

        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &BackendUrl {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str) -> Result<BackendResponse, BackendError> {
        let url = self.base_url.resolve(path);
        tracing::debug!(%method, %url, "Calling backend");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| BackendError::transport(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::body(&url, e))?;

        Ok(BackendResponse { status, body })
    }
}

#[async_trait]
impl DashBackend for HttpDashBackend {
    async fn get(&self, path: &str) -> Result<BackendResponse, BackendError> {
        self.send(Method::GET, path).await
    }

    async fn delete(&self, path: &str) -> Result<BackendResponse, BackendError> {
        self.send(Method::DELETE, path).await
    }

    async fn health_check(&self) -> bool {
        match self.send(Method::GET, endpoints::HEALTH).await {
            Ok(response) => response.status.is_success(),
            Err(e) => {
                tracing::warn!("Backend health probe failed: {}", e);
                false
            }
        }
    }
}
