//! Transport contract for the dashboard backend.

use crate::error::BackendError;
use async_trait::async_trait;
use axum::http::StatusCode;

/// Raw response returned by the backend: status plus unparsed body.
///
/// Status interpretation and JSON decoding happen in
/// [`crate::application::services::DashboardService`], so the transport
/// stays a thin pass-through.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound HTTP interface to the dashboard backend.
///
/// Paths are backend-relative (e.g. `/api/apps`); implementations resolve
/// them against the configured base URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpDashBackend`] - reqwest-based client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashBackend: Send + Sync {
    /// Issues a `GET` for the given path.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when no response could be obtained or its
    /// body could not be read. Non-2xx statuses are not errors.
    async fn get(&self, path: &str) -> Result<BackendResponse, BackendError>;

    /// Issues a `DELETE` for the given path.
    ///
    /// # Errors
    ///
    /// Same as [`DashBackend::get`].
    async fn delete(&self, path: &str) -> Result<BackendResponse, BackendError>;

    /// Checks if the backend answers its health probe with a 2xx status.
    async fn health_check(&self) -> bool;
}
