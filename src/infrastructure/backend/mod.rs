//! Outbound client for the dashboard backend.

mod base_url;
mod http_backend;

pub use base_url::{BackendUrl, DEFAULT_BACKEND_BASE_URL};
pub use http_backend::HttpDashBackend;
