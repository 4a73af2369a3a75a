//! # Dash Frontend
//!
//! Server-rendered settings dashboard for the dash-backend API, built with Axum.
//!
//! Every page is assembled from one or more backend reads (apps, networks,
//! link domains); form actions forward deletes to the same backend. This
//! crate holds no state of its own beyond the configured backend base URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Backend contract, load outcomes, page data
//! - **Application Layer** ([`application`]) - Loaders and form actions
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest backend client
//! - **API Layer** ([`api`]) - Health endpoint and tracing middleware
//! - **Web Layer** ([`web`]) - HTML pages, data endpoints and form actions
//!
//! ## Failure Handling
//!
//! Backend failures never fail a page. Each read yields a
//! [`domain::LoadResult`]; failures render as `"Not Found"`,
//! `"Backend Error"`, `"Unexpected Response"` or `"Uncaught Error"`.
//!
//! ## Quick Start
//!
//! ```bash
//! export DASH_BACKEND_BASE_URL="http://localhost:8001"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::BackendError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::DashboardService;
    pub use crate::domain::{ActionFailure, DashBackend, LoadResult};
    pub use crate::infrastructure::backend::{BackendUrl, HttpDashBackend};
    pub use crate::state::AppState;
}
