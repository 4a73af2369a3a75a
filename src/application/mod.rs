//! Application layer services.
//!
//! Services consume the [`crate::domain::DashBackend`] trait and provide
//! page loaders and form actions for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::dashboard_service::DashboardService`] - Backend reads, layout/page loaders, delete action

pub mod services;
