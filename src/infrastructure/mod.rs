//! Infrastructure layer for external integrations.
//!
//! Implements the transport trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - Base URL resolution and the reqwest-backed [`backend::HttpDashBackend`]

pub mod backend;
