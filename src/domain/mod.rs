//! Domain layer: backend contract and load outcomes.
//!
//! Nothing here performs I/O. The transport trait is implemented in
//! [`crate::infrastructure`] and consumed by [`crate::application::services`].
//!
//! # Modules
//!
//! - [`backend`] - [`backend::DashBackend`] trait and raw response type
//! - [`endpoints`] - Backend API paths
//! - [`load_result`] - [`load_result::LoadResult`] and status classification
//! - [`pages`] - Data handed to each page and layout

pub mod backend;
pub mod endpoints;
pub mod load_result;
pub mod pages;

pub use backend::{BackendResponse, DashBackend};
pub use load_result::{LoadResult, StatusClass};
pub use pages::{ActionFailure, AppLayoutData, AppPageData, AppsPageData, RootLayoutData};

#[cfg(test)]
pub use backend::MockDashBackend;
