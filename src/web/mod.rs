//! Web dashboard layer for browser-based UI.
//!
//! Renders settings pages from backend data with Askama templates and
//! exposes the delete form actions.
//!
//! # Modules
//!
//! - [`handlers`] - Page, data and action handlers
//! - [`routes`] - Dashboard route configuration
//! - [`views`] - Template view models

pub mod handlers;
pub mod routes;
pub mod views;
