//! JSON endpoints and HTTP middleware shared by the whole router.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - Health check handler
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
