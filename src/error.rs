//! Error types for backend transport.
//!
//! Backend failures never reach the HTTP layer as errors: the service turns
//! them into [`crate::domain::LoadResult`] variants or
//! [`crate::domain::ActionFailure`] values. This type only describes why a
//! call produced no usable response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection refused, DNS failure, TLS error, reset, ...
    #[error("backend request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A response arrived but its body could not be read.
    #[error("failed to read backend response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl BackendError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn body(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Body {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
