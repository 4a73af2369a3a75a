//! Outcome of a single backend read.

use axum::http::StatusCode;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Placeholder rendered when the backend answers `404 Not Found`.
pub const NOT_FOUND: &str = "Not Found";
/// Placeholder rendered when the backend answers with a 5xx status.
pub const BACKEND_ERROR: &str = "Backend Error";
/// Placeholder rendered for any status outside 2xx, 404 and 5xx.
pub const UNEXPECTED_RESPONSE: &str = "Unexpected Response";
/// Placeholder rendered when the call never produced a usable response.
pub const UNCAUGHT_ERROR: &str = "Uncaught Error";

/// Result of loading one backend resource.
///
/// The payload is opaque JSON passed through untouched. Failure kinds are
/// kept as variants so callers can branch without comparing strings; the
/// sentinel strings only appear when the value is serialized for the
/// rendering layer.
///
/// # Serialization
///
/// ```json
/// {"id": 1}            // Loaded
/// "Not Found"          // NotFound
/// "Backend Error"      // BackendError
/// "Unexpected Response"// Unexpected(_)
/// "Uncaught Error"     // Uncaught
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    Loaded(Value),
    NotFound,
    BackendError,
    Unexpected(StatusCode),
    Uncaught,
}

/// Coarse classification of a backend status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    NotFound,
    ServerError,
    Unexpected,
}

impl StatusClass {
    /// Maps every status code to exactly one class.
    pub fn of(status: StatusCode) -> Self {
        if status.is_success() {
            Self::Success
        } else if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else if status.is_server_error() {
            Self::ServerError
        } else {
            Self::Unexpected
        }
    }
}

impl LoadResult {
    /// Returns the sentinel string for failure variants, `None` when loaded.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => None,
            Self::NotFound => Some(NOT_FOUND),
            Self::BackendError => Some(BACKEND_ERROR),
            Self::Unexpected(_) => Some(UNEXPECTED_RESPONSE),
            Self::Uncaught => Some(UNCAUGHT_ERROR),
        }
    }

    /// Returns the loaded payload, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl Serialize for LoadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Loaded(value) => value.serialize(serializer),
            other => serializer.serialize_str(other.sentinel().unwrap_or(UNCAUGHT_ERROR)),
        }
    }
}
