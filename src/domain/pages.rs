//! Data produced by page and layout loaders.
//!
//! Field names serialize in camelCase so the JSON data endpoints expose the
//! same keys the templates were written against (`respApps`, `appData`, ...).

use serde::Serialize;
use serde_json::Value;

use crate::domain::load_result::LoadResult;

/// Message returned when the backend refuses a delete.
pub const DELETE_FAILED: &str = "Failed to delete the app";
/// Message returned when the submitted form carries no id.
pub const MISSING_ID: &str = "Missing app id";

/// Root layout data, loaded for every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootLayoutData {
    pub resp_apps: LoadResult,
    pub resp_nets: LoadResult,
    pub client_domains: LoadResult,
}

/// `/settings/apps` page data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsPageData {
    pub resp_data: LoadResult,
}

/// `/settings/apps/{storeid}` layout data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLayoutData {
    pub app_data: LoadResult,
    pub app_links: LoadResult,
    pub resp_nets: LoadResult,
}

/// `/settings/apps/{storeid}` page data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPageData {
    pub app_data: LoadResult,
    pub app_links: LoadResult,
}

/// Failure descriptor returned by form actions.
///
/// Serializes as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionFailure {
    pub error: String,
}

impl ActionFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Where the app id lives inside an app record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppIdLocation {
    /// `{"id": ...}`
    TopLevel,
    /// `{"app": {"id": ...}}`
    Nested,
}

impl AppIdLocation {
    fn pointer(self) -> &'static str {
        match self {
            Self::TopLevel => "/id",
            Self::Nested => "/app/id",
        }
    }

    /// Extracts the id as a path segment. Numbers and non-empty strings are
    /// accepted; anything else yields `None`.
    pub fn extract(self, record: &Value) -> Option<String> {
        match record.pointer(self.pointer())? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}
