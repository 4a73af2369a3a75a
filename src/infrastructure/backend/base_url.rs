//! Backend base URL and path resolution.

/// Used when `DASH_BACKEND_BASE_URL` is not set.
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://dash-backend:8001";

/// Resolved backend base URL.
///
/// Built once at startup from [`crate::config::Config`] and shared read-only.
/// A single trailing slash is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl {
    base: String,
}

impl BackendUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Joins `path` onto the base with exactly one separating slash.
    ///
    /// ```
    /// use dash_frontend::infrastructure::backend::BackendUrl;
    ///
    /// let url = BackendUrl::new("http://dash-backend:8001/");
    /// assert_eq!(url.resolve("api/apps"), "http://dash-backend:8001/api/apps");
    /// assert_eq!(url.resolve("/api/apps"), "http://dash-backend:8001/api/apps");
    /// ```
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

impl Default for BackendUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_single_slash() {
        let url = BackendUrl::new("http://localhost:8001");
        assert_eq!(url.resolve("api/networks"), "http://localhost:8001/api/networks");
        assert_eq!(url.resolve("/api/networks"), "http://localhost:8001/api/networks");
    }

    #[test]
    fn test_strips_trailing_slash_once() {
        assert_eq!(BackendUrl::new("http://localhost:8001/").as_str(), "http://localhost:8001");
        assert_eq!(
            BackendUrl::new("http://localhost:8001/prefix/").resolve("/api/apps"),
            "http://localhost:8001/prefix/api/apps"
        );
    }

    #[test]
    fn test_never_doubles_slash() {
        let url = BackendUrl::new("http://localhost:8001/");
        for path in ["api/apps", "/api/apps", "health", "/health"] {
            let resolved = url.resolve(path);
            let after_scheme = &resolved["http://".len()..];
            assert!(!after_scheme.contains("//"), "{resolved}");
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(BackendUrl::default().as_str(), DEFAULT_BACKEND_BASE_URL);
    }
}
