//! Backend API paths used by the dashboard.
//!
//! Ids coming from URLs and forms are always placed as a single
//! percent-encoded path segment. Ids that cannot be one segment (empty,
//! `.` or `..`) yield `None`.

use url::Url;

pub const APPS: &str = "/api/apps";
pub const NETWORKS: &str = "/api/networks";
pub const LINK_DOMAINS: &str = "/api/links/domains";
pub const HEALTH: &str = "/health";

/// `GET /api/apps/{storeid}`
pub fn app(storeid: &str) -> Option<String> {
    Some(format!("{APPS}/{}", segment(storeid)?))
}

/// `GET /api/apps/{id}/links`
pub fn app_links(app_id: &str) -> Option<String> {
    Some(format!("{APPS}/{}/links", segment(app_id)?))
}

/// `DELETE /api/networks/{id}`
pub fn network(id: &str) -> Option<String> {
    Some(format!("{NETWORKS}/{}", segment(id)?))
}

/// Percent-encodes `raw` as one path segment (`/`, `%`, `?`, `#` included).
///
/// Dot segments are rejected: URL normalization would resolve them even in
/// encoded form.
pub fn segment(raw: &str) -> Option<String> {
    if matches!(raw, "" | "." | "..") {
        return None;
    }

    let mut url = Url::parse("http://segment/").ok()?;
    url.path_segments_mut().ok()?.clear().push(raw);

    Some(url.path().trim_start_matches('/').to_string())
}
