//! Page loaders and form actions for the settings dashboard.

use crate::domain::backend::DashBackend;
use crate::domain::endpoints;
use crate::domain::load_result::{LoadResult, StatusClass};
use crate::domain::pages::{
    ActionFailure, AppIdLocation, AppLayoutData, AppPageData, AppsPageData, DELETE_FAILED,
    MISSING_ID, RootLayoutData,
};
use serde_json::Value;
use std::sync::Arc;

/// Loads dashboard data from the backend and forwards delete actions.
///
/// Every read issues exactly one request and converts the response into a
/// [`LoadResult`]; failures are logged and absorbed, never propagated.
///
/// # Status Mapping
///
/// | Response | Result |
/// |---|---|
/// | 2xx with JSON body | [`LoadResult::Loaded`] |
/// | 404 | [`LoadResult::NotFound`] |
/// | 5xx | [`LoadResult::BackendError`] |
/// | any other status | [`LoadResult::Unexpected`] |
/// | transport error or malformed JSON | [`LoadResult::Uncaught`] |
pub struct DashboardService<B: DashBackend> {
    backend: Arc<B>,
}

impl<B: DashBackend> DashboardService<B> {
    /// Creates a new dashboard service.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `GET /api/apps`
    pub async fn list_apps(&self) -> LoadResult {
        self.load(endpoints::APPS).await
    }

    /// `GET /api/apps/{storeid}`
    ///
    /// A `storeid` that is not a valid path segment gives
    /// [`LoadResult::NotFound`] without a request.
    pub async fn get_app(&self, storeid: &str) -> LoadResult {
        match endpoints::app(storeid) {
            Some(path) => self.load(&path).await,
            None => {
                tracing::warn!(storeid, "Invalid store id");
                LoadResult::NotFound
            }
        }
    }

    /// `GET /api/apps/{id}/links`
    pub async fn app_links(&self, app_id: &str) -> LoadResult {
        match endpoints::app_links(app_id) {
            Some(path) => self.load(&path).await,
            None => {
                tracing::warn!(app_id, "Invalid app id");
                LoadResult::NotFound
            }
        }
    }

    /// `GET /api/networks`
    pub async fn list_networks(&self) -> LoadResult {
        self.load(endpoints::NETWORKS).await
    }

    /// `GET /api/links/domains`
    pub async fn list_link_domains(&self) -> LoadResult {
        self.load(endpoints::LINK_DOMAINS).await
    }

    /// Loads the root layout: apps, networks and client domains, fetched
    /// concurrently. All three keys are present even when some reads fail.
    pub async fn root_layout(&self) -> RootLayoutData {
        let (resp_apps, resp_nets, client_domains) = tokio::join!(
            self.list_apps(),
            self.list_networks(),
            self.list_link_domains()
        );

        tracing::info!("Root layout loaded: apps, networks, domains");

        RootLayoutData {
            resp_apps,
            resp_nets,
            client_domains,
        }
    }

    /// Loads the `/settings/apps` page.
    pub async fn apps_page(&self) -> AppsPageData {
        AppsPageData {
            resp_data: self.list_apps().await,
        }
    }

    /// Loads the `/settings/apps/{storeid}` layout.
    ///
    /// Fetches the app, then its links using the record's top-level `id`.
    /// `respNets` is taken from the already-loaded root layout.
    pub async fn app_layout(&self, storeid: &str, root: &RootLayoutData) -> AppLayoutData {
        let (app_data, app_links) = self.app_with_links(storeid, AppIdLocation::TopLevel).await;

        AppLayoutData {
            app_data,
            app_links,
            resp_nets: root.resp_nets.clone(),
        }
    }

    /// Loads the `/settings/apps/{storeid}` page.
    ///
    /// Fetches the app, then its links using `app.id` from the record.
    pub async fn app_page(&self, storeid: &str) -> AppPageData {
        let (app_data, app_links) = self.app_with_links(storeid, AppIdLocation::Nested).await;

        AppPageData {
            app_data,
            app_links,
        }
    }

    /// Deletes an app entry through `DELETE /api/networks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionFailure`] with:
    /// - `"Missing app id"` if `id` is absent or blank (no request is sent)
    /// - `"Failed to delete the app"` on a non-2xx status or transport failure,
    ///   or if `id` is `.`/`..` (no request is sent)
    pub async fn delete_app(&self, id: Option<&str>) -> Result<(), ActionFailure> {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            tracing::warn!("Delete app requested without an id");
            return Err(ActionFailure::new(MISSING_ID));
        };

        tracing::info!("Delete app id: {}", id);

        let Some(path) = endpoints::network(id) else {
            tracing::error!("Failed to delete the app {}: invalid id", id);
            return Err(ActionFailure::new(DELETE_FAILED));
        };

        match self.backend.delete(&path).await {
            Ok(response) if response.status.is_success() => Ok(()),
            Ok(response) => {
                tracing::error!(status = %response.status, "Failed to delete the app {}", id);
                Err(ActionFailure::new(DELETE_FAILED))
            }
            Err(e) => {
                tracing::error!("Failed to delete the app {}: {}", id, e);
                Err(ActionFailure::new(DELETE_FAILED))
            }
        }
    }

    /// Fetches an app and, if its id can be found, the app's links.
    async fn app_with_links(
        &self,
        storeid: &str,
        id_location: AppIdLocation,
    ) -> (LoadResult, LoadResult) {
        let app_data = self.get_app(storeid).await;

        let app_links = match app_data.value().map(|record| id_location.extract(record)) {
            Some(Some(app_id)) => self.app_links(&app_id).await,
            Some(None) => {
                tracing::warn!(storeid, ?id_location, "App record has no id, skipping links");
                LoadResult::NotFound
            }
            None => app_data.clone(),
        };

        (app_data, app_links)
    }

    async fn load(&self, path: &str) -> LoadResult {
        let response = match self.backend.get(path).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Uncaught error: {}", e);
                return LoadResult::Uncaught;
            }
        };

        match StatusClass::of(response.status) {
            StatusClass::Success => decode(path, &response.body),
            StatusClass::NotFound => {
                tracing::warn!(path, "Not found");
                LoadResult::NotFound
            }
            StatusClass::ServerError => {
                tracing::error!(path, status = %response.status, "API server error");
                LoadResult::BackendError
            }
            StatusClass::Unexpected => {
                tracing::warn!(path, status = %response.status, "Unexpected backend status");
                LoadResult::Unexpected(response.status)
            }
        }
    }
}

fn decode(path: &str, body: &str) -> LoadResult {
    if body.trim().is_empty() {
        return LoadResult::Loaded(Value::Null);
    }

    match serde_json::from_str(body) {
        Ok(value) => LoadResult::Loaded(value),
        Err(e) => {
            tracing::error!(path, "Uncaught error: malformed JSON: {}", e);
            LoadResult::Uncaught
        }
    }
}
