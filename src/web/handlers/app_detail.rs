//! Single app page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::{Value, json};

use super::apps::DeleteAppForm;
use crate::domain::endpoints;
use crate::domain::{AppLayoutData, AppPageData, RootLayoutData};
use crate::state::AppState;
use crate::web::views::{self, Section};

/// Template for a single app.
///
/// Renders `templates/app.html` with the app record, its links and the
/// networks list (deletable).
#[derive(Template, WebTemplate)]
#[template(path = "app.html")]
pub struct AppTemplate {
    pub storeid: String,
    pub title: String,
    pub app_sentinel: Option<&'static str>,
    pub app_json: String,
    pub sections: Vec<Section>,
    pub error: Option<String>,
}

/// Runs the root layout, the app layout and the app page loaders.
async fn load(state: &AppState, storeid: &str) -> (RootLayoutData, AppLayoutData, AppPageData) {
    let root = state.dashboard.root_layout().await;
    let (app_layout, page) = tokio::join!(
        state.dashboard.app_layout(storeid, &root),
        state.dashboard.app_page(storeid)
    );

    (root, app_layout, page)
}

/// `/settings/apps/{storeid}` with `storeid` percent-encoded, or the apps
/// list when it cannot be a path segment.
fn page_path(storeid: &str) -> String {
    match endpoints::segment(storeid) {
        Some(segment) => format!("/settings/apps/{segment}"),
        None => "/settings/apps".to_string(),
    }
}

async fn render(state: &AppState, storeid: String, error: Option<String>) -> AppTemplate {
    let (_, layout, page) = load(state, &storeid).await;

    let delete_action = format!("{}/delete", page_path(&storeid));

    AppTemplate {
        title: views::app_title(&page.app_data, &storeid),
        app_sentinel: page.app_data.sentinel(),
        app_json: views::pretty(&page.app_data),
        sections: vec![
            Section::new("Links", &page.app_links),
            Section::new("Networks", &layout.resp_nets).deletable(delete_action),
        ],
        storeid,
        error,
    }
}

/// Renders the page for one app.
///
/// # Endpoint
///
/// `GET /settings/apps/{storeid}`
pub async fn app_handler(
    State(state): State<AppState>,
    Path(storeid): Path<String>,
) -> impl IntoResponse {
    render(&state, storeid, None).await
}

/// Returns the raw loader output for one app.
///
/// # Endpoint
///
/// `GET /settings/apps/{storeid}/__data.json`
///
/// # Response
///
/// ```json
/// {
///   "layout": { "respApps": ..., "respNets": ..., "clientDomains": ... },
///   "appLayout": { "appData": ..., "appLinks": ..., "respNets": ... },
///   "page": { "appData": ..., "appLinks": ... }
/// }
/// ```
pub async fn app_data_handler(
    State(state): State<AppState>,
    Path(storeid): Path<String>,
) -> Json<Value> {
    let (root, app_layout, page) = load(&state, &storeid).await;

    Json(json!({ "layout": root, "appLayout": app_layout, "page": page }))
}

/// Deletes an entry from the app page.
///
/// # Endpoint
///
/// `POST /settings/apps/{storeid}/delete` with form field `id`
///
/// # Response
///
/// - **303 See Other** back to `/settings/apps/{storeid}` on success, with
///   `storeid` percent-encoded
/// - **200 OK** with the page re-rendered and the error shown inline on failure
pub async fn delete_app_from_detail_handler(
    State(state): State<AppState>,
    Path(storeid): Path<String>,
    Form(form): Form<DeleteAppForm>,
) -> Response {
    match state.dashboard.delete_app(form.id.as_deref()).await {
        Ok(()) => Redirect::to(&page_path(&storeid)).into_response(),
        Err(failure) => render(&state, storeid, Some(failure.error))
            .await
            .into_response(),
    }
}
