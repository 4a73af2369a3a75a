//! Apps settings page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::state::AppState;
use crate::web::views::Section;

/// Form posted by the delete buttons.
#[derive(Debug, Deserialize)]
pub struct DeleteAppForm {
    pub id: Option<String>,
}

/// Template for the apps settings page.
///
/// Renders `templates/apps.html` with:
/// - Apps list with a delete button per row
/// - Networks and client domains from the root layout
/// - Inline error from a failed delete, if any
#[derive(Template, WebTemplate)]
#[template(path = "apps.html")]
pub struct AppsTemplate {
    pub sections: Vec<Section>,
    pub error: Option<String>,
}

async fn render(state: &AppState, error: Option<String>) -> AppsTemplate {
    let (root, page) = tokio::join!(state.dashboard.root_layout(), state.dashboard.apps_page());

    AppsTemplate {
        sections: vec![
            Section::new("Apps", &page.resp_data)
                .deletable("/settings/apps/delete")
                .linked(),
            Section::new("Networks", &root.resp_nets),
            Section::new("Client domains", &root.client_domains),
        ],
        error,
    }
}

/// Renders the apps settings page.
///
/// # Endpoint
///
/// `GET /settings/apps`
pub async fn apps_handler(State(state): State<AppState>) -> impl IntoResponse {
    render(&state, None).await
}

/// Returns the raw loader output for the apps page.
///
/// # Endpoint
///
/// `GET /settings/apps/__data.json`
///
/// # Response
///
/// ```json
/// {
///   "layout": { "respApps": [...], "respNets": [...], "clientDomains": "Not Found" },
///   "page": { "respData": [...] }
/// }
/// ```
pub async fn apps_data_handler(State(state): State<AppState>) -> Json<Value> {
    let (root, page) = tokio::join!(state.dashboard.root_layout(), state.dashboard.apps_page());

    Json(json!({ "layout": root, "page": page }))
}

/// Deletes an app entry.
///
/// # Endpoint
///
/// `POST /settings/apps/delete` with form field `id`
///
/// # Response
///
/// - **303 See Other** to `/settings/apps` on success
/// - **200 OK** with the page re-rendered and the error shown inline on failure
pub async fn delete_app_handler(
    State(state): State<AppState>,
    Form(form): Form<DeleteAppForm>,
) -> Response {
    match state.dashboard.delete_app(form.id.as_deref()).await {
        Ok(()) => Redirect::to("/settings/apps").into_response(),
        Err(failure) => render(&state, Some(failure.error)).await.into_response(),
    }
}
