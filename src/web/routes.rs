//! Settings dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    app_data_handler, app_handler, apps_data_handler, apps_handler,
    delete_app_from_detail_handler, delete_app_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard page, data and form action routes.
///
/// # Endpoints
///
/// - `GET  /settings/apps`                         - Apps page
/// - `GET  /settings/apps/__data.json`             - Apps page loader output
/// - `POST /settings/apps/delete`                  - Delete action
/// - `GET  /settings/apps/{storeid}`               - Single app page
/// - `GET  /settings/apps/{storeid}/__data.json`   - Single app loader output
/// - `POST /settings/apps/{storeid}/delete`        - Delete action from the app page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings/apps", get(apps_handler))
        .route("/settings/apps/__data.json", get(apps_data_handler))
        .route("/settings/apps/delete", post(delete_app_handler))
        .route("/settings/apps/{storeid}", get(app_handler))
        .route("/settings/apps/{storeid}/__data.json", get(app_data_handler))
        .route(
            "/settings/apps/{storeid}/delete",
            post(delete_app_from_detail_handler),
        )
}
