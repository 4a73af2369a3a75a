//! HTML template rendering handlers for the settings dashboard.

mod app_detail;
mod apps;

pub use app_detail::{app_data_handler, app_handler, delete_app_from_detail_handler};
pub use apps::{DeleteAppForm, apps_data_handler, apps_handler, delete_app_handler};
