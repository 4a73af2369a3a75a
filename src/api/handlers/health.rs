//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::DashBackend;
use crate::state::AppState;

/// Returns service health status with a backend check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend answered its health probe
/// - **503 Service Unavailable**: Backend unreachable or unhealthy
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": {
///       "status": "ok",
///       "message": "Reachable at http://dash-backend:8001"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend_check = check_backend(&state).await;

    let healthy = backend_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: backend_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the backend's own `/health` endpoint.
async fn check_backend(state: &AppState) -> CheckStatus {
    let backend = state.dashboard.backend();
    let base = backend.base_url().as_str();

    if backend.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable at {}", base)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Backend at {} is unreachable or unhealthy", base)),
        }
    }
}
