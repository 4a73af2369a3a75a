#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use axum_test::TestServer;
use dash_frontend::infrastructure::backend::{BackendUrl, HttpDashBackend};
use dash_frontend::routes::build_router;
use dash_frontend::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns a base URL nothing is listening on.
pub async fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn create_backend(base_url: &str) -> HttpDashBackend {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpDashBackend::new(client, BackendUrl::new(base_url))
}

pub fn create_test_state(base_url: &str) -> AppState {
    AppState::new(create_backend(base_url))
}

pub fn make_server(base_url: &str) -> TestServer {
    TestServer::new(build_router(create_test_state(base_url))).unwrap()
}

/// Ids received by the fake backend's delete endpoint.
pub type DeleteLog = Arc<Mutex<Vec<String>>>;

/// Backend with one app (`shop-1`), one network (id 7) and one client domain.
///
/// - `GET /api/apps/broken` answers 500, unknown apps answer 404
/// - `DELETE /api/networks/7` succeeds, `500` answers 500, anything else 404
pub fn fake_backend() -> (Router, DeleteLog) {
    let deletes = DeleteLog::default();

    let router = Router::new()
        .route(
            "/api/apps",
            get(|| async { Json(json!([{"id": 1, "storeid": "shop-1", "name": "Shop"}])) }),
        )
        .route("/api/apps/{id}", get(app))
        .route("/api/apps/{id}/links", get(app_links))
        .route(
            "/api/networks",
            get(|| async { Json(json!([{"id": 7, "name": "Main network"}])) }),
        )
        .route("/api/networks/{id}", delete(delete_network))
        .route(
            "/api/links/domains",
            get(|| async { Json(json!(["links.example.com"])) }),
        )
        .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
        .with_state(deletes.clone());

    (router, deletes)
}

/// Spawns [`fake_backend`] and returns its base URL and delete log.
pub async fn spawn_fake_backend() -> (String, DeleteLog) {
    let (router, deletes) = fake_backend();
    (spawn_backend(router).await, deletes)
}

/// Requests received by [`spawn_recording_backend`], as `"METHOD /path?query"`.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Backend that answers 404 to everything and records each request line.
pub async fn spawn_recording_backend() -> (String, RequestLog) {
    let requests = RequestLog::default();
    let router = Router::new()
        .fallback(record_request)
        .with_state(requests.clone());

    (spawn_backend(router).await, requests)
}

async fn record_request(State(requests): State<RequestLog>, method: Method, uri: Uri) -> StatusCode {
    requests.lock().unwrap().push(format!("{method} {uri}"));
    StatusCode::NOT_FOUND
}

async fn app(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "shop-1" => Json(json!({
            "id": 1,
            "name": "Shop",
            "app": {"id": 1, "name": "Shop"}
        }))
        .into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn app_links(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!([{"url": "https://shop.example.com/a"}])).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_network(State(deletes): State<DeleteLog>, Path(id): Path<String>) -> StatusCode {
    deletes.lock().unwrap().push(id.clone());

    match id.as_str() {
        "7" => StatusCode::OK,
        "500" => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::NOT_FOUND,
    }
}
