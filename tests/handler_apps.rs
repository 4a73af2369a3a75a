mod common;

use axum::http::StatusCode;

// ─── PAGE ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_apps_page_renders_all_panels() {
    let (base, _deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server.get("/settings/apps").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Shop"));
    assert!(html.contains("Main network"));
    assert!(html.contains("links.example.com"));
    assert!(html.contains("/settings/apps/shop-1"));
}

#[tokio::test]
async fn test_apps_page_shows_sentinel_when_backend_down() {
    let base = common::unreachable_backend().await;
    let server = common::make_server(&base);

    let response = server.get("/settings/apps").await;

    response.assert_status_ok();
    assert!(response.text().contains("Uncaught Error"));
}

#[tokio::test]
async fn test_root_redirects_to_apps() {
    let (base, _deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/settings/apps");
}

// ─── DATA ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_apps_data_structure() {
    let (base, _deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server.get("/settings/apps/__data.json").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["layout"]["respApps"][0]["storeid"], "shop-1");
    assert_eq!(json["layout"]["respNets"][0]["id"], 7);
    assert_eq!(json["layout"]["clientDomains"][0], "links.example.com");
    assert_eq!(json["page"]["respData"], json["layout"]["respApps"]);
}

#[tokio::test]
async fn test_apps_data_sentinels_when_backend_down() {
    let base = common::unreachable_backend().await;
    let server = common::make_server(&base);

    let json = server
        .get("/settings/apps/__data.json")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["layout"]["respApps"], "Uncaught Error");
    assert_eq!(json["layout"]["respNets"], "Uncaught Error");
    assert_eq!(json["layout"]["clientDomains"], "Uncaught Error");
    assert_eq!(json["page"]["respData"], "Uncaught Error");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_success_redirects() {
    let (base, deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server
        .post("/settings/apps/delete")
        .form(&[("id", "7")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/settings/apps");
    assert_eq!(*deletes.lock().unwrap(), vec!["7".to_string()]);
}

#[tokio::test]
async fn test_delete_failure_renders_error() {
    let (base, deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server
        .post("/settings/apps/delete")
        .form(&[("id", "500")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Failed to delete the app"));
    assert_eq!(*deletes.lock().unwrap(), vec!["500".to_string()]);
}

#[tokio::test]
async fn test_delete_without_id_is_rejected_locally() {
    let (base, deletes) = common::spawn_fake_backend().await;
    let server = common::make_server(&base);

    let response = server
        .post("/settings/apps/delete")
        .form(&[("id", "")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Missing app id"));
    assert!(deletes.lock().unwrap().is_empty());
}
