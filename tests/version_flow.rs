use actix_web::{http::StatusCode, test};

mod common;
use common::client::TestClient;
use common::TestContext;

#[tokio::test]
async fn version_reports_dependency_versions() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/version").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["version"].as_str().unwrap(), env!("CARGO_PKG_VERSION"));
    assert!(body["rust_version"].is_string());
    assert!(body["internal_dependencies"]["my-model"].is_string());
    assert!(body["internal_dependencies"]["migration"].is_string());
    assert!(body["external_dependencies"]["actix-web"].is_string());
    assert!(body["external_dependencies"]["sea-orm"].is_string());
}

#[tokio::test]
async fn version_needs_no_authentication() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // Even a bogus token must not get in the way.
    let req = test::TestRequest::get()
        .uri("/version")
        .insert_header(("X-API-Token", "wrong_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
