use actix_web::{http::StatusCode, test};

mod common;
use common::client::{login, TestClient};
use common::TestContext;

async fn retrieve_one(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    token: &str,
) -> serde_json::Value {
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("X-API-Token", token.to_string()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(app, req).await;
    body["resources"][0].clone()
}

#[tokio::test]
async fn create_tags() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;

    let req = test::TestRequest::post()
        .uri("/resources/tags")
        .insert_header(("X-API-Token", token.clone()))
        .set_json(serde_json::json!([
            { "title": "created_tag_1", "color": "123abc" },
            { "title": "created_tag_2" },
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let created = body.as_array().unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0]["title"], "created_tag_1");
    assert_eq!(created[0]["color"], "123abc");
    assert!(created[1]["color"].is_null());

    let req = test::TestRequest::get()
        .uri("/resources/tags")
        .insert_header(("X-API-Token", token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total_items"], 5);
}

#[tokio::test]
async fn create_tag_with_an_invalid_color() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let req = test::TestRequest::post()
        .uri("/resources/tags")
        .insert_header(("X-API-Token", token))
        .set_json(serde_json::json!([{ "title": "bad_tag", "color": "red" }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_an_owned_tag() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let tag = retrieve_one(&app, "/resources/tags?filter=title==test_tag_1", &token).await;
    let id = tag["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/resources/tags/{id}"))
        .insert_header(("X-API-Token", token.clone()))
        .set_json(serde_json::json!({ "title": "renamed_tag", "color": "abcdef" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    // Updates answer with the list of updated resources.
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["title"], "renamed_tag");
    assert_eq!(body[0]["color"], "abcdef");

    let tag = retrieve_one(&app, "/resources/tags?filter=title==renamed_tag", &token).await;
    assert_eq!(tag["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn updating_another_users_tag_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let root_token = login(&app, "root", "root_pw").await;
    let root_tag = retrieve_one(&app, "/resources/tags?filter=title==root_tag_1", &root_token).await;
    let id = root_tag["id"].as_i64().unwrap();

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let req = test::TestRequest::put()
        .uri(&format!("/resources/tags/{id}"))
        .insert_header(("X-API-Token", token))
        .set_json(serde_json::json!({ "title": "hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "No resources found that match the criteria."
    );
}

#[tokio::test]
async fn delete_an_owned_tag() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let tag = retrieve_one(&app, "/resources/tags?filter=title==test_tag_2", &token).await;
    let id = tag["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/resources/tags/{id}"))
        .insert_header(("X-API-Token", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "deleted": [id] }));

    let req = test::TestRequest::get()
        .uri("/resources/tags")
        .insert_header(("X-API-Token", token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total_items"], 2);
}

#[tokio::test]
async fn deleting_a_missing_tag_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let req = test::TestRequest::delete()
        .uri("/resources/tags/99999")
        .insert_header(("X-API-Token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_creates_and_updates_users() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "root", "root_pw").await;

    let req = test::TestRequest::post()
        .uri("/resources/users")
        .insert_header(("X-API-Token", token.clone()))
        .set_json(serde_json::json!([{
            "fullname": "New User",
            "username": "new.user",
            "email": "new.user@example.com",
        }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["username"], "new.user");
    assert_eq!(body[0]["role"], 2);

    let user = retrieve_one(
        &app,
        "/resources/users?filter=username==normal.user.1",
        &token,
    )
    .await;
    let id = user["id"].as_i64().unwrap();
    let req = test::TestRequest::put()
        .uri(&format!("/resources/users/{id}"))
        .insert_header(("X-API-Token", token))
        .set_json(serde_json::json!({
            "fullname": "Renamed User",
            "username": "normal.user.1",
            "email": "normal.user.1@example.com",
            "role": 2,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["fullname"], "Renamed User");
}

#[tokio::test]
async fn user_input_is_validated() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "root", "root_pw").await;
    let req = test::TestRequest::post()
        .uri("/resources/users")
        .insert_header(("X-API-Token", token))
        .set_json(serde_json::json!([{
            "fullname": "Bad User",
            "username": "bad.user",
            "email": "not-an-email",
        }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn normal_users_cannot_touch_other_accounts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let root_token = login(&app, "root", "root_pw").await;
    let root = retrieve_one(&app, "/resources/users?filter=username==root", &root_token).await;
    let root_id = root["id"].as_i64().unwrap();

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let req = test::TestRequest::put()
        .uri(&format!("/resources/users/{root_id}"))
        .insert_header(("X-API-Token", token))
        .set_json(serde_json::json!({
            "fullname": "Hijacked",
            "username": "root",
            "email": "root@example.com",
            "role": 1,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_settings_crud_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;

    let req = test::TestRequest::post()
        .uri("/resources/user_settings")
        .insert_header(("X-API-Token", token.clone()))
        .set_json(serde_json::json!([{ "setting": "timezone", "value": "UTC" }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body[0]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/resources/user_settings/{id}"))
        .insert_header(("X-API-Token", token.clone()))
        .set_json(serde_json::json!({ "setting": "timezone", "value": "CET" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["value"], "CET");

    let req = test::TestRequest::delete()
        .uri(&format!("/resources/user_settings/{id}"))
        .insert_header(("X-API-Token", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let setting = retrieve_one(
        &app,
        "/resources/user_settings?filter=setting==theme",
        &token,
    )
    .await;
    assert_eq!(setting["value"], "dark");
}

#[tokio::test]
async fn api_tokens_can_be_revoked() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = login(&app, "normal.user.1", "normal_user_1_pw").await;
    let expired = retrieve_one(
        &app,
        "/resources/api_tokens?filter=title=contains=Expired",
        &token,
    )
    .await;
    let id = expired["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/resources/api_tokens/{id}"))
        .insert_header(("X-API-Token", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "deleted": [id] }));

    let req = test::TestRequest::get()
        .uri("/resources/api_tokens?filter=title=contains=Expired")
        .insert_header(("X-API-Token", token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total_items"], 0);
}
