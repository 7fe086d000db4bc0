use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use my_rest_api::db::DbService;
use serde_json::json;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(my_rest_api::routes::configure_routes)
    }
}

/// Log in and return the session token. Panics when the login fails.
#[allow(dead_code)]
pub async fn login(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    username: &str,
    password: &str,
) -> String {
    login_request(app, json!({ "username": username, "password": password })).await
}

#[allow(dead_code)]
pub async fn login_with_second_factor(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    username: &str,
    password: &str,
    second_factor: &str,
) -> String {
    login_request(
        app,
        json!({
            "username": username,
            "password": password,
            "second_factor": second_factor,
        }),
    )
    .await
}

async fn login_request(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    body: serde_json::Value,
) -> String {
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "login failed: {}", resp.status());
    let body: serde_json::Value = test::read_body_json(resp).await;
    body["api_token"]
        .as_str()
        .expect("login response without api_token")
        .to_string()
}

/// Current TOTP code for a base32 encoded secret.
#[allow(dead_code)]
pub fn totp_code(secret: &str) -> String {
    let bytes = totp_rs::Secret::Encoded(secret.to_string())
        .to_bytes()
        .expect("Invalid TOTP secret");
    totp_rs::TOTP::new(totp_rs::Algorithm::SHA1, 6, 1, 30, bytes)
        .expect("Invalid TOTP parameters")
        .generate_current()
        .expect("System time before the epoch")
}
