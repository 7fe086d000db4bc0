use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials given to `POST /auth/login`.
#[derive(Serialize, Deserialize)]
pub struct AuthenticationDetails {
    pub username: String,
    pub password: String,
    pub second_factor: Option<String>,
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationStatus {
    Success,
    Failure,
}

#[derive(Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub status: AuthenticationStatus,
    pub api_token: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LogoutResult {
    pub status: AuthenticationStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum TokenType {
    #[serde(rename = "long-lived")]
    LongLived,
    #[serde(rename = "short-lived")]
    ShortLived,
}

/// Result of `GET /auth/status`.
#[derive(Serialize, Deserialize)]
pub struct ApiAuthStatus {
    pub token_type: TokenType,
    pub title: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
}

/// Result of `GET /auth/refresh`.
#[derive(Serialize, Deserialize)]
pub struct ApiRefreshStatus {
    pub title: Option<String>,
    pub expires: Option<DateTime<Utc>>,
    pub new_token: Option<String>,
}
