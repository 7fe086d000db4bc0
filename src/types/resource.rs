use chrono::{DateTime, Utc};
use my_model::user::UserRole;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Pagination details for a retrieval result.
#[derive(Serialize, Deserialize, Debug)]
pub struct PaginationResult {
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Result of a retrieval operation.
#[derive(Serialize, Deserialize)]
pub struct RetrieveResult<T> {
    pub pagination: PaginationResult,
    pub resources: Vec<T>,
}

/// Result of a deletion operation.
#[derive(Serialize, Deserialize)]
pub struct DeletionResult {
    pub deleted: Vec<i32>,
}

fn check(condition: bool, message: &str) -> Result<(), AppError> {
    if condition {
        Ok(())
    } else {
        Err(AppError::Validation(message.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserResourceIn {
    pub fullname: String,
    pub username: String,
    pub email: String,
    #[serde(default = "default_user_role")]
    pub role: UserRole,
}

fn default_user_role() -> UserRole {
    UserRole::User
}

impl UserResourceIn {
    pub fn validate(&self) -> Result<(), AppError> {
        check(
            !self.fullname.is_empty()
                && self.fullname.len() <= 128
                && self
                    .fullname
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-'),
            "Invalid fullname",
        )?;
        check(
            self.username.len() >= 2
                && self.username.len() <= 128
                && self
                    .username
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && self
                    .username
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.'),
            "Invalid username",
        )?;
        let (local, domain) = self.email.split_once('@').unwrap_or(("", ""));
        check(
            !local.is_empty()
                && domain.contains('.')
                && self.email.len() <= 128
                && self
                    .email
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_-.@".contains(c)),
            "Invalid email address",
        )?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserResource {
    pub id: i32,
    pub uri: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl From<my_model::user::Model> for UserResource {
    fn from(m: my_model::user::Model) -> Self {
        UserResource {
            uri: format!("/resources/users/{}", m.id),
            id: m.id,
            created: m.created,
            updated: m.updated,
            fullname: m.fullname,
            username: m.username,
            email: m.email,
            role: m.role,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct TagResourceIn {
    pub title: String,
    pub color: Option<String>,
}

impl TagResourceIn {
    pub fn validate(&self) -> Result<(), AppError> {
        check(!self.title.is_empty(), "Invalid title")?;
        if let Some(color) = &self.color {
            check(
                color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()),
                "Invalid color",
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct TagResource {
    pub id: i32,
    pub uri: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub title: String,
    pub color: Option<String>,
}

impl From<my_model::tag::Model> for TagResource {
    fn from(m: my_model::tag::Model) -> Self {
        TagResource {
            uri: format!("/resources/tags/{}", m.id),
            id: m.id,
            created: m.created,
            updated: m.updated,
            title: m.title,
            color: m.color,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ApiClientResourceIn {
    pub app_name: String,
    pub app_publisher: String,
    pub redirect_url: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "Utc::now")]
    pub expires: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl ApiClientResourceIn {
    pub fn validate(&self) -> Result<(), AppError> {
        check(
            !self.app_name.is_empty() && self.app_name.len() <= 64,
            "Invalid app name",
        )?;
        check(
            !self.app_publisher.is_empty() && self.app_publisher.len() <= 64,
            "Invalid app publisher",
        )?;
        if let Some(url) = &self.redirect_url {
            check(
                (url.starts_with("http://") || url.starts_with("https://")) && url.len() <= 1024,
                "Invalid redirect URL",
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiClientResource {
    pub id: i32,
    pub uri: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub app_name: String,
    pub app_publisher: String,
    pub redirect_url: Option<String>,
    pub enabled: bool,
    pub expires: DateTime<Utc>,
}

impl From<my_model::api_client::Model> for ApiClientResource {
    fn from(m: my_model::api_client::Model) -> Self {
        ApiClientResource {
            uri: format!("/resources/api_clients/{}", m.id),
            id: m.id,
            created: m.created,
            updated: m.updated,
            app_name: m.app_name,
            app_publisher: m.app_publisher,
            redirect_url: m.redirect_url,
            enabled: m.enabled,
            expires: m.expires,
        }
    }
}

/// API tokens are read-only through the resources API; the token string
/// itself is never serialized.
#[derive(Serialize, Deserialize)]
pub struct ApiTokenResource {
    pub id: i32,
    pub uri: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub title: String,
    pub enabled: bool,
    pub expires: DateTime<Utc>,
    pub api_client_id: Option<i32>,
}

impl From<my_model::api_token::Model> for ApiTokenResource {
    fn from(m: my_model::api_token::Model) -> Self {
        ApiTokenResource {
            uri: format!("/resources/api_tokens/{}", m.id),
            id: m.id,
            created: m.created,
            updated: m.updated,
            title: m.title,
            enabled: m.enabled,
            expires: m.expires,
            api_client_id: m.api_client_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserSettingResourceIn {
    pub setting: String,
    pub value: String,
}

impl UserSettingResourceIn {
    pub fn validate(&self) -> Result<(), AppError> {
        check(
            !self.setting.is_empty() && self.setting.len() <= 32,
            "Invalid setting name",
        )?;
        check(self.value.len() <= 32, "Invalid setting value")?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserSettingResource {
    pub id: i32,
    pub uri: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub setting: String,
    pub value: String,
}

impl From<my_model::user_setting::Model> for UserSettingResource {
    fn from(m: my_model::user_setting::Model) -> Self {
        UserSettingResource {
            uri: format!("/resources/user_settings/{}", m.id),
            id: m.id,
            created: m.created,
            updated: m.updated,
            setting: m.setting,
            value: m.value,
        }
    }
}
