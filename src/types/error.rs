use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // authentication and authorization
    #[error("not authorized")]
    Unauthorized,
    #[error("authentication failed")]
    AuthenticationFailed,

    // standard web stuffs
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),

    // retrieval parameter errors
    #[error("filter error: {0}")]
    Filter(String),
    #[error("sorting error: {message}")]
    Sorting {
        message: String,
        allowed_sort_fields: Vec<String>,
    },
    #[error("invalid page number")]
    InvalidPage { max_page: u64 },
    #[error("invalid page size")]
    InvalidPageSize { max_page_size: u64 },

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::AuthenticationFailed => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_)
            | Self::Filter(_)
            | Self::Sorting { .. }
            | Self::InvalidPage { .. }
            | Self::InvalidPageSize { .. } => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Unauthorized => json!({ "error": "Not authorized" }),
            Self::AuthenticationFailed => {
                json!({ "status": "failure", "api_token": null })
            }
            Self::NotFound => {
                json!({ "error": "No resources found that match the criteria." })
            }
            Self::Validation(message) | Self::Filter(message) => {
                json!({ "error": message })
            }
            Self::Sorting {
                message,
                allowed_sort_fields,
            } => json!({ "error": message, "allowed_sort_fields": allowed_sort_fields }),
            Self::InvalidPage { max_page } => {
                json!({ "error": "Invalid page number.", "max_page": max_page })
            }
            Self::InvalidPageSize { max_page_size } => {
                json!({ "error": "Invalid page size.", "max_page_size": max_page_size })
            }
            Self::Db(_) | Self::Internal(_) => json!({ "error": "Internal server error" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorting_errors_carry_the_message_and_allowed_fields() {
        let err = AppError::Sorting {
            message: "Invalid sort field: foo".to_string(),
            allowed_sort_fields: vec!["id".to_string(), "title".to_string()],
        };
        assert_eq!(err.to_string(), "sorting error: Invalid sort field: foo");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_has_the_standard_body() {
        let response = AppError::NotFound.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
