use std::cmp::max;
use std::sync::Arc;

use actix_web::{get, post, web};
use chrono::{Duration, Utc};
use my_model::user::UserRole;

use crate::auth::authorizer::{authorize, require_invalid_token, AuthorizerKind};
use crate::auth::XApiToken;
use crate::config::config;
use crate::db::DbService;
use crate::types::auth::{
    ApiAuthStatus, ApiRefreshStatus, AuthenticationDetails, AuthenticationResult,
    AuthenticationStatus, LogoutResult, TokenType,
};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

/// Log in with username, password and (when enabled) a TOTP code.
/// Requests that already carry a valid token are rejected.
#[post("/login")]
async fn login(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<AuthenticationDetails>,
) -> ApiResult<AuthenticationResult> {
    require_invalid_token(&db, &header).await?;

    let body = body.into_inner();
    let user = db
        .verify_credentials(&body.username, &body.password, body.second_factor.as_deref())
        .await?
        .ok_or(AppError::AuthenticationFailed)?;
    if user.role == UserRole::Service {
        return Err(AppError::AuthenticationFailed);
    }

    let token = db.create_session_token(&user, body.title).await?;
    Ok(ApiResponse::Ok(AuthenticationResult {
        status: AuthenticationStatus::Success,
        api_token: Some(token.token),
    }))
}

/// Delete the session token used for the request.
#[get("/logout")]
async fn logout(db: web::Data<Arc<DbService>>, header: XApiToken) -> ApiResult<LogoutResult> {
    let authorized = authorize(&db, &header, AuthorizerKind::ShortLivedOnly).await?;
    db.delete_api_token(authorized.token.id).await?;
    Ok(ApiResponse::Ok(LogoutResult {
        status: AuthenticationStatus::Success,
    }))
}

#[get("/status")]
async fn status(db: web::Data<Arc<DbService>>, header: XApiToken) -> ApiResult<ApiAuthStatus> {
    let authorized = authorize(&db, &header, AuthorizerKind::ValidToken).await?;
    let token_type = if authorized.long_lived {
        TokenType::LongLived
    } else {
        TokenType::ShortLived
    };
    Ok(ApiResponse::Ok(ApiAuthStatus {
        token_type,
        title: Some(authorized.token.title),
        created: Some(authorized.token.created),
        expires: Some(authorized.token.expires),
    }))
}

/// Push the session expiration forward by the configured refresh window.
/// The expiration never moves backwards.
#[get("/refresh")]
async fn refresh(db: web::Data<Arc<DbService>>, header: XApiToken) -> ApiResult<ApiRefreshStatus> {
    let authorized = authorize(&db, &header, AuthorizerKind::ShortLivedOnly).await?;
    let refreshed = max(
        authorized.token.expires,
        Utc::now() + Duration::seconds(config().session_refresh_in_seconds),
    );
    let token = db.set_token_expiration(authorized.token, refreshed).await?;
    Ok(ApiResponse::Ok(ApiRefreshStatus {
        title: Some(token.title),
        expires: Some(token.expires),
        new_token: None,
    }))
}
