use std::sync::Arc;

use actix_web::{post, web};
use my_model::temporary_token::TemporaryTokenType;

use crate::auth::authorizer::{authorize, AuthorizerKind};
use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::account::{
    PasswordResetRequest, PasswordResetResult, PasswordResetToken, PasswordResetTokenRequest,
    SecondFactorChangeRequest, SecondFactorChangeResult, SecondFactorChangeToken,
    SecondFactorChangeTokenRequest,
};
use crate::types::auth::AuthenticationStatus;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::{hash_password, new_second_factor_secret};

const RESET_PASSWORD_SCOPE: AuthorizerKind = AuthorizerKind::Scope {
    scope: "account.reset_password",
    allow_short_lived: true,
};
const UPDATE_SECOND_FACTOR_SCOPE: AuthorizerKind = AuthorizerKind::Scope {
    scope: "account.update_second_factor",
    allow_short_lived: true,
};

/// Prove the current credentials and receive a temporary token that
/// authorizes a password reset.
#[post("/request_password_reset_token")]
async fn request_password_reset_token(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<PasswordResetTokenRequest>,
) -> ApiResult<PasswordResetToken> {
    let authorized = authorize(&db, &header, RESET_PASSWORD_SCOPE).await?;
    let body = body.into_inner();
    db.verify_credentials(
        &authorized.user.username,
        &body.password,
        body.second_factor.as_deref(),
    )
    .await?
    .ok_or(AppError::Unauthorized)?;

    let token = db
        .create_temporary_token(authorized.user.id, TemporaryTokenType::PasswordReset)
        .await?;
    Ok(ApiResponse::Ok(PasswordResetToken { token: token.token }))
}

/// Consume a password-reset token and store the new password hash.
#[post("/password_reset")]
async fn password_reset(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<PasswordResetRequest>,
) -> ApiResult<PasswordResetResult> {
    let authorized = authorize(&db, &header, RESET_PASSWORD_SCOPE).await?;
    let body = body.into_inner();
    let reset_token = db
        .get_temporary_token(
            authorized.user.id,
            &body.reset_token,
            TemporaryTokenType::PasswordReset,
        )
        .await?
        .ok_or(AppError::Unauthorized)?;

    let hash = hash_password(&body.new_password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    db.set_user_password(authorized.user, hash).await?;
    db.delete_temporary_token(reset_token.id).await?;
    Ok(ApiResponse::Ok(PasswordResetResult {
        status: AuthenticationStatus::Success,
    }))
}

/// Prove the current credentials and receive a temporary token that
/// authorizes enabling or disabling the second factor.
#[post("/request_change_second_factor_token")]
async fn request_change_second_factor_token(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<SecondFactorChangeTokenRequest>,
) -> ApiResult<SecondFactorChangeToken> {
    let authorized = authorize(&db, &header, UPDATE_SECOND_FACTOR_SCOPE).await?;
    let body = body.into_inner();
    if body.new_status == authorized.user.second_factor.is_some() {
        return Err(AppError::Validation(
            "Second factor status already matches the requested status".to_string(),
        ));
    }
    db.verify_credentials(
        &authorized.user.username,
        &body.password,
        body.second_factor.as_deref(),
    )
    .await?
    .ok_or(AppError::Unauthorized)?;

    let token_type = if body.new_status {
        TemporaryTokenType::EnableSecondFactor
    } else {
        TemporaryTokenType::DisableSecondFactor
    };
    let token = db
        .create_temporary_token(authorized.user.id, token_type)
        .await?;
    Ok(ApiResponse::Ok(SecondFactorChangeToken { token: token.token }))
}

/// Consume a second-factor-change token. Enabling generates and returns
/// a fresh TOTP secret.
#[post("/change_second_factor")]
async fn change_second_factor(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<SecondFactorChangeRequest>,
) -> ApiResult<SecondFactorChangeResult> {
    let authorized = authorize(&db, &header, UPDATE_SECOND_FACTOR_SCOPE).await?;
    let body = body.into_inner();
    let token_type = if body.new_status {
        TemporaryTokenType::EnableSecondFactor
    } else {
        TemporaryTokenType::DisableSecondFactor
    };
    let reset_token = db
        .get_temporary_token(authorized.user.id, &body.reset_token, token_type)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let secret = body.new_status.then(new_second_factor_secret);
    db.set_user_second_factor(authorized.user, secret.clone())
        .await?;
    db.delete_temporary_token(reset_token.id).await?;
    Ok(ApiResponse::Ok(SecondFactorChangeResult {
        status: AuthenticationStatus::Success,
        secret,
    }))
}
