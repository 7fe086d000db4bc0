use serde::{Deserialize, Serialize};

use crate::types::auth::AuthenticationStatus;

#[derive(Serialize, Deserialize)]
pub struct PasswordResetTokenRequest {
    pub password: String,
    pub second_factor: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PasswordResetToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub new_password: String,
    pub reset_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct PasswordResetResult {
    pub status: AuthenticationStatus,
}

#[derive(Serialize, Deserialize)]
pub struct SecondFactorChangeTokenRequest {
    pub password: String,
    pub second_factor: Option<String>,
    pub new_status: bool,
}

#[derive(Serialize, Deserialize)]
pub struct SecondFactorChangeToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct SecondFactorChangeRequest {
    pub new_status: bool,
    pub reset_token: String,
}

/// Result of a second factor change. When the second factor was enabled,
/// `secret` holds the freshly generated TOTP secret.
#[derive(Serialize, Deserialize)]
pub struct SecondFactorChangeResult {
    pub status: AuthenticationStatus,
    pub secret: Option<String>,
}
