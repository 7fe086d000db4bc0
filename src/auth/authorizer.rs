use chrono::Utc;
use my_model::api_token::Model as TokenModel;
use my_model::user::{Model as UserModel, UserRole};

use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::error::AppError;

/// What a route demands from the supplied token.
pub enum AuthorizerKind {
    /// Any valid token: existing, enabled, unexpired, non-service owner.
    ValidToken,
    /// Only short-lived session tokens.
    ShortLivedOnly,
    /// A long-lived token must carry the named scope; a short-lived
    /// token passes iff `allow_short_lived`.
    Scope {
        scope: &'static str,
        allow_short_lived: bool,
    },
}

/// The outcome of a successful authorization.
pub struct Authorized {
    pub user: UserModel,
    pub token: TokenModel,
    pub scopes: Vec<String>,
    pub long_lived: bool,
}

/// Validate the header token against the database. A token is
/// long-lived when it is bound to an API client or carries scopes.
async fn validate(db: &DbService, header: &XApiToken) -> Result<Option<Authorized>, AppError> {
    let Some(token) = &header.0 else {
        return Ok(None);
    };
    let Some((token, user)) = db.get_api_token(token).await? else {
        return Ok(None);
    };
    if !token.enabled || token.expires <= Utc::now() || user.role == UserRole::Service {
        return Ok(None);
    }
    let scopes = db.get_token_scopes(token.id).await?;
    let long_lived = token.api_client_id.is_some() || !scopes.is_empty();
    Ok(Some(Authorized {
        user,
        token,
        scopes,
        long_lived,
    }))
}

/// Authorize a request. Failures are reported as `Unauthorized` (401)
/// without distinguishing the reason.
pub async fn authorize(
    db: &DbService,
    header: &XApiToken,
    kind: AuthorizerKind,
) -> Result<Authorized, AppError> {
    let authorized = validate(db, header).await?.ok_or(AppError::Unauthorized)?;

    match kind {
        AuthorizerKind::ValidToken => Ok(authorized),
        AuthorizerKind::ShortLivedOnly => {
            if authorized.long_lived {
                return Err(AppError::Unauthorized);
            }
            Ok(authorized)
        }
        AuthorizerKind::Scope {
            scope,
            allow_short_lived,
        } => {
            if authorized.long_lived {
                if !authorized.scopes.iter().any(|s| s == scope) {
                    return Err(AppError::Unauthorized);
                }
            } else if !allow_short_lived {
                return Err(AppError::Unauthorized);
            }
            Ok(authorized)
        }
    }
}

/// Login requires that the request does NOT already carry a valid token.
pub async fn require_invalid_token(db: &DbService, header: &XApiToken) -> Result<(), AppError> {
    if validate(db, header).await?.is_some() {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
