use chrono::{DateTime, Duration, Utc};
use my_model::api_token::{
    ActiveModel as TokenActive, Column, Entity as ApiToken, Model as TokenModel,
};
use my_model::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::config::config;
use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::new_token;

impl DbService {
    /// Look up a token by its string, together with its owner.
    pub async fn get_api_token(
        &self,
        token: &str,
    ) -> Result<Option<(TokenModel, UserModel)>, AppError> {
        let found = ApiToken::find()
            .filter(Column::Token.eq(token))
            .find_also_related(my_model::user::Entity)
            .one(&self.db)
            .await?;
        match found {
            Some((token, Some(user))) => Ok(Some((token, user))),
            _ => Ok(None),
        }
    }

    /// Scopes attached to a token, in `module.subject` form.
    pub async fn get_token_scopes(&self, token_id: i32) -> Result<Vec<String>, AppError> {
        let links = my_model::api_token_scope::Entity::find()
            .filter(my_model::api_token_scope::Column::ApiTokenId.eq(token_id))
            .find_also_related(my_model::api_scope::Entity)
            .all(&self.db)
            .await?;
        Ok(links
            .into_iter()
            .filter_map(|(_, scope)| scope)
            .map(|scope| scope.full_name())
            .collect())
    }

    /// Create a short-lived session token for a fresh login.
    pub async fn create_session_token(
        &self,
        user: &UserModel,
        title: Option<String>,
    ) -> Result<TokenModel, AppError> {
        let now = Utc::now();
        let title =
            title.unwrap_or_else(|| format!("Session from {}", now.format("%Y-%m-%d %H:%M:%S")));
        let expires = now + Duration::seconds(config().session_timeout_in_seconds);
        Ok(TokenActive {
            title: Set(title),
            token: Set(new_token()),
            enabled: Set(true),
            expires: Set(expires),
            api_client_id: Set(None),
            user_id: Set(user.id),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn delete_api_token(&self, token_id: i32) -> Result<(), AppError> {
        ApiToken::delete_by_id(token_id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn set_token_expiration(
        &self,
        token: TokenModel,
        expires: DateTime<Utc>,
    ) -> Result<TokenModel, AppError> {
        let mut am: TokenActive = token.into();
        am.expires = Set(expires);
        am.updated = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }
}
