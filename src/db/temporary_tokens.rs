use chrono::{Duration, Utc};
use my_model::temporary_token::{
    ActiveModel as TempActive, Column, Entity as TemporaryToken, Model as TempModel,
    TemporaryTokenType,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::new_token;

/// Lifetime of a temporary token issued by the account flows.
const TEMPORARY_TOKEN_LIFETIME_SECONDS: i64 = 3600;

impl DbService {
    pub async fn create_temporary_token(
        &self,
        user_id: i32,
        token_type: TemporaryTokenType,
    ) -> Result<TempModel, AppError> {
        let now = Utc::now();
        Ok(TempActive {
            token: Set(new_token()),
            token_type: Set(token_type),
            expires: Set(now + Duration::seconds(TEMPORARY_TOKEN_LIFETIME_SECONDS)),
            user_id: Set(user_id),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Look up an unexpired temporary token of the given type for a user.
    pub async fn get_temporary_token(
        &self,
        user_id: i32,
        token: &str,
        token_type: TemporaryTokenType,
    ) -> Result<Option<TempModel>, AppError> {
        let found = TemporaryToken::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Token.eq(token))
            .filter(Column::TokenType.eq(token_type))
            .one(&self.db)
            .await?;
        Ok(found.filter(|token| token.expires > Utc::now()))
    }

    pub async fn delete_temporary_token(&self, token_id: i32) -> Result<(), AppError> {
        TemporaryToken::delete_by_id(token_id).exec(&self.db).await?;
        Ok(())
    }
}
