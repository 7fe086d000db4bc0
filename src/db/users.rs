use chrono::Utc;
use my_model::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::{verify_password, verify_totp};

impl DbService {
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Check a password and, when the account has one, the TOTP second
    /// factor. Returns the user only when everything matches.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
        second_factor: Option<&str>,
    ) -> Result<Option<UserModel>, AppError> {
        let Some(user) = self.get_user_by_username(username).await? else {
            return Ok(None);
        };
        if !verify_password(password, &user.password_hash) {
            return Ok(None);
        }
        if let Some(secret) = &user.second_factor {
            let Some(code) = second_factor else {
                return Ok(None);
            };
            if !verify_totp(secret, code) {
                return Ok(None);
            }
        }
        Ok(Some(user))
    }

    pub async fn set_user_password(
        &self,
        user: UserModel,
        password_hash: String,
    ) -> Result<(), AppError> {
        let mut am: UserActive = user.into();
        am.password_hash = Set(password_hash);
        am.updated = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    /// Enable (with the given secret) or disable the second factor.
    pub async fn set_user_second_factor(
        &self,
        user: UserModel,
        second_factor: Option<String>,
    ) -> Result<(), AppError> {
        let mut am: UserActive = user.into();
        am.second_factor = Set(second_factor);
        am.updated = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
