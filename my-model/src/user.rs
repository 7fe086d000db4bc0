use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role of a user account. Stored as an integer; roles partition users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(try_from = "i32", into = "i32")]
pub enum UserRole {
    #[sea_orm(num_value = 1)]
    Root,
    #[sea_orm(num_value = 2)]
    User,
    #[sea_orm(num_value = 3)]
    Service,
}

impl From<UserRole> for i32 {
    fn from(role: UserRole) -> i32 {
        match role {
            UserRole::Root => 1,
            UserRole::User => 2,
            UserRole::Service => 3,
        }
    }
}

impl TryFrom<i32> for UserRole {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(UserRole::Root),
            2 => Ok(UserRole::User),
            3 => Ok(UserRole::Service),
            other => Err(format!("invalid user role: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fullname: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
    pub second_factor: Option<String>,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag::Entity")]
    Tag,
    #[sea_orm(has_many = "super::api_client::Entity")]
    ApiClient,
    #[sea_orm(has_many = "super::api_token::Entity")]
    ApiToken,
    #[sea_orm(has_many = "super::user_setting::Entity")]
    UserSetting,
    #[sea_orm(has_many = "super::temporary_token::Entity")]
    TemporaryToken,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl Related<super::api_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiClient.def()
    }
}

impl Related<super::api_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiToken.def()
    }
}

impl Related<super::user_setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSetting.def()
    }
}

impl Related<super::temporary_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemporaryToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
