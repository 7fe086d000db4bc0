use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table linking API tokens to API scopes.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "api_token_scope")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub api_token_id: i32,
    pub api_scope_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::api_token::Entity",
        from = "Column::ApiTokenId",
        to = "super::api_token::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApiToken,
    #[sea_orm(
        belongs_to = "super::api_scope::Entity",
        from = "Column::ApiScopeId",
        to = "super::api_scope::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApiScope,
}

impl Related<super::api_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiToken.def()
    }
}

impl Related<super::api_scope::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiScope.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
