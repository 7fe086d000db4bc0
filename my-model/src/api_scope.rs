use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A permission unit: a `(module, subject)` pair such as `users.retrieve`.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "api_scope")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub module: String,
    pub subject: String,
}

impl Model {
    /// Render the scope in its canonical `module.subject` form.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module, self.subject)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::api_token_scope::Entity")]
    ApiTokenScope,
}

impl Related<super::api_token_scope::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiTokenScope.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
