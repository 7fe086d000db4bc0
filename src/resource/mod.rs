//! The resource engine: generic filtering, sorting, pagination and CRUD
//! plumbing shared by every `/resources/<endpoint>` route.

pub mod filters;
pub mod impls;
pub mod pagination;
pub mod sorting;

use sea_orm::sea_query::SimpleExpr;
use sea_orm::EntityTrait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::error::AppError;

/// Data type of a filterable field; decides which filter operators apply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Int,
    Str,
}

/// Scopes needed per CRUD operation; `None` disables the operation.
pub struct NeededScopes {
    pub create: Option<&'static str>,
    pub retrieve: Option<&'static str>,
    pub update: Option<&'static str>,
    pub delete: Option<&'static str>,
}

/// An entity that is exposed through the `/resources` API.
pub trait ApiResource: EntityTrait {
    const NEEDED_SCOPES: NeededScopes;
    const FILTER_FIELDS: &'static [&'static str];
    const SORT_FIELDS: &'static [&'static str];

    /// The serialized representation; sensitive fields are omitted here.
    type Output: Serialize + From<Self::Model> + Send;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)>;
    fn id_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> i32;

    /// Visibility restriction for the authorized user; `None` means the
    /// user sees all rows.
    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr>;
}

/// An [`ApiResource`] that also supports create and update.
pub trait WritableResource: ApiResource {
    type Input: DeserializeOwned + Clone + Send;

    fn validate(input: &Self::Input) -> Result<(), AppError>;
    fn create_model(input: Self::Input, user: &my_model::user::Model) -> Self::ActiveModel;
    fn update_model(existing: Self::Model, input: Self::Input) -> Self::ActiveModel;
}
