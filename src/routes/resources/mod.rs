//! Generic handlers behind the `/resources/<endpoint>` routes. The
//! per-resource modules are thin wrappers that pin the entity type.

pub mod api_clients;
pub mod api_tokens;
pub mod tags;
pub mod user_settings;
pub mod users;

use actix_web::HttpRequest;
use sea_orm::sea_query::Condition;
use sea_orm::{ActiveModelBehavior, ColumnTrait, IntoActiveModel};
use serde::Deserialize;

use crate::auth::authorizer::{authorize, Authorized, AuthorizerKind};
use crate::auth::XApiToken;
use crate::config::config;
use crate::db::DbService;
use crate::resource::filters::parse_filters;
use crate::resource::pagination::PaginationGenerator;
use crate::resource::sorting::parse_sort;
use crate::resource::{ApiResource, WritableResource};
use crate::types::error::AppError;
use crate::types::resource::{DeletionResult, RetrieveResult};
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct RetrieveQuery {
    pub filter: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub sort: Option<String>,
}

async fn authorize_operation(
    db: &DbService,
    header: &XApiToken,
    scope: Option<&'static str>,
) -> Result<Authorized, AppError> {
    let scope = scope.ok_or(AppError::Unauthorized)?;
    authorize(
        db,
        header,
        AuthorizerKind::Scope {
            scope,
            allow_short_lived: true,
        },
    )
    .await
}

/// The rows of a resource visible to the user, narrowed by filters.
fn visibility<E: ApiResource>(
    user: &my_model::user::Model,
    filter: Option<&str>,
) -> Result<Condition, AppError> {
    let mut condition = parse_filters::<E>(filter)?;
    if let Some(ownership) = E::ownership(user) {
        condition = condition.add(ownership);
    }
    Ok(condition)
}

pub(crate) async fn retrieve<E>(
    db: &DbService,
    header: &XApiToken,
    request: &HttpRequest,
    query: RetrieveQuery,
) -> ApiResult<RetrieveResult<E::Output>>
where
    E: ApiResource,
    E::Model: Sync,
{
    let authorized = authorize_operation(db, header, E::NEEDED_SCOPES.retrieve).await?;

    let condition = visibility::<E>(&authorized.user, query.filter.as_deref())?;
    let sort = parse_sort::<E>(query.sort.as_deref())?;

    let total_items = db.count_resources::<E>(condition.clone()).await?;
    let pagination = PaginationGenerator::new(
        query.page_size.unwrap_or(config().default_page_size),
        query.page.unwrap_or(1),
        total_items,
    );
    pagination.validate()?;

    let models = db
        .retrieve_resources::<E>(condition, sort, pagination.offset(), pagination.page_size)
        .await?;
    let link = pagination.link_header(&request.uri().to_string());
    Ok(ApiResponse::OkWithLink(
        RetrieveResult {
            pagination: pagination.result(),
            resources: models.into_iter().map(E::Output::from).collect(),
        },
        link,
    ))
}

pub(crate) async fn create<E>(
    db: &DbService,
    header: &XApiToken,
    inputs: Vec<E::Input>,
) -> ApiResult<Vec<E::Output>>
where
    E: WritableResource,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    let authorized = authorize_operation(db, header, E::NEEDED_SCOPES.create).await?;

    for input in &inputs {
        E::validate(input)?;
    }
    let models = inputs
        .into_iter()
        .map(|input| E::create_model(input, &authorized.user))
        .collect();
    let created = db.create_resources::<E>(models).await?;
    Ok(ApiResponse::Ok(
        created.into_iter().map(E::Output::from).collect(),
    ))
}

pub(crate) async fn update<E>(
    db: &DbService,
    header: &XApiToken,
    id: i32,
    input: E::Input,
) -> ApiResult<Vec<E::Output>>
where
    E: WritableResource,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    let authorized = authorize_operation(db, header, E::NEEDED_SCOPES.update).await?;
    E::validate(&input)?;

    let condition = visibility::<E>(&authorized.user, None)?.add(E::id_column().eq(id));
    let existing = db
        .get_resource::<E>(condition)
        .await?
        .ok_or(AppError::NotFound)?;
    let updated = db
        .update_resource::<E>(E::update_model(existing, input))
        .await?;
    Ok(ApiResponse::Ok(vec![E::Output::from(updated)]))
}

pub(crate) async fn delete<E: ApiResource>(
    db: &DbService,
    header: &XApiToken,
    id: i32,
) -> ApiResult<DeletionResult> {
    let authorized = authorize_operation(db, header, E::NEEDED_SCOPES.delete).await?;

    let condition = visibility::<E>(&authorized.user, None)?.add(E::id_column().eq(id));
    let deleted = db.delete_resources::<E>(condition).await?;
    Ok(ApiResponse::Ok(DeletionResult { deleted }))
}
