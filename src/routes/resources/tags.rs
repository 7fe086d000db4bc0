use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpRequest};
use my_model::tag::Entity as Tag;

use super::RetrieveQuery;
use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::resource::{DeletionResult, RetrieveResult, TagResource, TagResourceIn};
use crate::types::response::ApiResult;

#[get("")]
async fn retrieve(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    request: HttpRequest,
    query: web::Query<RetrieveQuery>,
) -> ApiResult<RetrieveResult<TagResource>> {
    super::retrieve::<Tag>(&db, &header, &request, query.into_inner()).await
}

#[post("")]
async fn create(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<Vec<TagResourceIn>>,
) -> ApiResult<Vec<TagResource>> {
    super::create::<Tag>(&db, &header, body.into_inner()).await
}

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
    body: web::Json<TagResourceIn>,
) -> ApiResult<Vec<TagResource>> {
    super::update::<Tag>(&db, &header, path.into_inner(), body.into_inner()).await
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
) -> ApiResult<DeletionResult> {
    super::delete::<Tag>(&db, &header, path.into_inner()).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(retrieve)
        .service(create)
        .service(update)
        .service(remove);
}
