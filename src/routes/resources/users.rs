use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpRequest};
use my_model::user::Entity as User;

use super::RetrieveQuery;
use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::resource::{DeletionResult, RetrieveResult, UserResource, UserResourceIn};
use crate::types::response::ApiResult;

#[get("")]
async fn retrieve(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    request: HttpRequest,
    query: web::Query<RetrieveQuery>,
) -> ApiResult<RetrieveResult<UserResource>> {
    super::retrieve::<User>(&db, &header, &request, query.into_inner()).await
}

#[post("")]
async fn create(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<Vec<UserResourceIn>>,
) -> ApiResult<Vec<UserResource>> {
    super::create::<User>(&db, &header, body.into_inner()).await
}

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
    body: web::Json<UserResourceIn>,
) -> ApiResult<Vec<UserResource>> {
    super::update::<User>(&db, &header, path.into_inner(), body.into_inner()).await
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
) -> ApiResult<DeletionResult> {
    super::delete::<User>(&db, &header, path.into_inner()).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(retrieve)
        .service(create)
        .service(update)
        .service(remove);
}
