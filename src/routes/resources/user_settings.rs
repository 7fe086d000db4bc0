use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpRequest};
use my_model::user_setting::Entity as UserSetting;

use super::RetrieveQuery;
use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::resource::{
    DeletionResult, RetrieveResult, UserSettingResource, UserSettingResourceIn,
};
use crate::types::response::ApiResult;

#[get("")]
async fn retrieve(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    request: HttpRequest,
    query: web::Query<RetrieveQuery>,
) -> ApiResult<RetrieveResult<UserSettingResource>> {
    super::retrieve::<UserSetting>(&db, &header, &request, query.into_inner()).await
}

#[post("")]
async fn create(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    body: web::Json<Vec<UserSettingResourceIn>>,
) -> ApiResult<Vec<UserSettingResource>> {
    super::create::<UserSetting>(&db, &header, body.into_inner()).await
}

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
    body: web::Json<UserSettingResourceIn>,
) -> ApiResult<Vec<UserSettingResource>> {
    super::update::<UserSetting>(&db, &header, path.into_inner(), body.into_inner()).await
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
) -> ApiResult<DeletionResult> {
    super::delete::<UserSetting>(&db, &header, path.into_inner()).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(retrieve)
        .service(create)
        .service(update)
        .service(remove);
}
