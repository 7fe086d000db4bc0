use std::sync::Arc;

use actix_web::{delete, get, web, HttpRequest};
use my_model::api_token::Entity as ApiToken;

use super::RetrieveQuery;
use crate::auth::XApiToken;
use crate::db::DbService;
use crate::types::resource::{ApiTokenResource, DeletionResult, RetrieveResult};
use crate::types::response::ApiResult;

// Tokens are issued by the authentication flows; the resources API only
// lists and revokes them.

#[get("")]
async fn retrieve(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    request: HttpRequest,
    query: web::Query<RetrieveQuery>,
) -> ApiResult<RetrieveResult<ApiTokenResource>> {
    super::retrieve::<ApiToken>(&db, &header, &request, query.into_inner()).await
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<DbService>>,
    header: XApiToken,
    path: web::Path<i32>,
) -> ApiResult<DeletionResult> {
    super::delete::<ApiToken>(&db, &header, path.into_inner()).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(retrieve).service(remove);
}
