use std::collections::BTreeMap;

use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::version::Version;

/// Version report for the service and its main dependencies. The
/// dependency versions are captured at build time by `build.rs`.
#[get("/version")]
async fn version() -> ApiResult<Version> {
    let mut internal_dependencies = BTreeMap::new();
    internal_dependencies.insert("my-model", my_model::VERSION.to_string());
    internal_dependencies.insert("migration", migration::VERSION.to_string());

    let mut external_dependencies = BTreeMap::new();
    external_dependencies.insert(
        "actix-web",
        env!("MY_REST_API_ACTIX_WEB_VERSION").to_string(),
    );
    external_dependencies.insert("sea-orm", env!("MY_REST_API_SEA_ORM_VERSION").to_string());

    Ok(ApiResponse::Ok(Version {
        version: env!("CARGO_PKG_VERSION").to_string(),
        rust_version: env!("MY_REST_API_RUSTC_VERSION").to_string(),
        internal_dependencies,
        external_dependencies,
    }))
}
