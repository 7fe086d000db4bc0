use serde::Serialize;
use std::collections::BTreeMap;

/// Version information for the REST API, as reported by `GET /version`.
#[derive(Serialize)]
pub struct Version {
    pub version: String,
    pub rust_version: String,
    pub internal_dependencies: BTreeMap<&'static str, String>,
    pub external_dependencies: BTreeMap<&'static str, String>,
}
