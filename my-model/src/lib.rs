//! Entity definitions for the my-rest-api service.
//!
//! Every user-scoped table carries a `user_id` foreign key; the service
//! layers its ownership rules on top of these relations.

pub mod api_client;
pub mod api_scope;
pub mod api_token;
pub mod api_token_scope;
pub mod tag;
pub mod temporary_token;
pub mod user;
pub mod user_setting;

/// Crate version, reported by the `/version` endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
