pub mod api_tokens;
pub mod resources;
pub mod service;
pub mod temporary_tokens;
pub mod users;

pub use service::DbService;
