pub mod account;
pub mod auth;
pub mod error;
pub mod resource;
pub mod response;
pub mod version;
