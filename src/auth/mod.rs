//! Token extraction and authorization for the `X-API-Token` header.

pub mod authorizer;

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::types::error::AppError;

pub const TOKEN_HEADER: &str = "X-API-Token";

/// The raw `X-API-Token` header value, if any. Validation happens in
/// [`authorizer::authorize`].
pub struct XApiToken(pub Option<String>);

impl FromRequest for XApiToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        ready(Ok(XApiToken(token)))
    }
}
