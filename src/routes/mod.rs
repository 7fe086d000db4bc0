use actix_web::web;

pub mod account;
pub mod auth;
pub mod resources;
pub mod version;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(version::version);
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::logout)
            .service(auth::status)
            .service(auth::refresh),
    );
    cfg.service(
        web::scope("/account")
            .service(account::request_password_reset_token)
            .service(account::password_reset)
            .service(account::request_change_second_factor_token)
            .service(account::change_second_factor),
    );
    cfg.service(
        web::scope("/resources")
            .service(web::scope("/users").configure(resources::users::configure))
            .service(web::scope("/tags").configure(resources::tags::configure))
            .service(web::scope("/api_clients").configure(resources::api_clients::configure))
            .service(web::scope("/api_tokens").configure(resources::api_tokens::configure))
            .service(web::scope("/user_settings").configure(resources::user_settings::configure)),
    );
}
