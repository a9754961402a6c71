//! HTTP handlers and route configuration.

mod health;
mod post_types;
mod posts;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// Reject malformed bodies with the same field-map shape as invalid ones.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into())
}

/// An id segment that is not an integer cannot name any record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(path = %req.path(), error = %err, "Rejected path parameter");
        AppError::NotFound("Not found".to_string()).into()
    })
}

/// Configure all application routes.
///
/// Paths carry no trailing slash; `NormalizePath::trim` strips it from
/// incoming requests. Verbs not listed on a resource get 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/post")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/post/{id}")
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            )
            .service(
                web::resource("/type")
                    .route(web::get().to(post_types::list_post_types))
                    .route(web::post().to(post_types::create_post_type)),
            )
            .service(
                web::resource("/type/{id}").route(web::delete().to(post_types::delete_post_type)),
            )
            .service(
                web::resource("/user")
                    .route(web::get().to(users::list_users))
                    .route(web::post().to(users::create_user)),
            )
            .service(web::resource("/user/{id}").route(web::delete().to(users::delete_user))),
    );
}
