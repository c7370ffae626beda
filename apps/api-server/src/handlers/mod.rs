//! HTTP handlers and route configuration.

mod authors;
mod comments;
mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::{json_error, path_error};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PathConfig::default().error_handler(path_error))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/authors")
                    .route("", web::get().to(authors::list_authors))
                    .route("", web::post().to(authors::create_author))
                    .route("/{id}", web::get().to(authors::get_author)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{post_id}/comments", web::post().to(comments::create_comment)),
            ),
    );
}
