//! HTTP handlers and route configuration.

mod health;
mod marketplace;


use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/marketplace").service(
                    web::resource("/posts")
                        .route(web::get().to(marketplace::list_posts))
                        .route(web::post().to(marketplace::create_post)),
                ),
            ),
    );
}

/// JSON extractor settings shared by every route.
///
/// Browser `fetch` calls often send JSON as `text/plain`, so the body is
/// parsed whatever the Content-Type.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(json_error_handler)
}
