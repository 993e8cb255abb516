//! HTTP handlers and route configuration.

mod admin;
mod generate;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::cors::preflight;
use crate::middleware::error::AppError;

fn preflight_route() -> actix_web::Route {
    web::method(actix_web::http::Method::OPTIONS).to(preflight)
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(err.to_string(), Some("body")).into()
    }))
    .service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{slug}", web::get().to(posts::get_post))
            // Generation
            .service(
                web::resource("/generate-blog")
                    .route(web::post().to(generate::generate_blog))
                    .route(preflight_route()),
            )
            // Admin routes
            .service(
                web::scope("/admin")
                    .service(
                        web::resource("/posts")
                            .route(web::post().to(admin::create_post))
                            .route(preflight_route()),
                    )
                    .service(
                        web::resource("/access")
                            .route(web::get().to(admin::access))
                            .route(preflight_route()),
                    )
                    .service(
                        web::resource("/stats")
                            .route(web::get().to(admin::stats))
                            .route(preflight_route()),
                    ),
            ),
    );
}
