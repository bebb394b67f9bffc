//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
///
/// `/posts/search` is registered before `/posts/{id}` so the literal segment
/// wins over the parameter.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("/search", web::get().to(posts::search))
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::soft_delete))
                    .route("/{id}/force", web::delete().to(posts::force_delete))
                    .route("/{id}/restore", web::patch().to(posts::restore)),
            )
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me))
                    .route("/logout", web::post().to(auth::logout)),
            ),
    );
}
