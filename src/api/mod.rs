pub mod health;
pub mod swagger;
pub mod users;

use actix_web::{middleware::NormalizePath, web};

/// Registers the user routes and the health check.
///
/// Trailing slashes are trimmed inside this scope only, so the Swagger UI
/// keeps its `/swagger-ui/` path. Register it before calling this.
/// The bare `/getUser`, `/update` and `/deleteUser` patterns exist so a missing
/// id is answered by the handler instead of a 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(NormalizePath::trim())
            .route("/health", web::get().to(health::health_check))
            .route("/createUser", web::post().to(users::create_user))
            .service(
                web::resource(["/getUser/{id}", "/getUser"])
                    .route(web::get().to(users::get_user)),
            )
            .service(
                web::resource(["/update/{id}", "/update"])
                    .route(web::post().to(users::update_user)),
            )
            .service(
                web::resource(["/deleteUser/{id}", "/deleteUser"])
                    .route(web::get().to(users::delete_user)),
            ),
    );
}
