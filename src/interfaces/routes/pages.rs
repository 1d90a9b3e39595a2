use actix_web::web;

use crate::handlers::{home, login, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home::landing_page))
    )
    .service(
        web::resource("/login")
            .route(web::get().to(login::login_page))
            .route(web::post().to(login::submit_login))
    )
    .service(
        web::resource("/health")
            .route(web::get().to(system::health_check))
    );
}
