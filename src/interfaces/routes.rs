use actix_web::web;

mod json_error;
mod pages;
mod providers;
mod sessions;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::config_routes);

    cfg.service(
        web::scope("/api/v1")
            .configure(providers::config_routes)
            .configure(sessions::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
