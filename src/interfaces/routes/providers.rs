use actix_web::web;

use crate::handlers::providers;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/professions")
            .route(web::get().to(providers::list_professions))
    )
    .service(
        web::resource("/suggestions")
            .route(web::get().to(providers::get_suggestions))
    )
    .service(
        web::scope("/providers")
            .service(
                web::resource("")
                    .route(web::get().to(providers::search_providers))
            )
            .service(
                web::resource("/{provider_id}")
                    .route(web::get().to(providers::get_provider_profile))
            )
            .service(
                web::resource("/{provider_id}/contact")
                    .route(web::get().to(providers::contact_provider))
            )
    );
}
