use actix_web::web;

use crate::handlers::sessions;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sessions")
            .service(
                web::resource("")
                    .route(web::post().to(sessions::create_session))
            )
            .service(
                web::resource("/{session_id}")
                    .route(web::get().to(sessions::get_session))
                    .route(web::delete().to(sessions::close_session))
            )
            .service(
                web::resource("/{session_id}/search")
                    .route(web::put().to(sessions::set_search_term))
            )
            .service(
                web::resource("/{session_id}/suggestions")
                    .route(web::post().to(sessions::accept_suggestion))
                    .route(web::delete().to(sessions::dismiss_suggestions))
            )
            .service(
                web::resource("/{session_id}/profession")
                    .route(web::post().to(sessions::toggle_profession))
            )
            .service(
                web::resource("/{session_id}/selection")
                    .route(web::delete().to(sessions::dismiss_profile))
            )
            .service(
                web::resource("/{session_id}/selection/{provider_id}")
                    .route(web::put().to(sessions::select_provider))
            )
            .service(
                web::resource("/{session_id}/contact/{provider_id}")
                    .route(web::get().to(sessions::contact_provider))
            )
    );
}
