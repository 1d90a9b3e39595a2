use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use service_directory::{
    background_task::start_purge_task,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new(&config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!("Failed to set up the directory backend: {}", e);
            std::process::exit(1);
        }
    };

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {} ({:?} layout)",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.landing_variant
    );

    let purge = tokio::spawn(start_purge_task(
        app_state.sessions.clone(),
        config.session_idle_timeout(),
    ));

    let cors_origins = config.cors_origins();
    let server = HttpServer::new({
        let app_state = app_state.clone();
        move || {
            let cors = cors_origins.iter().fold(
                Cors::default().allowed_methods(vec!["GET", "POST", "PUT", "DELETE"]).allow_any_header(),
                |cors, origin| if origin == "*" { cors.allow_any_origin() } else { cors.allowed_origin(origin) },
            );

            App::new()
                .app_data(app_state.clone())
                .wrap(NormalizePath::trim())
                .wrap(cors)
                .wrap(TracingLogger::default())
                .configure(configure_routes)
        }
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    let result = tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    };

    purge.abort();
    app_state.carousel.stop();

    result
}
