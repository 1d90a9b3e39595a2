use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, pages, repositories, routes};
pub use infrastructure::{db, utils};

use db::supabase::SupabaseClient;
use entities::view::PresentationVariant;
use errors::BackendError;
use repositories::supabase_repo::SupabaseProviderRepo;
use use_cases::{
    carousel::BackgroundCarousel,
    landing_view::ViewOptions,
    provider_search::ProviderSearchHandler,
    sessions::SessionStore,
};

pub struct AppState {
    pub provider_handler: AppProviderHandler,
    pub sessions: Arc<SessionStore<SupabaseProviderRepo>>,
    pub carousel: BackgroundCarousel,
    pub variant: PresentationVariant,
}

pub type AppProviderHandler = ProviderSearchHandler<SupabaseProviderRepo>;

impl AppState {
    /// Builds the backend client and the shared views. Needs a running tokio runtime.
    pub fn new(config: &settings::AppConfig) -> Result<Self, BackendError> {
        let client = SupabaseClient::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            config.backend_timeout(),
        )?;
        let provider_repo = Arc::new(SupabaseProviderRepo::new(client));
        let options = ViewOptions::from(config);

        Ok(AppState {
            provider_handler: ProviderSearchHandler::new(provider_repo.clone()),
            sessions: Arc::new(SessionStore::new(provider_repo, options, config.max_sessions)),
            carousel: BackgroundCarousel::start(options.carousel_interval),
            variant: options.variant,
        })
    }
}
