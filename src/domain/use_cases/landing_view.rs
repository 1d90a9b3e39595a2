use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    entities::{
        search::ProviderFilter,
        service_provider::{ProviderCard, ProviderProfile, ServiceProvider},
        view::{LandingSnapshot, PresentationVariant, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE},
    },
    errors::AppError,
    repositories::provider::ProviderRepository,
    settings::AppConfig,
    use_cases::{
        carousel::BackgroundCarousel,
        contact::ContactIntent,
        debounce::Debouncer,
        provider_search::fetch_professions,
        suggestions::filter_suggestions,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub debounce: Duration,
    pub carousel_interval: Duration,
    pub variant: PresentationVariant,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            debounce: Duration::from_millis(300),
            carousel_interval: Duration::from_secs(5),
            variant: PresentationVariant::Detailed,
        }
    }
}

impl From<&AppConfig> for ViewOptions {
    fn from(config: &AppConfig) -> Self {
        ViewOptions {
            debounce: config.search_debounce(),
            carousel_interval: config.carousel_interval(),
            variant: config.landing_variant,
        }
    }
}

#[derive(Debug, Default)]
struct ViewState {
    search_term: String,
    selected_profession: Option<String>,
    professions: Vec<String>,
    suggestions: Vec<String>,
    show_suggestions: bool,
    providers: Vec<ServiceProvider>,
    loading: bool,
    error: Option<String>,
    selected_provider: Option<ServiceProvider>,
    /// Issuance number of the latest search, empty ones included.
    issued: u64,
}

impl ViewState {
    fn filter(&self) -> ProviderFilter {
        ProviderFilter::new(self.search_term.clone(), self.selected_profession.clone())
    }

    fn refresh_suggestions(&mut self) {
        match filter_suggestions(&self.professions, &self.search_term) {
            Some(suggestions) => {
                self.suggestions = suggestions;
                self.show_suggestions = true;
            }
            None => self.show_suggestions = false,
        }
    }

    /// Issues a new search number. An empty filter resolves on the spot.
    fn begin_search(&mut self) -> Option<(u64, ProviderFilter)> {
        self.issued += 1;
        let filter = self.filter();

        if filter.is_empty() {
            self.providers.clear();
            self.loading = false;
            self.error = None;
            return None;
        }

        self.loading = true;
        self.error = None;
        Some((self.issued, filter))
    }
}

struct Shared<R> {
    repo: Arc<R>,
    state: Mutex<ViewState>,
}

impl<R> Shared<R>
where
    R: ProviderRepository + 'static,
{
    async fn run_search(&self, generation: u64, filter: ProviderFilter) {
        let result = self.repo.search_providers(&filter).await;

        let mut state = self.state.lock();
        if generation != state.issued {
            debug!(generation, latest = state.issued, "Discarding stale search response");
            return;
        }

        match result {
            Ok(providers) => state.providers = providers,
            Err(e) => {
                error!("Error searching service providers: {}", e);
                state.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        state.loading = false;
    }
}

/// The landing page's state and the work it schedules.
///
/// Every change to the search text or the selected profession schedules a
/// debounced search. Responses are applied only if no other search was issued
/// after them. The debounce timer and the background carousel are owned by the
/// view and stop when it is torn down or dropped.
pub struct LandingView<R>
where
    R: ProviderRepository + 'static,
{
    id: Uuid,
    variant: PresentationVariant,
    shared: Arc<Shared<R>>,
    debouncer: Debouncer,
    carousel: BackgroundCarousel,
}

impl<R> LandingView<R>
where
    R: ProviderRepository + 'static,
{
    /// Must be called from within a tokio runtime.
    pub fn new(repo: Arc<R>, options: ViewOptions) -> Self {
        LandingView {
            id: Uuid::new_v4(),
            variant: options.variant,
            shared: Arc::new(Shared {
                repo,
                state: Mutex::new(ViewState::default()),
            }),
            debouncer: Debouncer::new(options.debounce),
            carousel: BackgroundCarousel::start(options.carousel_interval),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn variant(&self) -> PresentationVariant {
        self.variant
    }

    /// Loads the profession list. Call once after construction.
    pub async fn initialize(&self) {
        let professions = fetch_professions(self.shared.repo.as_ref()).await;

        let mut state = self.shared.state.lock();
        state.professions = professions;
        state.refresh_suggestions();
    }

    /// Updates the search text. An unchanged text schedules no search.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        {
            let mut state = self.shared.state.lock();
            if state.search_term == term {
                return;
            }
            state.search_term = term;
            state.refresh_suggestions();
        }
        self.schedule_search();
    }

    /// Takes a suggestion as the new search text and closes the list.
    pub fn accept_suggestion(&self, suggestion: impl Into<String>) {
        let suggestion = suggestion.into();
        let changed = {
            let mut state = self.shared.state.lock();
            let changed = state.search_term != suggestion;
            if changed {
                state.search_term = suggestion;
                state.refresh_suggestions();
            }
            state.show_suggestions = false;
            changed
        };
        if changed {
            self.schedule_search();
        }
    }

    pub fn dismiss_suggestions(&self) {
        self.shared.state.lock().show_suggestions = false;
    }

    /// Selects `profession`, or clears the selection if it was already selected.
    /// Returns the selection in effect afterwards.
    pub fn toggle_profession(&self, profession: &str) -> Option<String> {
        let selected = {
            let mut state = self.shared.state.lock();
            state.selected_profession = match state.selected_profession.take() {
                Some(current) if current == profession => None,
                _ => Some(profession.to_string()),
            };
            state.selected_profession.clone()
        };
        self.schedule_search();
        selected
    }

    /// Opens the profile overlay for a provider in the current results.
    pub fn select_provider(&self, provider_id: &Uuid) -> Result<ProviderProfile, AppError> {
        if !self.variant.has_profile_overlay() {
            return Err(AppError::InvalidInput(
                "Profile overlay is not available in the compact layout".into(),
            ));
        }

        let mut state = self.shared.state.lock();
        let provider = find_provider(&state.providers, provider_id)?.clone();
        let profile = ProviderProfile::from(&provider);
        state.selected_provider = Some(provider);
        Ok(profile)
    }

    pub fn dismiss_profile(&self) {
        self.shared.state.lock().selected_provider = None;
    }

    /// Call intent for a listed provider. Never touches the overlay selection.
    pub fn contact(&self, provider_id: &Uuid) -> Result<ContactIntent, AppError> {
        let state = self.shared.state.lock();
        let provider = find_provider(&state.providers, provider_id)?;
        Ok(ContactIntent::call(&provider.phone))
    }

    pub fn search_term(&self) -> String {
        self.shared.state.lock().search_term.clone()
    }

    pub fn selected_profession(&self) -> Option<String> {
        self.shared.state.lock().selected_profession.clone()
    }

    pub fn providers(&self) -> Vec<ServiceProvider> {
        self.shared.state.lock().providers.clone()
    }

    pub fn snapshot(&self) -> LandingSnapshot {
        let state = self.shared.state.lock();
        let filtering = !state.search_term.is_empty() || state.selected_profession.is_some();
        let empty = !state.loading && state.error.is_none() && state.providers.is_empty();

        LandingSnapshot {
            session_id: self.id,
            variant: self.variant,
            background: self.carousel.current(),
            search_term: state.search_term.clone(),
            selected_profession: state.selected_profession.clone(),
            professions: state.professions.clone(),
            show_suggestions: state.show_suggestions && !state.suggestions.is_empty(),
            suggestions: if state.show_suggestions { state.suggestions.clone() } else { Vec::new() },
            loading: state.loading,
            error: state.error.clone(),
            providers: state.providers.iter().map(ProviderCard::from).collect(),
            empty_message: (filtering && empty).then_some(NO_RESULTS_MESSAGE),
            selected_provider: state.selected_provider.as_ref().map(ProviderProfile::from),
        }
    }

    /// Stops the pending debounce timer and the carousel.
    pub fn teardown(&self) {
        self.debouncer.cancel();
        self.carousel.stop();
    }

    fn schedule_search(&self) {
        {
            let mut state = self.shared.state.lock();
            if state.filter().is_empty() {
                state.begin_search();
                drop(state);
                self.debouncer.cancel();
                return;
            }
        }

        let shared = self.shared.clone();
        self.debouncer.schedule(async move {
            // Re-read at fire time: the filter may have changed since scheduling.
            let issued = shared.state.lock().begin_search();
            if let Some((generation, filter)) = issued {
                shared.run_search(generation, filter).await;
            }
        });
    }
}

fn find_provider<'a>(providers: &'a [ServiceProvider], id: &Uuid) -> Result<&'a ServiceProvider, AppError> {
    providers
        .iter()
        .find(|provider| &provider.id == id)
        .ok_or_else(|| AppError::NotFound("Service provider is not in the current results".into()))
}
