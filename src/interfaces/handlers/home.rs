use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        search::ProviderFilter,
        service_provider::{ProviderCard, ProviderProfile},
        view::SEARCH_FAILED_MESSAGE,
    },
    errors::AppError,
    pages::{render_landing, LandingPage},
    use_cases::suggestions::filter_suggestions,
    AppState,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LandingParams {
    #[validate(length(max = 100, message = "Search text is too long"))]
    pub q: Option<String>,

    #[validate(length(max = 100, message = "Profession is too long"))]
    pub profession: Option<String>,

    /// Provider whose profile overlay is open.
    pub profile: Option<String>,
}

/// Renders the landing page for the filters in the query string.
#[instrument(skip(state, query))]
pub async fn landing_page(
    state: web::Data<AppState>,
    query: web::Query<LandingParams>,
) -> HttpResponse {
    let professions = state.provider_handler.list_professions().await;

    if let Err(errors) = query.validate() {
        let notice = match AppError::from(errors) {
            AppError::ValidationError(field_errors) => field_errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(" "),
            other => other.to_string(),
        };

        let html = render_landing(&LandingPage {
            variant: state.variant,
            background: state.carousel.current(),
            search_term: "",
            selected_profession: None,
            professions: &professions,
            suggestions: &[],
            providers: &[],
            error: Some(&notice),
            profile: None,
        });
        return HttpResponse::BadRequest()
            .insert_header(ContentType::html())
            .body(html);
    }
    let params = query.into_inner();

    let search_term = params.q.unwrap_or_default();
    let filter = ProviderFilter::new(search_term.clone(), params.profession);

    let suggestions = filter_suggestions(&professions, &search_term).unwrap_or_default();

    let (providers, error) = match state.provider_handler.search_providers(&filter).await {
        Ok(providers) => (providers, None),
        Err(e) => {
            tracing::error!("Error searching service providers: {}", e);
            (Vec::new(), Some(SEARCH_FAILED_MESSAGE))
        }
    };

    let profile = params
        .profile
        .and_then(|id| Uuid::parse_str(&id).ok())
        .and_then(|id| providers.iter().find(|p| p.id == id))
        .map(ProviderProfile::from);

    let cards = providers.iter().map(ProviderCard::from).collect::<Vec<_>>();

    let html = render_landing(&LandingPage {
        variant: state.variant,
        background: state.carousel.current(),
        search_term: &search_term,
        selected_profession: filter.profession.as_deref(),
        professions: &professions,
        suggestions: &suggestions,
        providers: &cards,
        error,
        profile: profile.as_ref(),
    });

    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(html)
}
