use actix_web::{http::header, web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::{
        search::{ProviderFilter, SearchParams, SearchResponse, SuggestionParams},
        service_provider::ProviderCard,
    },
    errors::AppError,
    handlers::json_error::search_failed,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_professions(state: web::Data<AppState>) -> impl Responder {
    let professions = state.provider_handler.list_professions().await;
    HttpResponse::Ok().json(professions)
}

#[instrument(skip(state, query))]
pub async fn get_suggestions(
    state: web::Data<AppState>,
    query: web::Query<SuggestionParams>,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let term = query.q.as_deref().unwrap_or_default();
    let suggestions = state.provider_handler.suggestions(term).await;

    Ok(HttpResponse::Ok().json(suggestions))
}

#[instrument(skip(state, query))]
pub async fn search_providers(
    state: web::Data<AppState>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let filter = ProviderFilter::from(query.into_inner());

    match state.provider_handler.search_providers(&filter).await {
        Ok(providers) => {
            let cards = providers.iter().map(ProviderCard::from).collect::<Vec<_>>();
            Ok(HttpResponse::Ok().json(SearchResponse::from(cards)))
        }
        Err(e) => {
            tracing::error!("Error searching service providers: {}", e);
            Ok(search_failed())
        }
    }
}

#[instrument(skip(state))]
pub async fn get_provider_profile(
    provider_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.provider_handler.get_profile(&provider_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Hands the browser a `tel:` redirect.
#[instrument(skip(state))]
pub async fn contact_provider(
    provider_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let intent = state.provider_handler.contact(&provider_id).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, intent.uri))
        .finish())
}
