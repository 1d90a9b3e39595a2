use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::view::{ProfessionRequest, SearchTermRequest, SuggestionRequest},
    errors::AppError,
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[instrument(skip(state))]
pub async fn create_session(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let session = state.sessions.create().await?;
    Ok(HttpResponse::Created().json(session.view.snapshot()))
}

#[instrument(skip(state))]
pub async fn get_session(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    Ok(HttpResponse::Ok().json(session.view.snapshot()))
}

/// Updates the search text; the search itself runs after the debounce delay.
#[instrument(skip(state, data))]
pub async fn set_search_term(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SearchTermRequest>,
) -> Result<impl Responder, AppError> {
    data.validate()?;

    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    session.view.set_search_term(data.into_inner().term);

    Ok(HttpResponse::Accepted().json(session.view.snapshot()))
}

#[instrument(skip(state, data))]
pub async fn accept_suggestion(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SuggestionRequest>,
) -> Result<impl Responder, AppError> {
    data.validate()?;

    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    session.view.accept_suggestion(data.into_inner().suggestion);

    Ok(HttpResponse::Accepted().json(session.view.snapshot()))
}

#[instrument(skip(state))]
pub async fn dismiss_suggestions(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    session.view.dismiss_suggestions();

    Ok(HttpResponse::Ok().json(session.view.snapshot()))
}

#[instrument(skip(state, data))]
pub async fn toggle_profession(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ProfessionRequest>,
) -> Result<impl Responder, AppError> {
    data.validate()?;

    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    session.view.toggle_profession(&data.profession);

    Ok(HttpResponse::Accepted().json(session.view.snapshot()))
}

#[instrument(skip(state))]
pub async fn select_provider(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (session_id, provider_id) = path.into_inner();

    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    let profile = session.view.select_provider(&valid_uuid(&provider_id)?)?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(state))]
pub async fn dismiss_profile(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    session.view.dismiss_profile();

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn contact_provider(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (session_id, provider_id) = path.into_inner();

    let session = state.sessions.get(&valid_uuid(&session_id)?)?;
    let intent = session.view.contact(&valid_uuid(&provider_id)?)?;

    Ok(HttpResponse::Ok().json(intent))
}

#[instrument(skip(state))]
pub async fn close_session(
    session_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.sessions.remove(&valid_uuid(&session_id)?)?;
    Ok(HttpResponse::NoContent().finish())
}
