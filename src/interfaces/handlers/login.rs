use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{entities::login::LoginForm, errors::AppError, pages::render_login};

const LOGIN_UNAVAILABLE: &str = "Signing in is not available yet.";

pub async fn login_page() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(render_login("", None, &[]))
}

/// Accepts the login form without authenticating anyone.
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit_login(form: web::Form<LoginForm>) -> impl Responder {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        let field_errors = match AppError::from(errors) {
            AppError::ValidationError(field_errors) => field_errors,
            _ => Vec::new(),
        };
        return HttpResponse::BadRequest()
            .insert_header(ContentType::html())
            .body(render_login(&form.email, None, &field_errors));
    }

    tracing::info!("Login submitted");

    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(render_login(&form.email, Some(LOGIN_UNAVAILABLE), &[]))
}
