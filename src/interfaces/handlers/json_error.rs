use actix_web::{http::StatusCode, HttpResponse};

use crate::entities::view::SEARCH_FAILED_MESSAGE;

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// Generic answer for a failed provider search; the cause is only logged.
pub fn search_failed() -> HttpResponse {
    json_error(
        StatusCode::BAD_GATEWAY,
        SEARCH_FAILED_MESSAGE,
        "The provider directory could not be queried",
    )
}
