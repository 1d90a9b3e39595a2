use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the search endpoints and the landing page.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 100, message = "Search text is too long"))]
    pub q: Option<String>,

    #[validate(length(max = 100, message = "Profession is too long"))]
    pub profession: Option<String>,
}

impl From<SearchParams> for ProviderFilter {
    fn from(params: SearchParams) -> Self {
        ProviderFilter::new(params.q.unwrap_or_default(), params.profession)
    }
}

/// Optional predicates of one provider search.
///
/// `term` matches `full_name`, `profession` or `specialization` as a
/// case-insensitive substring; `profession` is an exact match. Both are
/// combined conjunctively when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderFilter {
    pub term: Option<String>,
    pub profession: Option<String>,
}

impl ProviderFilter {
    pub fn new(term: impl Into<String>, profession: Option<String>) -> Self {
        let term = term.into();
        ProviderFilter {
            term: (!term.is_empty()).then_some(term),
            profession: profession.filter(|p| !p.is_empty()),
        }
    }

    /// An empty filter never reaches the backend.
    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.profession.is_none()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionParams {
    #[validate(length(max = 100, message = "Search text is too long"))]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub providers: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> From<Vec<T>> for SearchResponse<T> {
    fn from(providers: Vec<T>) -> Self {
        SearchResponse {
            count: providers.len(),
            providers,
        }
    }
}
