use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::service_provider::{ProviderCard, ProviderProfile};

/// How the landing page presents its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationVariant {
    /// Elevated cards with a "View Profile" action and click-to-open overlay.
    #[default]
    Detailed,
    /// Plain cards, no overlay.
    Compact,
}

impl PresentationVariant {
    pub fn has_profile_overlay(&self) -> bool {
        matches!(self, PresentationVariant::Detailed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundImage {
    pub url: &'static str,
    pub description: &'static str,
}

pub const BACKGROUND_IMAGES: [BackgroundImage; 3] = [
    BackgroundImage {
        url: "/images/worker8.jpg",
        description: "Diverse group of skilled Indian professionals",
    },
    BackgroundImage {
        url: "/images/worker7.jpg",
        description: "Tools and equipment",
    },
    BackgroundImage {
        url: "/images/worker2.jpg",
        description: "Community working together",
    },
];

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search service providers";
pub const NO_RESULTS_MESSAGE: &str =
    "No service providers found. Try a different search term or category.";

/// Point-in-time copy of a landing view, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct LandingSnapshot {
    pub session_id: Uuid,
    pub variant: PresentationVariant,
    pub background: BackgroundImage,
    pub search_term: String,
    pub selected_profession: Option<String>,
    pub professions: Vec<String>,
    pub show_suggestions: bool,
    pub suggestions: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub providers: Vec<ProviderCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_provider: Option<ProviderProfile>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchTermRequest {
    #[validate(length(max = 100, message = "Search text is too long"))]
    pub term: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[validate(length(min = 1, max = 100, message = "Suggestion must be 1-100 characters"))]
    pub suggestion: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfessionRequest {
    #[validate(length(min = 1, max = 100, message = "Profession must be 1-100 characters"))]
    pub profession: String,
}
