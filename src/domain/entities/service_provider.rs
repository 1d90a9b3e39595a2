use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::use_cases::contact::ContactIntent;

pub const PLACEHOLDER_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1587778082149-bd5b1bf5d3fa?w=800&auto=format&fit=crop&q=60";

/// A row of the `service_providers` table. Read-only on our side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: Uuid,
    pub full_name: String,
    pub profession: String,
    pub experience_years: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub age: i32,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ServiceProvider {
    /// Photo to display, falling back to the shared placeholder.
    pub fn photo(&self) -> &str {
        self.photo_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_PHOTO_URL)
    }

    pub fn icon(&self) -> ServiceIcon {
        ServiceIcon::for_profession(&self.profession)
    }
}

/// Only used to pull the `profession` column out of the table.
#[derive(Debug, Deserialize)]
pub struct ProfessionRow {
    pub profession: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    Zap,
    Droplets,
    Hammer,
    Wrench,
}

impl ServiceIcon {
    pub fn for_profession(profession: &str) -> Self {
        match profession {
            "Electrical Services" => ServiceIcon::Zap,
            "Plumbing" => ServiceIcon::Droplets,
            "Carpentry" => ServiceIcon::Hammer,
            _ => ServiceIcon::Wrench,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Zap => "\u{26A1}",
            ServiceIcon::Droplets => "\u{1F4A7}",
            ServiceIcon::Hammer => "\u{1F528}",
            ServiceIcon::Wrench => "\u{1F527}",
        }
    }
}

/// List entry shown in the results grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderCard {
    pub id: Uuid,
    pub full_name: String,
    pub profession: String,
    pub icon: ServiceIcon,
    pub photo_url: String,
    pub experience_years: i32,
    pub age: i32,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub contact_uri: String,
}

impl From<&ServiceProvider> for ProviderCard {
    fn from(provider: &ServiceProvider) -> Self {
        ProviderCard {
            id: provider.id,
            full_name: provider.full_name.clone(),
            profession: provider.profession.clone(),
            icon: provider.icon(),
            photo_url: provider.photo().to_string(),
            experience_years: provider.experience_years,
            age: provider.age,
            location: provider.location.clone(),
            specialization: provider.specialization.clone(),
            availability: provider.availability.clone(),
            contact_uri: ContactIntent::call(&provider.phone).uri,
        }
    }
}

/// Everything the profile overlay renders for one provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderProfile {
    pub id: Uuid,
    pub full_name: String,
    pub profession: String,
    pub photo_url: String,
    pub experience: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub contact_uri: String,
}

impl From<&ServiceProvider> for ProviderProfile {
    fn from(provider: &ServiceProvider) -> Self {
        ProviderProfile {
            id: provider.id,
            full_name: provider.full_name.clone(),
            profession: provider.profession.clone(),
            photo_url: provider.photo().to_string(),
            experience: format!("{} years of experience", provider.experience_years),
            phone: provider.phone.clone(),
            location: provider.location.clone(),
            specialization: provider
                .specialization
                .as_ref()
                .map(|s| format!("Specializes in {}", s)),
            availability: provider.availability.clone(),
            contact_uri: ContactIntent::call(&provider.phone).uri,
        }
    }
}
