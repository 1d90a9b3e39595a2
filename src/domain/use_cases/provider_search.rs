use std::{collections::BTreeSet, sync::Arc};

use crate::{
    entities::{
        search::ProviderFilter,
        service_provider::{ProviderProfile, ServiceProvider},
    },
    errors::AppError,
    repositories::provider::ProviderRepository,
    use_cases::{contact::ContactIntent, suggestions::filter_suggestions},
    utils::valid_uuid::valid_uuid,
};

pub struct ProviderSearchHandler<R>
where
    R: ProviderRepository,
{
    pub provider_repo: Arc<R>,
}

impl<R> ProviderSearchHandler<R>
where
    R: ProviderRepository,
{
    pub fn new(provider_repo: Arc<R>) -> Self {
        ProviderSearchHandler { provider_repo }
    }

    /// Runs one search. An empty filter short-circuits without a backend call.
    pub async fn search_providers(&self, filter: &ProviderFilter) -> Result<Vec<ServiceProvider>, AppError> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        self.provider_repo.search_providers(filter).await
    }

    /// Distinct professions, sorted. A failed fetch is logged and yields an empty list.
    pub async fn list_professions(&self) -> Vec<String> {
        fetch_professions(self.provider_repo.as_ref()).await
    }

    /// Profession suggestions for `term`; empty when the term is empty.
    pub async fn suggestions(&self, term: &str) -> Vec<String> {
        if term.is_empty() {
            return Vec::new();
        }
        let professions = self.list_professions().await;
        filter_suggestions(&professions, term).unwrap_or_default()
    }

    /// Retrieves a single provider for the profile overlay
    pub async fn get_profile(&self, id: &str) -> Result<ProviderProfile, AppError> {
        let provider = self.get_provider(id).await?;
        Ok(ProviderProfile::from(&provider))
    }

    /// Call intent for a provider's phone number
    pub async fn contact(&self, id: &str) -> Result<ContactIntent, AppError> {
        let provider = self.get_provider(id).await?;
        Ok(ContactIntent::call(&provider.phone))
    }

    pub async fn check_backend(&self) -> Result<(), AppError> {
        self.provider_repo.check_connection().await
    }

    async fn get_provider(&self, id: &str) -> Result<ServiceProvider, AppError> {
        let valid_id = valid_uuid(id)?;

        self.provider_repo
            .get_provider_by_id(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Service provider not found".to_string()),
                _ => e,
            })
    }
}

pub(crate) async fn fetch_professions<R>(repo: &R) -> Vec<String>
where
    R: ProviderRepository + ?Sized,
{
    match repo.list_professions().await {
        Ok(raw) => raw.into_iter().collect::<BTreeSet<_>>().into_iter().collect(),
        Err(e) => {
            tracing::error!("Error fetching professions: {}", e);
            Vec::new()
        }
    }
}
