use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::supabase::SupabaseClient,
    entities::{search::ProviderFilter, service_provider::{ProfessionRow, ServiceProvider}},
    errors::AppError,
    repositories::supabase_repo::SupabaseProviderRepo,
};

pub const PROVIDERS_TABLE: &str = "service_providers";

/// Columns a free-text search looks at.
pub const SEARCHABLE_COLUMNS: [&str; 3] = ["full_name", "profession", "specialization"];

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    /// Rows matching `filter`, in the backend's default order.
    async fn search_providers(&self, filter: &ProviderFilter) -> Result<Vec<ServiceProvider>, AppError>;
    /// The raw `profession` column, one entry per row.
    async fn list_professions(&self) -> Result<Vec<String>, AppError>;
    async fn get_provider_by_id(&self, id: &Uuid) -> Result<ServiceProvider, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SupabaseProviderRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseProviderRepo { client }
    }
}

#[async_trait]
impl ProviderRepository for SupabaseProviderRepo {
    async fn search_providers(&self, filter: &ProviderFilter) -> Result<Vec<ServiceProvider>, AppError> {
        let mut query = self.client.from(PROVIDERS_TABLE).select("*");

        if let Some(term) = &filter.term {
            query = query.ilike_any(&SEARCHABLE_COLUMNS, term);
        }
        if let Some(profession) = &filter.profession {
            query = query.eq("profession", profession);
        }

        let providers = query.fetch::<ServiceProvider>().await?;
        Ok(providers)
    }

    async fn list_professions(&self) -> Result<Vec<String>, AppError> {
        let rows = self
            .client
            .from(PROVIDERS_TABLE)
            .select("profession")
            .fetch::<ProfessionRow>()
            .await?;

        Ok(rows.into_iter().map(|row| row.profession).collect())
    }

    async fn get_provider_by_id(&self, id: &Uuid) -> Result<ServiceProvider, AppError> {
        self.client
            .from(PROVIDERS_TABLE)
            .select("*")
            .eq("id", &id.to_string())
            .limit(1)
            .fetch::<ServiceProvider>()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Service provider not found".into()))
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        self.client
            .from(PROVIDERS_TABLE)
            .select("id")
            .limit(1)
            .fetch::<serde_json::Value>()
            .await?;
        Ok(())
    }
}
