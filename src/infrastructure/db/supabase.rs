use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::errors::BackendError;

/// Characters PostgREST treats as syntax inside `or=(...)` lists.
const RESERVED: [char; 7] = [',', '.', ':', '(', ')', '"', '\\'];

/// Read-only handle on the hosted PostgREST endpoint.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: Url,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, BackendError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_url = base.join("rest/v1/")?;

        let mut key = HeaderValue::from_str(anon_key)
            .map_err(|e| BackendError::Request(format!("invalid access key: {e}")))?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {anon_key}"))
            .map_err(|e| BackendError::Request(format!("invalid access key: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(SupabaseClient { http, rest_url })
    }

    /// Starts a read against `table`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }
}

/// A single `GET /rest/v1/<table>` built up from PostgREST filters.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
}

impl TableQuery<'_> {
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// Rows where any of `columns` contains `needle`, ignoring case.
    pub fn ilike_any(mut self, columns: &[&str], needle: &str) -> Self {
        let pattern = quote_if_reserved(&format!("%{needle}%"));
        let conditions = columns
            .iter()
            .map(|column| format!("{column}.ilike.{pattern}"))
            .collect::<Vec<_>>()
            .join(",");
        self.params.push(("or".into(), format!("({conditions})")));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.into(), format!("eq.{value}")));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.params.push(("limit".into(), limit.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, BackendError> {
        let url = self.client.rest_url.join(&self.table)?;
        debug!(table = %self.table, params = ?self.params, "Querying backend");

        let response = self
            .client
            .http
            .get(url)
            .query(&self.params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let rows = response.json::<Vec<T>>().await?;
        Ok(rows)
    }
}

fn quote_if_reserved(value: &str) -> String {
    if value.contains(RESERVED) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new("https://example.supabase.co", "anon", Duration::from_secs(1))
            .expect("client")
    }

    #[test]
    fn rest_url_keeps_base_path() {
        let client = SupabaseClient::new("http://localhost:54321/proxy", "anon", Duration::from_secs(1))
            .expect("client");
        assert_eq!(client.rest_url().as_str(), "http://localhost:54321/proxy/rest/v1/");
    }

    #[test]
    fn ilike_any_builds_or_list() {
        let client = client();
        let query = client
            .from("service_providers")
            .ilike_any(&["full_name", "profession"], "elect");

        assert_eq!(
            query.params(),
            &[("or".to_string(), "(full_name.ilike.%elect%,profession.ilike.%elect%)".to_string())]
        );
    }

    #[test]
    fn reserved_characters_are_quoted() {
        assert_eq!(quote_if_reserved("%st. mary%"), "\"%st. mary%\"");
        assert_eq!(quote_if_reserved("%a\"b%"), "\"%a\\\"b%\"");
        assert_eq!(quote_if_reserved("%plumb%"), "%plumb%");
    }
}
