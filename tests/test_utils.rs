use std::{net::TcpListener, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use reqwest::Client;
use serde_json::{json, Value};
use service_directory::{
    entities::{service_provider::ServiceProvider, view::PresentationVariant},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const PROVIDERS_PATH: &str = "/rest/v1/service_providers";

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub backend: MockServer,
    pub state: web::Data<AppState>,
}

pub fn test_config(backend_uri: &str, variant: PresentationVariant) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        worker_count: 1,
        supabase_url: backend_uri.to_string(),
        supabase_anon_key: "test-anon-key".to_string(),
        backend_timeout_secs: 2,
        search_debounce_ms: 50,
        landing_variant: variant,
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(PresentationVariant::Detailed).await
    }

    pub async fn spawn_with(variant: PresentationVariant) -> Self {
        Self::spawn_customized(|config| config.landing_variant = variant).await
    }

    pub async fn spawn_customized(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let backend = MockServer::start().await;
        let mut config = test_config(&backend.uri(), PresentationVariant::Detailed);
        customize(&mut config);

        let state = web::Data::new(AppState::new(&config).expect("Failed to build app state"));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        while client.get(format!("{}/login", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            backend,
            state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn mount_professions(&self, professions: &[&str]) {
        let rows: Vec<Value> = professions.iter().map(|p| json!({ "profession": p })).collect();
        Mock::given(method("GET"))
            .and(path(PROVIDERS_PATH))
            .and(query_param("select", "profession"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.backend)
            .await;
    }

    /// Answers every `select=*` read with `rows`.
    pub async fn mount_providers(&self, rows: &[ServiceProvider]) {
        Mock::given(method("GET"))
            .and(path(PROVIDERS_PATH))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.backend)
            .await;
    }

    pub async fn mount_failing_search(&self) {
        Mock::given(method("GET"))
            .and(path(PROVIDERS_PATH))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&self.backend)
            .await;
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn create_session(&self) -> Value {
        let response = self
            .client
            .post(self.url("/api/v1/sessions"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.unwrap()
    }

    /// Polls a session until it has finished loading.
    pub async fn settled_session(&self, session_id: &str) -> Value {
        tokio::time::sleep(Duration::from_millis(100)).await;
        for _ in 0..50 {
            let snapshot: Value = self
                .get(&format!("/api/v1/sessions/{}", session_id))
                .await
                .json()
                .await
                .unwrap();
            if snapshot["loading"] == false {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("session {} never settled", session_id);
    }
}
