use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};
use url::Url;

use crate::entities::view::PresentationVariant;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub supabase_url: String,

    #[serde(default)]
    pub supabase_anon_key: String,

    #[serde(default = "default_backend_timeout")]
    pub backend_timeout_secs: u64,

    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u64,

    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_secs: u64,

    #[serde(default = "default_session_idle")]
    pub session_idle_minutes: u64,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    #[serde(default)]
    pub landing_variant: PresentationVariant,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Service-Directory".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_backend_timeout() -> u64 {
    10
}
fn default_search_debounce() -> u64 {
    300
}
fn default_carousel_interval() -> u64 {
    5
}
fn default_session_idle() -> u64 {
    30
}
fn default_max_sessions() -> usize {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            backend_timeout_secs: default_backend_timeout(),
            search_debounce_ms: default_search_debounce(),
            carousel_interval_secs: default_carousel_interval(),
            session_idle_minutes: default_session_idle(),
            max_sessions: default_max_sessions(),
            landing_variant: PresentationVariant::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true)
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // The backend credentials have no sensible default
        config.supabase_url = fill_or_env(config.supabase_url, "APP_SUPABASE_URL")?;
        config.supabase_anon_key = fill_or_env(config.supabase_anon_key, "APP_SUPABASE_ANON_KEY")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.supabase_url.trim().is_empty() {
            errors.push("SUPABASE_URL cannot be empty".to_string());
        } else if let Err(e) = Url::parse(&self.supabase_url) {
            errors.push(format!("SUPABASE_URL is not a valid URL: {e}"));
        }
        if self.supabase_anon_key.trim().is_empty() {
            errors.push("SUPABASE_ANON_KEY cannot be empty".to_string());
        }
        if self.search_debounce_ms == 0 {
            errors.push("SEARCH_DEBOUNCE_MS must be greater than zero".to_string());
        }
        if self.max_sessions == 0 {
            errors.push("MAX_SESSIONS must be greater than zero".to_string());
        }
        if self.carousel_interval_secs == 0 {
            errors.push("CAROUSEL_INTERVAL_SECS must be greater than zero".to_string());
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes * 60)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &self.supabase_anon_key.redact())
            .field("backend_timeout_secs", &self.backend_timeout_secs)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("carousel_interval_secs", &self.carousel_interval_secs)
            .field("session_idle_minutes", &self.session_idle_minutes)
            .field("max_sessions", &self.max_sessions)
            .field("landing_variant", &self.landing_variant)
            .finish()
    }
}
