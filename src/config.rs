//! Client configuration
//!
//! Where the content API lives and how to talk to it. Loadable from a
//! YAML file or from the environment; the project id is the one field
//! with no usable default.

use crate::error::{Error, Result};
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable for the API base URL
pub const ENV_API_URL: &str = "PAGEKIT_API_URL";
/// Environment variable for the bearer token
pub const ENV_API_TOKEN: &str = "PAGEKIT_API_TOKEN";
/// Environment variable for the project id
pub const ENV_PROJECT_ID: &str = "PAGEKIT_PROJECT_ID";
/// Environment variable for the default locale
pub const ENV_LOCALE: &str = "PAGEKIT_LOCALE";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a content API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the content API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Optional bearer token sent as `Authorization: Bearer <token>`
    #[serde(default)]
    pub api_token: Option<String>,

    /// Project id sent as the `project-id` header on every request
    pub project_id: String,

    /// Locale used when a query does not specify one
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// HTTP client tuning
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl ClientConfig {
    /// Create a config with the given endpoint and project id
    pub fn new(api_url: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: None,
            project_id: project_id.into(),
            default_locale: default_locale(),
            http: HttpSettings::default(),
        }
    }

    /// Set the bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the default locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| Error::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config is usable
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api_url)?;
        if self.project_id.is_empty() {
            return Err(Error::missing_field("project_id"));
        }
        Ok(())
    }

    // Lookup is injected so tests don't touch process-global state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let project_id = lookup(ENV_PROJECT_ID)
            .none_if_empty()
            .ok_or_else(|| Error::missing_field("project_id"))?;

        let config = Self {
            api_url: lookup(ENV_API_URL)
                .none_if_empty()
                .unwrap_or_else(default_api_url),
            api_token: lookup(ENV_API_TOKEN).none_if_empty(),
            project_id,
            default_locale: lookup(ENV_LOCALE)
                .none_if_empty()
                .unwrap_or_else(default_locale),
            http: HttpSettings::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client tuning carried by the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in seconds
    #[serde(default = "default_max_backoff_secs")]
    pub max_backoff_secs: u64,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Token bucket refill rate (requests per second)
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Token bucket burst size
    #[serde(default = "default_burst_size")]
    pub burst_size: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_secs() -> u64 {
    60
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst_size() -> u32 {
    10
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_secs: default_max_backoff_secs(),
            backoff: BackoffType::default(),
            requests_per_second: default_requests_per_second(),
            burst_size: default_burst_size(),
        }
    }
}
