use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ClientConfigError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// location and credentials of one remote service
#[derive(Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl EndpointConfig {
    pub fn new(base_url: &str) -> EndpointConfig {
        EndpointConfig {
            base_url: base_url.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> EndpointConfig {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn url(&self, service: &'static str) -> Result<Url, ClientConfigError> {
        Url::parse(self.base_url.trim()).map_err(|e| ClientConfigError::InvalidBaseUrl {
            service,
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }

    /// the api key, failing when unset or blank
    pub fn require_api_key(
        &self,
        service: &'static str,
        env_var: &'static str,
    ) -> Result<&str, ClientConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ClientConfigError::MissingApiKey { service, env_var })
    }

    pub fn validate(&self, service: &'static str) -> Result<(), ClientConfigError> {
        self.url(service)?;
        if self.timeout_secs == 0 {
            return Err(ClientConfigError::InvalidTimeout { service });
        }
        Ok(())
    }
}

// api keys stay out of debug logs
impl std::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// flight status service endpoint. `num_of_rows` is passed through as the
/// service's page length when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSourceConfig {
    #[serde(flatten)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub num_of_rows: Option<u32>,
}

impl From<EndpointConfig> for FlightSourceConfig {
    fn from(endpoint: EndpointConfig) -> Self {
        FlightSourceConfig {
            endpoint,
            num_of_rows: None,
        }
    }
}
