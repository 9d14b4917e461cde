use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientConfigError {
    #[error("failure reading client configuration: {0}")]
    ConfigurationError(String),
    #[error("{service} endpoint has an invalid base url '{url}': {reason}")]
    InvalidBaseUrl {
        service: &'static str,
        url: String,
        reason: String,
    },
    #[error("{service} endpoint timeout must be greater than zero")]
    InvalidTimeout { service: &'static str },
    #[error("{service} endpoint requires an api key, set api_key in the configuration file or {env_var}")]
    MissingApiKey {
        service: &'static str,
        env_var: &'static str,
    },
    #[error("failure building {service} http client: {source}")]
    HttpClientError {
        service: &'static str,
        source: reqwest::Error,
    },
}
