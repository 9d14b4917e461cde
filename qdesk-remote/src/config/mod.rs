mod client_config;
mod client_config_error;
mod endpoint_config;

pub use client_config::{ClientConfig, FLIGHT_API_KEY_ENV, WEATHER_API_KEY_ENV};
pub use client_config_error::ClientConfigError;
pub use endpoint_config::{EndpointConfig, FlightSourceConfig, DEFAULT_TIMEOUT_SECS};
