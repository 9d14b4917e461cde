pub mod config;
pub mod country;
pub mod flight;
mod http_ops;
pub mod records;
mod remote_api_error;
pub mod weather;

pub use config::{ClientConfig, ClientConfigError, EndpointConfig, FlightSourceConfig};
pub use remote_api_error::RemoteApiError;
