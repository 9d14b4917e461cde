mod arrivals;
mod countries;
mod qdesk_app;
mod qdesk_cli_error;
pub mod render;
mod runtime;
mod travelers;
mod weather;
mod zones;

pub use qdesk_app::{QdeskApp, QdeskOperation, TravelersOperation};
pub use qdesk_cli_error::QdeskCliError;
