use async_trait::async_trait;

use crate::flight::RawFlightRecord;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightSourceError {
    #[error("flight status request failed: {0}")]
    Network(String),
    #[error("flight status service returned result code {code}: {message}")]
    Protocol { code: String, message: String },
    #[error("flight status response is malformed: {0}")]
    Malformed(String),
}

/// provider of the current arrival listing, typically the flight status web
/// service. implementations report the raw listing, including codeshare copies.
#[async_trait]
pub trait FlightSource {
    async fn fetch_arrivals(&self) -> Result<Vec<RawFlightRecord>, FlightSourceError>;
}
