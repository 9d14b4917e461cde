#[derive(thiserror::Error, Debug)]
pub enum RemoteApiError {
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        source: reqwest::Error,
    },
    #[error("{service} responded with HTTP {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{service} response could not be decoded: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
    #[error("invalid {service} request: {message}")]
    InvalidRequest {
        service: &'static str,
        message: String,
    },
}

impl From<RemoteApiError> for qdesk_core::board::FlightSourceError {
    fn from(value: RemoteApiError) -> Self {
        use qdesk_core::board::FlightSourceError;
        match value {
            RemoteApiError::Decode { message, .. } => FlightSourceError::Malformed(message),
            other => FlightSourceError::Network(other.to_string()),
        }
    }
}
