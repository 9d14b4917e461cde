//! request helpers shared by the service clients.
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{ClientConfigError, EndpointConfig, RemoteApiError};

pub(crate) fn build_http_client(
    service: &'static str,
    endpoint: &EndpointConfig,
) -> Result<reqwest::Client, ClientConfigError> {
    reqwest::Client::builder()
        .timeout(endpoint.timeout())
        .user_agent(concat!("qdesk/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ClientConfigError::HttpClientError { service, source: e })
}

/// sends the request and returns the body of a 2xx response. request urls may
/// carry api keys so they are stripped from transport errors.
pub(crate) async fn send_for_text(
    service: &'static str,
    request: RequestBuilder,
) -> Result<String, RemoteApiError> {
    let response = request.send().await.map_err(|e| RemoteApiError::Request {
        service,
        source: e.without_url(),
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteApiError::Status { service, status });
    }
    response.text().await.map_err(|e| RemoteApiError::Request {
        service,
        source: e.without_url(),
    })
}

pub(crate) async fn send_for_json<T>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, RemoteApiError>
where
    T: DeserializeOwned,
{
    let body = send_for_text(service, request).await?;
    decode_json(service, &body)
}

pub(crate) fn decode_json<T>(service: &'static str, body: &str) -> Result<T, RemoteApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| RemoteApiError::Decode {
        service,
        message: e.to_string(),
    })
}
