use async_trait::async_trait;
use qdesk_core::{
    board::{FlightSource, FlightSourceError},
    flight::RawFlightRecord,
};
use reqwest::Url;

use super::decode_arrivals;
use crate::{
    config::FLIGHT_API_KEY_ENV,
    http_ops::{build_http_client, send_for_text},
    ClientConfigError, FlightSourceConfig,
};

const SERVICE: &str = "flight status";

/// passenger arrivals listing of the airport flight status web service
pub struct FlightStatusClient {
    client: reqwest::Client,
    url: Url,
    service_key: String,
    num_of_rows: Option<u32>,
}

impl FlightStatusClient {
    pub fn new(config: &FlightSourceConfig) -> Result<FlightStatusClient, ClientConfigError> {
        let endpoint = &config.endpoint;
        let url = endpoint.url(SERVICE)?;
        let service_key = endpoint
            .require_api_key(SERVICE, FLIGHT_API_KEY_ENV)?
            .to_string();
        if service_key.contains('%') {
            log::warn!(
                "the {SERVICE} api key looks percent-encoded; the decoded service key is expected"
            );
        }
        let client = build_http_client(SERVICE, endpoint)?;
        Ok(FlightStatusClient {
            client,
            url,
            service_key,
            num_of_rows: config.num_of_rows,
        })
    }

    /// the service key is percent-encoded here, so it is configured in its
    /// decoded form.
    fn request(&self) -> reqwest::RequestBuilder {
        let request = self.client.get(self.url.clone()).query(&[
            ("serviceKey", self.service_key.as_str()),
            ("type", "json"),
        ]);
        match self.num_of_rows {
            Some(rows) => request.query(&[("numOfRows", rows)]),
            None => request,
        }
    }
}

#[async_trait]
impl FlightSource for FlightStatusClient {
    async fn fetch_arrivals(&self) -> Result<Vec<RawFlightRecord>, FlightSourceError> {
        log::debug!("requesting arrivals from {} (serviceKey redacted)", self.url);
        let body = send_for_text(SERVICE, self.request()).await?;
        let records = decode_arrivals(&body)?;
        log::debug!("flight status service returned {} records", records.len());
        Ok(records)
    }
}
