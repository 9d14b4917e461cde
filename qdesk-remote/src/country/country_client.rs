use qdesk_core::country::{CountryIndex, CountryOption};
use reqwest::Url;

use super::CountryRecord;
use crate::{
    http_ops::{build_http_client, send_for_json},
    ClientConfigError, EndpointConfig, RemoteApiError,
};

const SERVICE: &str = "countries";

pub struct CountryClient {
    client: reqwest::Client,
    url: Url,
}

impl CountryClient {
    pub fn new(config: &EndpointConfig) -> Result<CountryClient, ClientConfigError> {
        let url = config.url(SERVICE)?;
        let client = build_http_client(SERVICE, config)?;
        Ok(CountryClient { client, url })
    }

    /// every country known to the service, sorted by label
    pub async fn list(&self) -> Result<CountryIndex, RemoteApiError> {
        log::debug!("requesting country list from {}", self.url);
        let request = self
            .client
            .get(self.url.clone())
            .query(&[("fields", "cca2,name")]);
        let records: Vec<CountryRecord> = send_for_json(SERVICE, request).await?;
        let options = records.iter().map(CountryOption::from).collect();
        Ok(CountryIndex::new(options))
    }
}
