use qdesk_core::declaration::Declaration;
use reqwest::Url;

use crate::{
    http_ops::{build_http_client, send_for_json, send_for_text},
    ClientConfigError, EndpointConfig, RemoteApiError,
};

const SERVICE: &str = "traveler records";

/// crud access to submitted traveler declarations. records are addressed by
/// the opaque id assigned by the service on creation.
pub struct TravelerRecordClient {
    client: reqwest::Client,
    url: Url,
}

impl TravelerRecordClient {
    pub fn new(config: &EndpointConfig) -> Result<TravelerRecordClient, ClientConfigError> {
        let url = config.url(SERVICE)?;
        let client = build_http_client(SERVICE, config)?;
        Ok(TravelerRecordClient { client, url })
    }

    pub async fn list(&self) -> Result<Vec<Declaration>, RemoteApiError> {
        log::debug!("listing traveler records from {}", self.url);
        send_for_json(SERVICE, self.client.get(self.url.clone())).await
    }

    pub async fn get(&self, id: &str) -> Result<Declaration, RemoteApiError> {
        let url = self.record_url(id)?;
        log::debug!("reading traveler record {url}");
        send_for_json(SERVICE, self.client.get(url)).await
    }

    /// submits a new record, returning it as stored (with its assigned id)
    pub async fn create(&self, declaration: &Declaration) -> Result<Declaration, RemoteApiError> {
        log::debug!("creating traveler record at {}", self.url);
        send_for_json(SERVICE, self.client.post(self.url.clone()).json(declaration)).await
    }

    pub async fn update(
        &self,
        id: &str,
        declaration: &Declaration,
    ) -> Result<Declaration, RemoteApiError> {
        let url = self.record_url(id)?;
        log::debug!("updating traveler record {url}");
        send_for_json(SERVICE, self.client.put(url).json(declaration)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), RemoteApiError> {
        let url = self.record_url(id)?;
        log::debug!("deleting traveler record {url}");
        send_for_text(SERVICE, self.client.delete(url)).await?;
        Ok(())
    }

    /// `{base_url}/{id}` with the id percent-encoded as a single segment
    fn record_url(&self, id: &str) -> Result<Url, RemoteApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RemoteApiError::InvalidRequest {
                service: SERVICE,
                message: String::from("record id must not be empty"),
            });
        }
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteApiError::InvalidRequest {
                service: SERVICE,
                message: format!("base url {} cannot hold a record id", self.url),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}
