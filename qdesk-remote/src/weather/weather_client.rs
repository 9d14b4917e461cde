use qdesk_core::weather::{Coordinates, CurrentWeather};
use reqwest::Url;

use super::WeatherResponse;
use crate::{
    config::WEATHER_API_KEY_ENV,
    http_ops::{build_http_client, send_for_json},
    ClientConfigError, EndpointConfig, RemoteApiError,
};

const SERVICE: &str = "weather";

pub struct WeatherClient {
    client: reqwest::Client,
    url: Url,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &EndpointConfig) -> Result<WeatherClient, ClientConfigError> {
        let url = config.url(SERVICE)?;
        let api_key = config
            .require_api_key(SERVICE, WEATHER_API_KEY_ENV)?
            .to_string();
        let client = build_http_client(SERVICE, config)?;
        Ok(WeatherClient {
            client,
            url,
            api_key,
        })
    }

    /// current conditions at `location` in metric units
    pub async fn current(&self, location: &Coordinates) -> Result<CurrentWeather, RemoteApiError> {
        log::debug!("requesting current weather at {location} from {}", self.url);
        let response: WeatherResponse = send_for_json(SERVICE, self.request(location)).await?;
        Ok(CurrentWeather::from(response))
    }

    fn request(&self, location: &Coordinates) -> reqwest::RequestBuilder {
        let lat = location.lat().to_string();
        let lon = location.lon().to_string();
        self.client.get(self.url.clone()).query(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ])
    }
}
