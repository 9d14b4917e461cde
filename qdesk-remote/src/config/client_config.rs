use serde::{Deserialize, Serialize};

use super::{ClientConfigError, EndpointConfig, FlightSourceConfig};

pub const FLIGHT_API_KEY_ENV: &str = "QDESK_FLIGHT_API_KEY";
pub const WEATHER_API_KEY_ENV: &str = "QDESK_WEATHER_API_KEY";

const FLIGHT_STATUS_URL: &str =
    "http://apis.data.go.kr/B551177/StatusOfPassengerFlightsDSOdp/getPassengerArrivalsDSOdp";
const TRAVELER_RECORDS_URL: &str = "https://670c91777e5a228ec1d0b2ca.mockapi.io/api/healthInfo";
const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

/// endpoints of every remote service used by qdesk. sections missing from a
/// configuration file fall back to the public service defaults, which carry
/// no api keys. the flight `api_key` is the decoded service key of the data
/// portal, not its percent-encoded form, since requests encode it.
///
/// ```toml
/// [flight]
/// base_url = "http://apis.data.go.kr/B551177/StatusOfPassengerFlightsDSOdp/getPassengerArrivalsDSOdp"
/// api_key = "..."
/// num_of_rows = 100
///
/// [weather]
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// api_key = "..."
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub flight: FlightSourceConfig,
    pub records: EndpointConfig,
    pub weather: EndpointConfig,
    pub countries: EndpointConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            flight: FlightSourceConfig::from(EndpointConfig::new(FLIGHT_STATUS_URL)),
            records: EndpointConfig::new(TRAVELER_RECORDS_URL),
            weather: EndpointConfig::new(WEATHER_URL),
            countries: EndpointConfig::new(COUNTRIES_URL),
        }
    }
}

impl TryFrom<&String> for ClientConfig {
    type Error = ClientConfigError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f).map_err(|e| {
            ClientConfigError::ConfigurationError(format!("failure reading {f}: {e}"))
        })?;
        if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                ClientConfigError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&s).map_err(|e| {
                ClientConfigError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ClientConfigError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

impl ClientConfig {
    /// reads the configuration file when given, otherwise the defaults, then
    /// applies api keys from the environment and validates every endpoint.
    pub fn load(configuration_file: Option<&String>) -> Result<ClientConfig, ClientConfigError> {
        let conf = match configuration_file {
            None => ClientConfig::default(),
            Some(f) => {
                log::info!("reading qdesk client configuration from {f}");
                ClientConfig::try_from(f)?
            }
        };
        let conf = conf.with_api_keys_from(|var| std::env::var(var).ok());
        conf.validate()?;
        Ok(conf)
    }

    /// overrides api keys with values found by `lookup` under
    /// [FLIGHT_API_KEY_ENV] and [WEATHER_API_KEY_ENV].
    pub fn with_api_keys_from<F>(mut self, lookup: F) -> ClientConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(FLIGHT_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            log::debug!("flight status api key taken from {FLIGHT_API_KEY_ENV}");
            self.flight.endpoint.api_key = Some(key);
        }
        if let Some(key) = lookup(WEATHER_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            log::debug!("weather api key taken from {WEATHER_API_KEY_ENV}");
            self.weather.api_key = Some(key);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ClientConfigError> {
        self.flight.endpoint.validate("flight status")?;
        self.records.validate("traveler records")?;
        self.weather.validate("weather")?;
        self.countries.validate("countries")?;
        Ok(())
    }
}
