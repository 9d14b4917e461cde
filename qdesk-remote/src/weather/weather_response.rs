use qdesk_core::weather::CurrentWeather;
use serde::Deserialize;

/// subset of the current-weather response read by qdesk
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
}

impl From<WeatherResponse> for CurrentWeather {
    fn from(value: WeatherResponse) -> Self {
        let description = value
            .weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or_default();
        CurrentWeather::new(&value.name, description, value.main.temp, value.main.humidity)
    }
}
