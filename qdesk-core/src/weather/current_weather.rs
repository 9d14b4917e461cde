use serde::{Deserialize, Serialize};

/// current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub place: String,
    pub description: String,
    /// rounded to whole degrees Celsius
    pub temperature_c: i32,
    pub humidity: Option<u8>,
}

impl CurrentWeather {
    pub fn new(place: &str, description: &str, temperature_c: f64, humidity: Option<u8>) -> Self {
        Self {
            place: place.to_string(),
            description: description.to_string(),
            temperature_c: temperature_c.round() as i32,
            humidity,
        }
    }
}

impl std::fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}°C",
            self.place, self.description, self.temperature_c
        )?;
        if let Some(h) = self.humidity {
            write!(f, ", humidity {h}%")?;
        }
        Ok(())
    }
}
