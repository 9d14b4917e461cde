mod weather_client;
mod weather_response;

pub use weather_client::WeatherClient;
pub use weather_response::WeatherResponse;
