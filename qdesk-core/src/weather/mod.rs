mod coordinates;
mod current_weather;

pub use coordinates::Coordinates;
pub use current_weather::CurrentWeather;
