use qdesk_core::weather::Coordinates;
use qdesk_remote::{weather::WeatherClient, ClientConfig};

use super::{runtime::block_on, QdeskCliError};

pub fn run_weather(config: &ClientConfig, location: &Coordinates) -> Result<(), QdeskCliError> {
    let client = WeatherClient::new(&config.weather)?;
    let weather = block_on(client.current(location))??;
    println!("{weather}");
    Ok(())
}
