use qdesk_remote::{country::CountryClient, ClientConfig};

use super::{render, runtime::block_on, QdeskCliError};

pub fn run_countries(config: &ClientConfig) -> Result<(), QdeskCliError> {
    let client = CountryClient::new(&config.countries)?;
    let countries = block_on(client.list())??;
    println!("{}", render::country_table(&countries));
    log::info!("{} countries", countries.len());
    Ok(())
}
