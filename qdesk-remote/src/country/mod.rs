mod country_client;
mod country_record;

pub use country_client::CountryClient;
pub use country_record::CountryRecord;
