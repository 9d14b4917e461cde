use qdesk_core::country::CountryOption;
use serde::Deserialize;

/// country entry of the countries service, limited to the requested fields
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub cca2: String,
    pub name: CountryName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

impl From<&CountryRecord> for CountryOption {
    fn from(value: &CountryRecord) -> Self {
        CountryOption::new(&value.cca2, &value.name.common)
    }
}
