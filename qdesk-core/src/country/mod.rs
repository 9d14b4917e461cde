mod country_index;
mod country_option;

pub use country_index::CountryIndex;
pub use country_option::CountryOption;
