#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("invalid birthdate '{value}': {reason}")]
    InvalidBirthdate { value: String, reason: String },
    #[error("invalid country code '{0}', expected an ISO 3166-1 alpha-2 code")]
    InvalidCountryCode(String),
    #[error("country code '{0}' is not in the country reference list")]
    UnknownCountry(String),
}
