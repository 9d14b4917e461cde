#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightParseError {
    #[error("timestamp '{value}' has {len} characters, expected at least 12 (yyyyMMddHHmm)")]
    TimestampTooShort { value: String, len: usize },
    #[error("timestamp '{0}' contains non-ascii characters")]
    TimestampNotAscii(String),
    #[error("timestamp '{0}' does not hold digits at its hour and minute positions")]
    TimestampNotNumeric(String),
}
