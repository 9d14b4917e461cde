//! serde helpers for the yyyy-mm-dd stamps on declarations. the record service
//! stores empty strings for unset dates and may hand back full timestamps.
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub const DECLARATION_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn deserialize_optional_naive_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: Option<String> = Option::deserialize(deserializer)?;
    let date_str = match date_str.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };
    // "2024-10-14T08:00:00.000Z" carries the date in its first 10 characters
    let date_part = date_str.get(..10).unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, DECLARATION_DATE_FORMAT)
        .map(Some)
        .map_err(|e| D::Error::custom(format!("Invalid date format '{date_str}': {e}")))
}

pub fn serialize_optional_naive_date<S>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format(DECLARATION_DATE_FORMAT).to_string()),
        None => serializer.serialize_str(""),
    }
}
