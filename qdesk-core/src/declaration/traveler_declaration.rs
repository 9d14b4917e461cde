use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_codec::{deserialize_optional_naive_date, serialize_optional_naive_date};
use super::gender::{deserialize_optional_gender, serialize_optional_gender};
use super::Gender;

/// a traveler's entry declaration as held by the record service. the `id` is
/// assigned by the service on creation and is opaque to qdesk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Declaration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        deserialize_with = "deserialize_optional_naive_date",
        serialize_with = "serialize_optional_naive_date"
    )]
    pub created_at: Option<NaiveDate>,
    #[serde(
        deserialize_with = "deserialize_optional_naive_date",
        serialize_with = "serialize_optional_naive_date"
    )]
    pub updated_at: Option<NaiveDate>,
    pub name: String,
    pub passport_id: String,
    /// yyyy-mm-dd as entered
    pub birthdate: String,
    /// ISO 3166-1 alpha-2
    pub nationality: String,
    #[serde(
        deserialize_with = "deserialize_optional_gender",
        serialize_with = "serialize_optional_gender"
    )]
    pub gender: Option<Gender>,
    pub departure: String,
    pub flight_code: String,
    pub seat_number: String,
    pub address: String,
    pub contact: String,
    pub visit_country: Vec<String>,
    pub is_healthy: bool,
    pub symptom: Vec<String>,
    pub other: Vec<String>,
    pub note: String,
}

impl Declaration {
    /// a traveler is suspected when any symptom was declared.
    pub fn is_suspected(&self) -> bool {
        !self.symptom.is_empty()
    }

    /// health as implied by the declared symptoms and other flags.
    pub fn derived_health(&self) -> bool {
        self.symptom.is_empty() && self.other.is_empty()
    }
}
