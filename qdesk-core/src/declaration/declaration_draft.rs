use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Declaration, DeclarationError, DECLARATION_DATE_FORMAT};
use crate::country::CountryIndex;

/// intake form state for a declaration. beyond the stored fields, the form
/// carries a free-text detail for the "기타" symptom that is folded into the
/// symptom list on submission.
///
/// the health flag is kept in step with the declared symptoms and other flags:
/// it is true exactly when both lists are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationDraft {
    #[serde(flatten)]
    pub declaration: Declaration,
    #[serde(default)]
    pub other_detail: String,
}

impl Default for DeclarationDraft {
    fn default() -> Self {
        Self {
            declaration: Declaration {
                is_healthy: true,
                ..Default::default()
            },
            other_detail: String::new(),
        }
    }
}

impl From<Declaration> for DeclarationDraft {
    fn from(value: Declaration) -> Self {
        let mut draft = DeclarationDraft {
            declaration: value,
            other_detail: String::new(),
        };
        draft.derive_health();
        draft
    }
}

impl DeclarationDraft {
    pub fn new() -> DeclarationDraft {
        DeclarationDraft::default()
    }

    /// checks or unchecks a symptom
    pub fn set_symptom(&mut self, symptom: &str, checked: bool) {
        toggle(&mut self.declaration.symptom, symptom, checked);
        self.derive_health();
    }

    /// checks or unchecks one of the other risk flags (medication, hospital visit, animal contact)
    pub fn set_other_flag(&mut self, flag: &str, checked: bool) {
        toggle(&mut self.declaration.other, flag, checked);
        self.derive_health();
    }

    /// declaring the traveler healthy clears every symptom and other flag.
    /// the flag is then re-derived, so it cannot be unset while both lists are empty.
    pub fn set_healthy(&mut self, healthy: bool) {
        self.declaration.is_healthy = healthy;
        if healthy {
            self.declaration.symptom.clear();
            self.declaration.other.clear();
        }
        self.derive_health();
    }

    pub fn is_healthy(&self) -> bool {
        self.declaration.is_healthy
    }

    /// required fields are filled, the birthdate is a calendar date and
    /// country codes are two-letter codes.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        let d = &self.declaration;
        let required = [
            ("name", &d.name),
            ("passportId", &d.passport_id),
            ("birthdate", &d.birthdate),
            ("departure", &d.departure),
            ("flightCode", &d.flight_code),
            ("seatNumber", &d.seat_number),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(DeclarationError::MissingField(*field));
        }

        NaiveDate::parse_from_str(d.birthdate.trim(), DECLARATION_DATE_FORMAT).map_err(|e| {
            DeclarationError::InvalidBirthdate {
                value: d.birthdate.clone(),
                reason: e.to_string(),
            }
        })?;

        self.country_codes()
            .find(|code| !is_alpha2(code))
            .map_or(Ok(()), |code| {
                Err(DeclarationError::InvalidCountryCode(code.to_string()))
            })
    }

    /// every country code on the draft is present in the reference list.
    pub fn validate_countries(&self, index: &CountryIndex) -> Result<(), DeclarationError> {
        match self.country_codes().find(|code| !index.contains(code)) {
            Some(code) => Err(DeclarationError::UnknownCountry(code.to_string())),
            None => Ok(()),
        }
    }

    /// validates the draft and produces the record to send to the record
    /// service. the creation date is kept when already set, the update date
    /// becomes `today`, and a non-empty "기타" detail is appended to the symptoms.
    pub fn into_submission(self, today: NaiveDate) -> Result<Declaration, DeclarationError> {
        self.validate()?;
        let DeclarationDraft {
            mut declaration,
            other_detail,
        } = self;
        declaration.created_at = declaration.created_at.or(Some(today));
        declaration.updated_at = Some(today);
        let detail = other_detail.trim();
        if !detail.is_empty() {
            declaration.symptom.push(detail.to_string());
        }
        declaration.is_healthy = declaration.derived_health();
        Ok(declaration)
    }

    fn derive_health(&mut self) {
        self.declaration.is_healthy = self.declaration.derived_health();
    }

    fn country_codes(&self) -> impl Iterator<Item = &str> {
        let nationality = Some(self.declaration.nationality.trim()).filter(|s| !s.is_empty());
        nationality
            .into_iter()
            .chain(self.declaration.visit_country.iter().map(|s| s.trim()))
    }
}

fn toggle(values: &mut Vec<String>, value: &str, checked: bool) {
    let present = values.iter().any(|v| v == value);
    if checked && !present {
        values.push(value.to_string());
    } else if !checked {
        values.retain(|v| v != value);
    }
}

fn is_alpha2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::DeclarationDraft;
    use crate::country::{CountryIndex, CountryOption};
    use crate::declaration::DeclarationError;
    use chrono::NaiveDate;

    fn filled_draft() -> DeclarationDraft {
        let mut draft = DeclarationDraft::new();
        let d = &mut draft.declaration;
        d.name = "홍길동".to_string();
        d.passport_id = "M12345678".to_string();
        d.birthdate = "1990-01-01".to_string();
        d.nationality = "KR".to_string();
        d.departure = "NRT".to_string();
        d.flight_code = "KE001".to_string();
        d.seat_number = "32A".to_string();
        d.visit_country = vec!["JP".to_string()];
        draft
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 14).expect("test invariant failed")
    }

    #[test]
    fn test_new_draft_is_healthy() {
        assert!(DeclarationDraft::new().is_healthy());
    }

    #[test]
    fn test_symptoms_and_flags_derive_health() {
        let mut draft = filled_draft();
        draft.set_symptom("발열", true);
        assert!(!draft.is_healthy());
        draft.set_symptom("발열", true);
        assert_eq!(draft.declaration.symptom, vec!["발열"]);
        draft.set_symptom("발열", false);
        assert!(draft.is_healthy());

        draft.set_other_flag("동물접촉", true);
        assert!(!draft.is_healthy());
        draft.set_other_flag("동물접촉", false);
        assert!(draft.is_healthy());
    }

    #[test]
    fn test_set_healthy_clears_lists() {
        let mut draft = filled_draft();
        draft.set_symptom("기침", true);
        draft.set_other_flag("현지 병원 방문", true);
        draft.set_healthy(true);
        assert!(draft.is_healthy());
        assert!(draft.declaration.symptom.is_empty());
        assert!(draft.declaration.other.is_empty());

        // cannot be unset without a declared symptom or flag
        draft.set_healthy(false);
        assert!(draft.is_healthy());
    }

    #[test]
    fn test_validate_required_fields() {
        let mut draft = filled_draft();
        draft.declaration.flight_code = "  ".to_string();
        assert_eq!(
            draft.validate(),
            Err(DeclarationError::MissingField("flightCode"))
        );
    }

    #[test]
    fn test_validate_birthdate_and_countries() {
        let mut draft = filled_draft();
        draft.declaration.birthdate = "1990-13-01".to_string();
        assert!(matches!(
            draft.validate(),
            Err(DeclarationError::InvalidBirthdate { .. })
        ));

        let mut draft = filled_draft();
        draft.declaration.visit_country.push("Japan".to_string());
        assert_eq!(
            draft.validate(),
            Err(DeclarationError::InvalidCountryCode("Japan".to_string()))
        );

        let mut draft = filled_draft();
        draft.declaration.nationality = String::new();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_countries_against_reference() {
        let index = CountryIndex::new(vec![
            CountryOption::new("KR", "South Korea"),
            CountryOption::new("JP", "Japan"),
        ]);
        let mut draft = filled_draft();
        assert_eq!(draft.validate_countries(&index), Ok(()));
        draft.declaration.visit_country.push("ZZ".to_string());
        assert_eq!(
            draft.validate_countries(&index),
            Err(DeclarationError::UnknownCountry("ZZ".to_string()))
        );
    }

    #[test]
    fn test_into_submission() {
        let mut draft = filled_draft();
        draft.other_detail = " 근육통 ".to_string();
        let submission = draft.into_submission(today()).expect("test failed");
        assert_eq!(submission.created_at, Some(today()));
        assert_eq!(submission.updated_at, Some(today()));
        assert_eq!(submission.symptom, vec!["근육통"]);
        assert!(!submission.is_healthy);
    }

    #[test]
    fn test_into_submission_keeps_creation_date() {
        let mut draft = filled_draft();
        let created = NaiveDate::from_ymd_opt(2024, 10, 1).expect("test invariant failed");
        draft.declaration.created_at = Some(created);
        let submission = draft.into_submission(today()).expect("test failed");
        assert_eq!(submission.created_at, Some(created));
        assert_eq!(submission.updated_at, Some(today()));
        assert!(submission.is_healthy);
    }

    #[test]
    fn test_draft_json_carries_other_detail() {
        let json = r#"{
            "name": "A", "passportId": "P1", "birthdate": "2000-02-29",
            "departure": "LAX", "flightCode": "OZ201", "seatNumber": "1A",
            "symptom": ["기타"], "otherDetail": "근육통"
        }"#;
        let draft: DeclarationDraft = serde_json::from_str(json).expect("test failed");
        assert_eq!(draft.other_detail, "근육통");
        let submission = draft.into_submission(today()).expect("test failed");
        assert_eq!(submission.symptom, vec!["기타", "근육통"]);
    }
}
