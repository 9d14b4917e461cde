use serde::{Deserialize, Deserializer, Serialize};

/// codeshare marker value carried by the operating (primary) flight. codeshare
/// duplicates of the same arrival carry a different marker.
pub const PRIMARY_CODESHARE: &str = "Master";

/// arrival record as delivered by the flight status service. fields beyond
/// the ones read here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlightRecord {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub flight_id: String,
    #[serde(default)]
    pub airline: Option<String>,
    /// origin airport code
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub airport: String,
    #[serde(default)]
    pub schedule_date_time: Option<String>,
    /// positional yyyyMMddHHmm timestamp
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub estimated_date_time: String,
    #[serde(default, deserialize_with = "deserialize_gate_label")]
    pub gatenumber: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub remark: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub codeshare: String,
    #[serde(default)]
    pub terminalid: Option<String>,
}

impl RawFlightRecord {
    /// true when this record is the operating flight rather than a codeshare copy.
    pub fn is_primary(&self) -> bool {
        self.codeshare == PRIMARY_CODESHARE
    }

    pub fn gate_label(&self) -> &str {
        self.gatenumber.as_deref().unwrap_or_default()
    }
}

/// text fields sent as json null read as empty text
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GateLabel {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

/// the service usually sends gates as strings but numeric and null values
/// have been observed, all are kept as text.
fn deserialize_gate_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<GateLabel> = Option::deserialize(deserializer)?;
    Ok(label.map(|l| match l {
        GateLabel::Text(s) => s,
        GateLabel::Integer(n) => n.to_string(),
        GateLabel::Decimal(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::RawFlightRecord;

    #[test]
    fn test_deserialize_upstream_item() {
        let item = r#"{
            "airline": "대한항공",
            "flightId": "KE001",
            "scheduleDateTime": "202401011220",
            "estimatedDateTime": "202401011230",
            "airport": "NRT",
            "remark": "도착",
            "gatenumber": "33",
            "codeshare": "Master",
            "terminalid": "P01",
            "chkinrange": "ignored"
        }"#;
        let record: RawFlightRecord = serde_json::from_str(item).expect("test failed");
        assert_eq!(record.flight_id, "KE001");
        assert_eq!(record.gate_label(), "33");
        assert!(record.is_primary());
    }

    #[test]
    fn test_numeric_and_missing_gates() {
        let numeric: RawFlightRecord =
            serde_json::from_str(r#"{"flightId": "OZ102", "gatenumber": 251}"#)
                .expect("test failed");
        assert_eq!(numeric.gate_label(), "251");

        let null_gate: RawFlightRecord =
            serde_json::from_str(r#"{"flightId": "OZ102", "gatenumber": null}"#)
                .expect("test failed");
        assert_eq!(null_gate.gatenumber, None);

        let absent: RawFlightRecord =
            serde_json::from_str(r#"{"flightId": "OZ102", "codeshare": "Slave"}"#)
                .expect("test failed");
        assert_eq!(absent.gate_label(), "");
        assert!(!absent.is_primary());
    }

    #[test]
    fn test_null_text_fields() {
        let item = r#"{
            "flightId": null,
            "estimatedDateTime": null,
            "airport": null,
            "remark": null,
            "gatenumber": "33",
            "codeshare": null
        }"#;
        let record: RawFlightRecord = serde_json::from_str(item).expect("test failed");
        assert_eq!(record.flight_id, "");
        assert_eq!(record.estimated_date_time, "");
        assert_eq!(record.airport, "");
        assert_eq!(record.remark, "");
        assert!(!record.is_primary());
    }
}
