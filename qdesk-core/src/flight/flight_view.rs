use serde::Serialize;

use super::{zone_ops, FlightParseError, RawFlightRecord, ZoneName};

/// byte range of the HHmm portion in a yyyyMMddHHmm timestamp
const TIME_OF_DAY_POSITIONS: std::ops::Range<usize> = 8..12;

/// one row of the arrival board, normalized from a primary [RawFlightRecord].
/// values are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightView {
    airline_code: String,
    origin: String,
    arrival_time: String,
    gate: String,
    status: String,
    zone: ZoneName,
}

impl FlightView {
    pub fn airline_code(&self) -> &str {
        &self.airline_code
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// "HH:MM"
    pub fn arrival_time(&self) -> &str {
        &self.arrival_time
    }

    pub fn gate(&self) -> &str {
        &self.gate
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn zone(&self) -> ZoneName {
        self.zone
    }
}

impl TryFrom<&RawFlightRecord> for FlightView {
    type Error = FlightParseError;

    fn try_from(record: &RawFlightRecord) -> Result<Self, Self::Error> {
        let arrival_time = format_arrival_time(&record.estimated_date_time)?;
        let gate = record.gate_label().to_string();
        let zone = zone_ops::classify(&gate);
        Ok(FlightView {
            airline_code: record.flight_id.clone(),
            origin: record.airport.clone(),
            arrival_time,
            gate,
            status: record.remark.clone(),
            zone,
        })
    }
}

/// reads "HH:MM" from positions 8..10 and 10..12 of a yyyyMMddHHmm timestamp.
/// non-ascii text, shorter strings and non-digit hour/minute characters are
/// rejected.
pub fn format_arrival_time(date_time: &str) -> Result<String, FlightParseError> {
    if !date_time.is_ascii() {
        return Err(FlightParseError::TimestampNotAscii(date_time.to_string()));
    }
    let len = date_time.len();
    if len < TIME_OF_DAY_POSITIONS.end {
        return Err(FlightParseError::TimestampTooShort {
            value: date_time.to_string(),
            len,
        });
    }
    let hhmm = date_time
        .get(TIME_OF_DAY_POSITIONS)
        .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| FlightParseError::TimestampNotNumeric(date_time.to_string()))?;
    Ok(format!("{}:{}", &hhmm[0..2], &hhmm[2..4]))
}

/// keeps the primary records of a flight status listing and normalizes them in
/// source order. records whose timestamp cannot be read are dropped with a warning.
pub fn normalize_arrivals(records: &[RawFlightRecord]) -> Vec<FlightView> {
    records
        .iter()
        .filter(|r| r.is_primary())
        .filter_map(|r| match FlightView::try_from(r) {
            Ok(view) => Some(view),
            Err(e) => {
                log::warn!("dropping arrival {}: {e}", r.flight_id);
                None
            }
        })
        .collect()
}
