//! gate number to zone classification.
use super::ZoneName;

/// maps a raw gate label to the zone containing it.
///
/// the label is read with integer-prefix parsing, so "42A" is gate 42. a label
/// without leading digits, or a number outside every zone range, classifies
/// as [ZoneName::Unknown].
pub fn classify(gate: &str) -> ZoneName {
    match parse_gate_number(gate) {
        Some(n) => ZoneName::ALL
            .into_iter()
            .find(|zone| zone.contains_gate(n))
            .unwrap_or(ZoneName::Unknown),
        None => ZoneName::Unknown,
    }
}

/// parses the leading base-10 integer of a gate label, skipping leading
/// whitespace and accepting an optional sign. trailing content is ignored.
pub fn parse_gate_number(gate: &str) -> Option<i64> {
    let trimmed = gate.trim_start();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    unsigned[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}
