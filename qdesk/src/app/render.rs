//! plain-text rendering of board, roster and reference listings. every
//! function returns the text so output can be checked without a terminal.
use itertools::Itertools;
use qdesk_core::{
    board::FlightBoard,
    country::CountryIndex,
    declaration::{
        vocabulary::{OTHER_FLAGS, SYMPTOMS},
        Declaration, DeclarationDraft,
    },
    flight::{FlightView, ZoneName},
    roster::Roster,
};

pub fn flight_table(flights: &[&FlightView]) -> String {
    if flights.is_empty() {
        return String::from("no arrivals to show");
    }
    let header = format!(
        "{:<6} {:<8} {:<6} {:<5} {:<8} {}",
        "TIME", "FLIGHT", "FROM", "GATE", "STATUS", "ZONE"
    );
    let rows = flights.iter().map(|f| {
        format!(
            "{:<6} {:<8} {:<6} {:<5} {:<8} {}",
            f.arrival_time(),
            f.airline_code(),
            f.origin(),
            f.gate(),
            f.status(),
            f.zone()
        )
    });
    std::iter::once(header).chain(rows).join("\n")
}

/// page position, filtered arrival count and the selected zone
pub fn board_footer(board: &FlightBoard) -> String {
    let pages = board.page_count();
    let page = if pages == 0 { 0 } else { board.page() + 1 };
    format!(
        "page {page} of {pages}, {} arrivals in {}",
        board.filtered_len(),
        board.zone_filter()
    )
}

pub fn zone_summary(counts: &[(ZoneName, usize)]) -> String {
    counts
        .iter()
        .map(|(zone, n)| format!("{zone} {n}"))
        .join(" | ")
}

pub fn zone_table() -> String {
    ZoneName::ALL
        .iter()
        .map(|zone| {
            let gates = zone
                .gate_range()
                .map(|r| format!("{}-{}", r.start(), r.end()))
                .unwrap_or_default();
            format!("{:<16} {:<16} {}", zone.slug(), zone.display_name(), gates)
        })
        .join("\n")
}

/// the current roster page. nationalities are shown by country label when a
/// country list is available.
pub fn roster_table(roster: &Roster, countries: Option<&CountryIndex>) -> String {
    let records = roster.current_page_records();
    if records.is_empty() {
        return String::from("no travelers to show");
    }
    let header = format!(
        "{:>4}  {:<16} {:<12} {:<16} {:<8} {:<6} {:<12} {:<8} {}",
        "#", "NAME", "PASSPORT", "NATIONALITY", "FLIGHT", "SEAT", "DEPARTURE", "HEALTH", "UPDATED"
    );
    let rows = records.iter().enumerate().map(|(idx, r)| {
        format!(
            "{:>4}  {:<16} {:<12} {:<16} {:<8} {:<6} {:<12} {:<8} {}",
            roster.row_number(idx),
            r.name,
            r.passport_id,
            nationality_label(&r.nationality, countries),
            r.flight_code,
            r.seat_number,
            r.departure,
            health_label(r),
            r.updated_at.map(|d| d.to_string()).unwrap_or_default()
        )
    });
    std::iter::once(header).chain(rows).join("\n")
}

pub fn roster_footer(roster: &Roster) -> String {
    let pages = roster.total_pages();
    let page = if pages == 0 { 0 } else { roster.current_page() };
    format!(
        "page {page} of {pages}, {} travelers, {} suspected",
        roster.total_count(),
        roster.suspected_count()
    )
}

pub fn declaration_detail(record: &Declaration, countries: Option<&CountryIndex>) -> String {
    let visited = record
        .visit_country
        .iter()
        .map(|c| nationality_label(c, countries))
        .join(", ");
    let fields = [
        ("id", record.id.clone().unwrap_or_default()),
        ("name", record.name.clone()),
        ("passport", record.passport_id.clone()),
        ("birthdate", record.birthdate.clone()),
        (
            "nationality",
            nationality_label(&record.nationality, countries),
        ),
        (
            "gender",
            record.gender.map(|g| g.code().to_string()).unwrap_or_default(),
        ),
        ("departure", record.departure.clone()),
        ("flight", record.flight_code.clone()),
        ("seat", record.seat_number.clone()),
        ("address", record.address.clone()),
        ("contact", record.contact.clone()),
        ("visited", visited),
        ("health", health_label(record).to_string()),
        ("symptoms", record.symptom.join(", ")),
        ("other", record.other.join(", ")),
        ("note", record.note.clone()),
        (
            "created",
            record.created_at.map(|d| d.to_string()).unwrap_or_default(),
        ),
        (
            "updated",
            record.updated_at.map(|d| d.to_string()).unwrap_or_default(),
        ),
    ];
    fields
        .iter()
        .map(|(k, v)| format!("{k:<12} {v}"))
        .join("\n")
}

pub fn country_table(countries: &CountryIndex) -> String {
    countries
        .options()
        .iter()
        .map(|c| format!("{}  {}", c.code, c.label))
        .join("\n")
}

pub fn draft_template(draft: &DeclarationDraft) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(draft)
}

pub fn vocabulary_listing() -> String {
    format!(
        "symptom values: {}\nother values: {}",
        SYMPTOMS.iter().join(", "),
        OTHER_FLAGS.iter().join(", ")
    )
}

fn nationality_label(code: &str, countries: Option<&CountryIndex>) -> String {
    match countries {
        Some(index) => index.describe(code).to_string(),
        None => code.to_string(),
    }
}

fn health_label(record: &Declaration) -> &'static str {
    if record.is_suspected() {
        "suspected"
    } else if record.is_healthy {
        "healthy"
    } else {
        "flagged"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdesk_core::{
        board::ZoneFilter,
        country::CountryOption,
        flight::RawFlightRecord,
        roster::RosterQuery,
    };

    fn arrival(flight_id: &str, gate: &str) -> RawFlightRecord {
        RawFlightRecord {
            flight_id: flight_id.to_string(),
            airport: String::from("NRT"),
            estimated_date_time: String::from("202401011230"),
            gatenumber: Some(gate.to_string()),
            remark: String::from("도착"),
            codeshare: String::from("Master"),
            ..Default::default()
        }
    }

    fn traveler(name: &str, nationality: &str, symptom: &[&str]) -> Declaration {
        Declaration {
            name: name.to_string(),
            nationality: nationality.to_string(),
            is_healthy: symptom.is_empty(),
            symptom: symptom.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flight_table_and_footer() {
        let mut board = FlightBoard::new();
        board.apply_arrivals(Ok(vec![arrival("KE001", "33"), arrival("OZ102", "260")]));
        let table = flight_table(&board.visible_flights());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("TIME"));
        assert!(lines[1].contains("KE001"));
        assert!(lines[1].contains("12:30"));
        assert!(lines[1].ends_with("서편 앤틀러"));
        assert!(lines[2].ends_with("T2 서편"));
        assert_eq!(board_footer(&board), "page 1 of 1, 2 arrivals in All Zones");

        board.set_zone_filter(ZoneFilter::Only(ZoneName::EastAntler));
        assert_eq!(flight_table(&board.visible_flights()), "no arrivals to show");
        assert_eq!(board_footer(&board), "page 0 of 0, 0 arrivals in 동편 앤틀러");
    }

    #[test]
    fn test_zone_summary() {
        let summary = zone_summary(&[(ZoneName::WestAntler, 2), (ZoneName::T2East, 0)]);
        assert_eq!(summary, "서편 앤틀러 2 | T2 동편 0");
    }

    #[test]
    fn test_zone_table_lists_named_zones() {
        let table = zone_table();
        assert_eq!(table.lines().count(), ZoneName::ALL.len());
        assert!(!table.contains("Unknown"));
    }

    #[test]
    fn test_roster_table_uses_country_labels() {
        let roster = Roster::new(vec![
            traveler("Kim", "KR", &[]),
            traveler("Sato", "JP", &["발열"]),
            traveler("Lee", "XX", &[]),
        ]);
        let countries = CountryIndex::new(vec![
            CountryOption::new("KR", "South Korea"),
            CountryOption::new("JP", "Japan"),
        ]);
        let table = roster_table(&roster, Some(&countries));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("South Korea"));
        assert!(lines[2].contains("Japan"));
        assert!(lines[2].contains("suspected"));
        assert!(lines[3].contains("XX"));
        assert!(lines[3].trim_start().starts_with('3'));
        assert_eq!(roster_footer(&roster), "page 1 of 1, 3 travelers, 1 suspected");

        let plain = roster_table(&roster, None);
        assert!(plain.contains("KR"));
        assert!(!plain.contains("South Korea"));
    }

    #[test]
    fn test_empty_roster() {
        let mut roster = Roster::new(vec![traveler("Kim", "KR", &[])]);
        roster.search(RosterQuery {
            name: Some(String::from("nobody")),
            ..Default::default()
        });
        assert_eq!(roster_table(&roster, None), "no travelers to show");
        assert_eq!(roster_footer(&roster), "page 0 of 0, 0 travelers, 0 suspected");
    }

    #[test]
    fn test_draft_template_round_trips() {
        let draft = DeclarationDraft::new();
        let json = draft_template(&draft).expect("test invariant failed");
        assert!(json.contains("\"passportId\": \"\""));
        assert!(json.contains("\"otherDetail\": \"\""));
        assert!(json.contains("\"isHealthy\": true"));
        assert!(!json.contains("\"id\""));
        let decoded: DeclarationDraft = serde_json::from_str(&json).expect("test invariant failed");
        assert_eq!(decoded, draft);
    }

    #[test]
    fn test_vocabulary_listing() {
        let listing = vocabulary_listing();
        assert!(listing.starts_with("symptom values: 발열, 오한"));
        assert!(listing.ends_with("other values: 증상 관련 약 복용, 현지 병원 방문, 동물접촉"));
    }

    #[test]
    fn test_declaration_detail() {
        let mut record = traveler("Kim", "KR", &["기침"]);
        record.visit_country = vec![String::from("JP"), String::from("US")];
        let countries = CountryIndex::new(vec![CountryOption::new("JP", "Japan")]);
        let detail = declaration_detail(&record, Some(&countries));
        assert!(detail.contains("visited      Japan, US"));
        assert!(detail.contains("symptoms     기침"));
        assert!(detail.contains("health       suspected"));
    }
}
