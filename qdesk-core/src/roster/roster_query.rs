use serde::{Deserialize, Serialize};

use crate::declaration::Declaration;

/// staff search over the traveler roster. every given criterion must match as a
/// case-insensitive substring; blank criteria are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterQuery {
    pub name: Option<String>,
    pub flight_code: Option<String>,
    pub departure: Option<String>,
}

impl RosterQuery {
    pub fn is_empty(&self) -> bool {
        self.criteria().all(|(_, c)| c.is_none())
    }

    pub fn matches(&self, record: &Declaration) -> bool {
        self.criteria().all(|(field, criterion)| match criterion {
            None => true,
            Some(needle) => {
                let haystack = match field {
                    QueryField::Name => &record.name,
                    QueryField::FlightCode => &record.flight_code,
                    QueryField::Departure => &record.departure,
                };
                haystack.to_lowercase().contains(&needle)
            }
        })
    }

    /// lowercased, non-blank criteria
    fn criteria(&self) -> impl Iterator<Item = (QueryField, Option<String>)> + '_ {
        [
            (QueryField::Name, &self.name),
            (QueryField::FlightCode, &self.flight_code),
            (QueryField::Departure, &self.departure),
        ]
        .into_iter()
        .map(|(field, c)| {
            let normalized = c
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase);
            (field, normalized)
        })
    }
}

#[derive(Clone, Copy)]
enum QueryField {
    Name,
    FlightCode,
    Departure,
}
