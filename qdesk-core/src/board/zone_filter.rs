use std::str::FromStr;

use crate::flight::ZoneName;

/// zone selection of the arrival board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoneFilter {
    #[default]
    All,
    Only(ZoneName),
}

impl ZoneFilter {
    pub fn matches(&self, zone: ZoneName) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Only(selected) => *selected == zone,
        }
    }
}

impl From<ZoneName> for ZoneFilter {
    fn from(value: ZoneName) -> Self {
        ZoneFilter::Only(value)
    }
}

impl FromStr for ZoneFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(ZoneFilter::All)
        } else {
            ZoneName::from_str(trimmed).map(ZoneFilter::Only)
        }
    }
}

impl std::fmt::Display for ZoneFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneFilter::All => write!(f, "All Zones"),
            ZoneFilter::Only(zone) => write!(f, "{zone}"),
        }
    }
}
