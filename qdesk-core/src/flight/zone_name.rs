use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// physical gate zones of the arrival terminals. the `Unknown` variant is the
/// sentinel for gates that fall in none of the zone ranges or do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneName {
    #[serde(rename = "서편 앤틀러")]
    WestAntler,
    #[serde(rename = "서편 통로")]
    WestCorridor,
    #[serde(rename = "동편 통로")]
    EastCorridor,
    #[serde(rename = "동편 앤틀러")]
    EastAntler,
    #[serde(rename = "탑승동 동편")]
    ConcourseEast,
    #[serde(rename = "탑승동 서편")]
    ConcourseWest,
    #[serde(rename = "T2 동편")]
    T2East,
    #[serde(rename = "T2 서편")]
    T2West,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ZoneName {
    /// the named zones in board display order. does not include [ZoneName::Unknown].
    pub const ALL: [ZoneName; 8] = [
        ZoneName::WestAntler,
        ZoneName::WestCorridor,
        ZoneName::EastCorridor,
        ZoneName::EastAntler,
        ZoneName::ConcourseEast,
        ZoneName::ConcourseWest,
        ZoneName::T2East,
        ZoneName::T2West,
    ];

    /// closed gate number interval covered by this zone. the intervals of
    /// the named zones are pairwise disjoint.
    pub fn gate_range(&self) -> Option<RangeInclusive<i64>> {
        match self {
            ZoneName::WestAntler => Some(29..=41),
            ZoneName::WestCorridor => Some(42..=50),
            ZoneName::EastCorridor => Some(5..=11),
            ZoneName::EastAntler => Some(12..=25),
            ZoneName::ConcourseEast => Some(101..=115),
            ZoneName::ConcourseWest => Some(118..=132),
            ZoneName::T2East => Some(230..=250),
            ZoneName::T2West => Some(251..=270),
            ZoneName::Unknown => None,
        }
    }

    pub fn contains_gate(&self, gate_number: i64) -> bool {
        self.gate_range()
            .map(|r| r.contains(&gate_number))
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ZoneName::WestAntler => "서편 앤틀러",
            ZoneName::WestCorridor => "서편 통로",
            ZoneName::EastCorridor => "동편 통로",
            ZoneName::EastAntler => "동편 앤틀러",
            ZoneName::ConcourseEast => "탑승동 동편",
            ZoneName::ConcourseWest => "탑승동 서편",
            ZoneName::T2East => "T2 동편",
            ZoneName::T2West => "T2 서편",
            ZoneName::Unknown => "Unknown",
        }
    }

    /// ascii identifier accepted on the command line in place of the display name.
    pub fn slug(&self) -> &'static str {
        match self {
            ZoneName::WestAntler => "west-antler",
            ZoneName::WestCorridor => "west-corridor",
            ZoneName::EastCorridor => "east-corridor",
            ZoneName::EastAntler => "east-antler",
            ZoneName::ConcourseEast => "concourse-east",
            ZoneName::ConcourseWest => "concourse-west",
            ZoneName::T2East => "t2-east",
            ZoneName::T2West => "t2-west",
            ZoneName::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ZoneName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ZoneName::ALL
            .into_iter()
            .chain(std::iter::once(ZoneName::Unknown))
            .find(|z| z.display_name() == trimmed || z.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let expected = ZoneName::ALL.iter().map(|z| z.slug()).collect::<Vec<_>>();
                format!("unknown zone '{s}', expected one of {}", expected.join(", "))
            })
    }
}
