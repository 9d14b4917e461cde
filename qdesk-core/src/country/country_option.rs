use serde::{Deserialize, Serialize};

/// selectable country for nationality and visited-country fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryOption {
    /// ISO 3166-1 alpha-2
    pub code: String,
    pub label: String,
}

impl CountryOption {
    pub fn new(code: &str, label: &str) -> CountryOption {
        CountryOption {
            code: code.to_uppercase(),
            label: label.to_string(),
        }
    }
}

impl std::fmt::Display for CountryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.label)
    }
}
