use itertools::Itertools;
use std::collections::HashMap;

use super::CountryOption;

/// country reference list sorted by label, with lookup by code. codes are
/// matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    options: Vec<CountryOption>,
    by_code: HashMap<String, usize>,
}

impl CountryIndex {
    pub fn new(options: Vec<CountryOption>) -> CountryIndex {
        let options = options
            .into_iter()
            .unique_by(|o| o.code.clone())
            .sorted_by(|a, b| a.label.cmp(&b.label))
            .collect_vec();
        let by_code = options
            .iter()
            .enumerate()
            .map(|(idx, o)| (o.code.clone(), idx))
            .collect();
        CountryIndex { options, by_code }
    }

    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(&code.trim().to_uppercase())
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .map(|idx| self.options[*idx].label.as_str())
    }

    /// label of the code when known, otherwise the code itself
    pub fn describe<'a>(&'a self, code: &'a str) -> &'a str {
        self.label_for(code).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
