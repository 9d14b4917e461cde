use crate::declaration::Declaration;

use super::RosterQuery;

/// number of travelers per roster page
pub const ROSTER_PAGE_SIZE: usize = 10;

/// staff view over the submitted declarations. the roster keeps the full
/// listing from the record service and the subset matching the current search,
/// paged by [ROSTER_PAGE_SIZE]. pages are numbered from 1.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<Declaration>,
    matching: Vec<usize>,
    query: RosterQuery,
    current_page: usize,
}

impl Roster {
    pub fn new(records: Vec<Declaration>) -> Roster {
        let matching = (0..records.len()).collect();
        Roster {
            records,
            matching,
            query: RosterQuery::default(),
            current_page: 1,
        }
    }

    /// applies a search and returns to the first page. returns the number of matches.
    pub fn search(&mut self, query: RosterQuery) -> usize {
        self.query = query;
        self.rematch();
        self.current_page = 1;
        log::debug!(
            "roster search {:?} matched {} of {} travelers",
            self.query,
            self.matching.len(),
            self.records.len()
        );
        self.matching.len()
    }

    /// clears the search, showing every traveler from the first page.
    pub fn reset(&mut self) {
        self.search(RosterQuery::default());
    }

    /// swaps in a fresh listing, e.g. after a delete. the current search is
    /// re-applied and the page is kept when it still exists.
    pub fn replace_records(&mut self, records: Vec<Declaration>) {
        self.records = records;
        self.rematch();
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }

    pub fn query(&self) -> &RosterQuery {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_page_records(&self) -> Vec<&Declaration> {
        let start = (self.current_page - 1).saturating_mul(ROSTER_PAGE_SIZE);
        self.matching
            .iter()
            .skip(start)
            .take(ROSTER_PAGE_SIZE)
            .map(|idx| &self.records[*idx])
            .collect()
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// moves to a page, clamped to the available pages. returns the page reached.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        while self.current_page < page && self.next_page() {}
        while self.current_page > page && self.prev_page() {}
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.matching.len().div_ceil(ROSTER_PAGE_SIZE)
    }

    /// travelers matching the current search
    pub fn total_count(&self) -> usize {
        self.matching.len()
    }

    /// matching travelers that declared at least one symptom
    pub fn suspected_count(&self) -> usize {
        self.matching
            .iter()
            .filter(|idx| self.records[**idx].is_suspected())
            .count()
    }

    /// 1-based ordinal across all pages of the row at `index_on_page`
    pub fn row_number(&self, index_on_page: usize) -> usize {
        (self.current_page - 1) * ROSTER_PAGE_SIZE + index_on_page + 1
    }

    fn rematch(&mut self) {
        self.matching = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.query.matches(r))
            .map(|(idx, _)| idx)
            .collect();
    }
}
