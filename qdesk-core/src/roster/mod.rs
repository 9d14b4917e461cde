mod roster_query;
mod traveler_roster;

pub use roster_query::RosterQuery;
pub use traveler_roster::{Roster, ROSTER_PAGE_SIZE};
