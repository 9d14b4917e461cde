pub mod board;
pub mod country;
pub mod declaration;
pub mod flight;
pub mod roster;
pub mod weather;
