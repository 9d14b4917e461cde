mod flight_board;
mod flight_source;
mod load_status;
mod zone_filter;

pub use flight_board::{FlightBoard, PAGE_SIZE};
pub use flight_source::{FlightSource, FlightSourceError};
pub use load_status::LoadStatus;
pub use zone_filter::ZoneFilter;
