mod flight_parse_error;
mod flight_view;
mod raw_flight_record;
mod zone_name;
pub mod zone_ops;

pub use flight_parse_error::FlightParseError;
pub use flight_view::{format_arrival_time, normalize_arrivals, FlightView};
pub use raw_flight_record::{RawFlightRecord, PRIMARY_CODESHARE};
pub use zone_name::ZoneName;
pub use zone_ops::classify;
