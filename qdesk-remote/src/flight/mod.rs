mod arrivals_envelope;
mod flight_status_client;

pub use arrivals_envelope::{decode_arrivals, ArrivalsEnvelope, SUCCESS_RESULT_CODE};
pub use flight_status_client::FlightStatusClient;
