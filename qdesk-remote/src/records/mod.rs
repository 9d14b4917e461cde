mod traveler_record_client;

pub use traveler_record_client::TravelerRecordClient;
