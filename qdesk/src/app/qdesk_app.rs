use clap::{Parser, Subcommand};
use qdesk_core::{board::ZoneFilter, roster::RosterQuery, weather::Coordinates};
use qdesk_remote::ClientConfig;

use super::{arrivals, countries, travelers, weather, zones, QdeskCliError};

/// quarantine desk tool: arrival board by gate zone and traveler declarations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct QdeskApp {
    /// client configuration file (.toml or .json). public endpoints are used
    /// when omitted; api keys may be set through QDESK_FLIGHT_API_KEY and
    /// QDESK_WEATHER_API_KEY.
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub op: QdeskOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum QdeskOperation {
    /// show one page of the current arrival board
    Arrivals {
        /// gate zone to show, by name or slug (see `zones`). all zones by default.
        #[arg(short, long, value_parser = parse_zone_filter, default_value = "all")]
        zone: ZoneFilter,
        /// board page, starting from 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// list the gate zones and their gate ranges
    Zones,
    /// read and write traveler declarations
    Travelers {
        #[command(subcommand)]
        op: TravelersOperation,
    },
    /// current weather at a location
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// list country codes accepted for nationality and visited countries
    Countries,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TravelersOperation {
    /// list declarations, optionally filtered
    List {
        /// traveler name contains
        #[arg(long)]
        name: Option<String>,
        /// flight code contains
        #[arg(long)]
        flight_code: Option<String>,
        /// departure contains
        #[arg(long)]
        departure: Option<String>,
        /// roster page, starting from 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// print a blank declaration draft and the known symptom and risk-flag values
    Template,
    /// show one declaration
    Show { id: String },
    /// delete one declaration
    Delete { id: String },
    /// submit a new declaration from a json draft file
    Submit { file: String },
    /// replace a declaration with the contents of a json draft file
    Update { id: String, file: String },
}

impl QdeskOperation {
    pub fn run(self, config_file: Option<&String>) -> Result<(), QdeskCliError> {
        match self {
            QdeskOperation::Zones => {
                zones::run_zones();
                Ok(())
            }
            QdeskOperation::Arrivals { zone, page } => {
                let config = ClientConfig::load(config_file)?;
                arrivals::run_arrivals(&config, zone, page)
            }
            QdeskOperation::Travelers {
                op: TravelersOperation::Template,
            } => travelers::run_template(),
            QdeskOperation::Travelers { op } => {
                let config = ClientConfig::load(config_file)?;
                op.run(&config)
            }
            QdeskOperation::Weather { lat, lon } => {
                let location =
                    Coordinates::new(lat, lon).map_err(QdeskCliError::InvalidArgument)?;
                let config = ClientConfig::load(config_file)?;
                weather::run_weather(&config, &location)
            }
            QdeskOperation::Countries => {
                let config = ClientConfig::load(config_file)?;
                countries::run_countries(&config)
            }
        }
    }
}

impl TravelersOperation {
    pub fn run(self, config: &ClientConfig) -> Result<(), QdeskCliError> {
        match self {
            TravelersOperation::List {
                name,
                flight_code,
                departure,
                page,
            } => {
                let query = RosterQuery {
                    name,
                    flight_code,
                    departure,
                };
                travelers::run_list(config, query, page)
            }
            TravelersOperation::Template => travelers::run_template(),
            TravelersOperation::Show { id } => travelers::run_show(config, &id),
            TravelersOperation::Delete { id } => travelers::run_delete(config, &id),
            TravelersOperation::Submit { file } => travelers::run_submit(config, &file),
            TravelersOperation::Update { id, file } => travelers::run_update(config, &id, &file),
        }
    }
}

fn parse_zone_filter(s: &str) -> Result<ZoneFilter, String> {
    s.parse::<ZoneFilter>()
}

#[cfg(test)]
mod tests {
    use super::{QdeskApp, QdeskOperation, TravelersOperation};
    use clap::{CommandFactory, Parser};
    use qdesk_core::{board::ZoneFilter, flight::ZoneName};

    #[test]
    fn test_command_definition() {
        QdeskApp::command().debug_assert();
    }

    #[test]
    fn test_parse_arrivals() {
        let app = QdeskApp::try_parse_from(["qdesk", "arrivals", "--zone", "t2-east", "-p", "2"])
            .expect("test invariant failed");
        match app.op {
            QdeskOperation::Arrivals { zone, page } => {
                assert_eq!(zone, ZoneFilter::Only(ZoneName::T2East));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected operation {other:?}"),
        }

        let app = QdeskApp::try_parse_from(["qdesk", "arrivals"]).expect("test invariant failed");
        assert!(matches!(
            app.op,
            QdeskOperation::Arrivals {
                zone: ZoneFilter::All,
                page: 1
            }
        ));
        assert!(QdeskApp::try_parse_from(["qdesk", "arrivals", "--zone", "gate-99"]).is_err());
    }

    #[test]
    fn test_global_config_and_travelers() {
        let app = QdeskApp::try_parse_from([
            "qdesk",
            "travelers",
            "update",
            "12",
            "draft.json",
            "--config",
            "qdesk.toml",
        ])
        .expect("test invariant failed");
        assert_eq!(app.config.as_deref(), Some("qdesk.toml"));
        match app.op {
            QdeskOperation::Travelers {
                op: TravelersOperation::Update { id, file },
            } => {
                assert_eq!(id, "12");
                assert_eq!(file, "draft.json");
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let app = QdeskApp::try_parse_from(["qdesk", "weather", "--lat", "-33.9", "--lon", "151.2"])
            .expect("test invariant failed");
        assert!(matches!(app.op, QdeskOperation::Weather { lat, .. } if lat == -33.9));
    }
}
