use qdesk_core::board::{FlightBoard, ZoneFilter};
use qdesk_remote::{flight::FlightStatusClient, ClientConfig};

use super::{render, runtime::block_on, QdeskCliError};

/// refreshes the arrival board and prints one page of it.
///
/// # Arguments
/// * config - client configuration holding the flight status endpoint
/// * zone - zone filter to apply after the refresh
/// * page - board page to show, starting from 1. pages past the end stop at the last page.
pub fn run_arrivals(config: &ClientConfig, zone: ZoneFilter, page: usize) -> Result<(), QdeskCliError> {
    let client = FlightStatusClient::new(&config.flight)?;
    let mut board = FlightBoard::new();
    block_on(board.refresh(&client))?;
    if let Some(reason) = board.load_status().failure_reason() {
        return Err(QdeskCliError::RefreshFailed(reason.to_string()));
    }
    board.set_zone_filter(zone);
    advance_to_page(&mut board, page);

    if zone == ZoneFilter::All {
        println!("{}", render::zone_summary(&board.zone_counts()));
    }
    println!("{}", render::flight_table(&board.visible_flights()));
    println!("{}", render::board_footer(&board));
    Ok(())
}

fn advance_to_page(board: &mut FlightBoard, page: usize) {
    for _ in 1..page {
        if !board.next_page() {
            log::warn!(
                "requested page {page} but the board has {} pages",
                board.page_count()
            );
            break;
        }
    }
}
