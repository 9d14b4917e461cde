use crate::flight::{normalize_arrivals, FlightView, RawFlightRecord, ZoneName};

use super::{FlightSource, FlightSourceError, LoadStatus, ZoneFilter};

/// number of arrivals shown per board page
pub const PAGE_SIZE: usize = 5;

/// in-memory arrival board. holds the normalized arrivals of the last
/// successful refresh along with the zone filter and page selected by the user.
/// the visible rows are recomputed from this state on every read.
#[derive(Debug, Default)]
pub struct FlightBoard {
    all_flights: Vec<FlightView>,
    zone_filter: ZoneFilter,
    page: usize,
    load_status: LoadStatus,
}

impl FlightBoard {
    pub fn new() -> FlightBoard {
        FlightBoard::default()
    }

    /// fetches the arrival listing from the source and settles the board with
    /// the outcome. see [FlightBoard::apply_arrivals].
    pub async fn refresh<S>(&mut self, source: &S)
    where
        S: FlightSource + ?Sized,
    {
        self.begin_refresh();
        let result = source.fetch_arrivals().await;
        self.apply_arrivals(result);
    }

    pub fn begin_refresh(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    /// settles a refresh. a listing replaces every flight on the board; an error
    /// marks the board as failed and keeps the previous flights and page.
    pub fn apply_arrivals(&mut self, result: Result<Vec<RawFlightRecord>, FlightSourceError>) {
        match result {
            Ok(records) => {
                let flights = normalize_arrivals(&records);
                log::info!(
                    "arrival board refreshed with {} flights ({} records received)",
                    flights.len(),
                    records.len()
                );
                self.all_flights = flights;
                self.page = self.page.min(self.last_page());
                self.load_status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::warn!("arrival board refresh failed: {e}");
                self.load_status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// selects the zone shown on the board and returns to the first page.
    pub fn set_zone_filter<F>(&mut self, filter: F)
    where
        F: Into<ZoneFilter>,
    {
        self.zone_filter = filter.into();
        self.page = 0;
    }

    /// the rows of the current page after zone filtering. pages past the end
    /// of the filtered list are empty.
    pub fn visible_flights(&self) -> Vec<&FlightView> {
        self.filtered()
            .skip(self.page.saturating_mul(PAGE_SIZE))
            .take(PAGE_SIZE)
            .collect()
    }

    /// advances one page. no-op returning false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.has_next_page() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// goes back one page. no-op returning false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev_page() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page
            .saturating_add(1)
            .saturating_mul(PAGE_SIZE)
            < self.filtered_len()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(PAGE_SIZE)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn all_flights(&self) -> &[FlightView] {
        &self.all_flights
    }

    pub fn zone_filter(&self) -> ZoneFilter {
        self.zone_filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// number of arrivals per named zone, in board display order.
    pub fn zone_counts(&self) -> Vec<(ZoneName, usize)> {
        ZoneName::ALL
            .into_iter()
            .map(|zone| {
                let n = self.all_flights.iter().filter(|f| f.zone() == zone).count();
                (zone, n)
            })
            .collect()
    }

    fn filtered(&self) -> impl Iterator<Item = &FlightView> {
        self.all_flights
            .iter()
            .filter(|f| self.zone_filter.matches(f.zone()))
    }

    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{FlightBoard, PAGE_SIZE};
    use crate::board::{FlightSource, FlightSourceError, LoadStatus, ZoneFilter};
    use crate::flight::{RawFlightRecord, ZoneName};

    struct FakeSource {
        result: Result<Vec<RawFlightRecord>, FlightSourceError>,
    }

    #[async_trait]
    impl FlightSource for FakeSource {
        async fn fetch_arrivals(&self) -> Result<Vec<RawFlightRecord>, FlightSourceError> {
            self.result.clone()
        }
    }

    fn arrival(n: usize, gate: &str) -> RawFlightRecord {
        RawFlightRecord {
            flight_id: format!("KE{n:03}"),
            airport: "NRT".to_string(),
            estimated_date_time: format!("2024010112{:02}", n % 60),
            gatenumber: Some(gate.to_string()),
            remark: "도착".to_string(),
            codeshare: "Master".to_string(),
            ..Default::default()
        }
    }

    /// 7 arrivals in the west antler, 3 in terminal 2 east, 1 unknown gate
    fn mixed_arrivals() -> Vec<RawFlightRecord> {
        let mut records = vec![];
        for n in 0..7 {
            records.push(arrival(n, "33"));
        }
        for n in 7..10 {
            records.push(arrival(n, "240"));
        }
        records.push(arrival(10, "GATE"));
        records
    }

    fn loaded_board(records: Vec<RawFlightRecord>) -> FlightBoard {
        let mut board = FlightBoard::new();
        board.apply_arrivals(Ok(records));
        board
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let mut board = FlightBoard::new();
        assert_eq!(board.load_status(), &LoadStatus::Idle);
        let source = FakeSource {
            result: Ok(mixed_arrivals()),
        };
        board.refresh(&source).await;
        assert_eq!(board.load_status(), &LoadStatus::Loaded);
        assert_eq!(board.all_flights().len(), 11);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_flights_and_page() {
        let mut board = loaded_board(mixed_arrivals());
        assert!(board.next_page());
        let before = board.all_flights().to_vec();

        let source = FakeSource {
            result: Err(FlightSourceError::Protocol {
                code: "30".to_string(),
                message: "SERVICE_KEY_IS_NOT_REGISTERED_ERROR".to_string(),
            }),
        };
        board.refresh(&source).await;

        assert_eq!(board.all_flights(), before.as_slice());
        assert_eq!(board.page(), 1);
        let reason = board.load_status().failure_reason().expect("test failed");
        assert!(reason.contains("SERVICE_KEY_IS_NOT_REGISTERED_ERROR"));
    }

    #[tokio::test]
    async fn test_refresh_replaces_wholesale() {
        let mut board = loaded_board(mixed_arrivals());
        let source = FakeSource {
            result: Ok(vec![arrival(42, "101")]),
        };
        board.refresh(&source).await;
        assert_eq!(board.all_flights().len(), 1);
        assert_eq!(board.all_flights()[0].zone(), ZoneName::ConcourseEast);
    }

    #[tokio::test]
    async fn test_load_status_transitions() {
        let mut board = FlightBoard::new();
        assert_eq!(board.load_status(), &LoadStatus::Idle);

        let failing = FakeSource {
            result: Err(FlightSourceError::Network("connection refused".to_string())),
        };
        board.refresh(&failing).await;
        assert!(matches!(board.load_status(), LoadStatus::Failed(_)));
        assert!(board.all_flights().is_empty());

        board.begin_refresh();
        assert_eq!(board.load_status(), &LoadStatus::Loading);
        assert_eq!(board.load_status().failure_reason(), None);
        board.apply_arrivals(Ok(mixed_arrivals()));
        assert_eq!(board.load_status(), &LoadStatus::Loaded);
        assert_eq!(board.all_flights().len(), 11);

        board.begin_refresh();
        assert_eq!(board.load_status(), &LoadStatus::Loading);
        assert_eq!(board.all_flights().len(), 11);
        board.apply_arrivals(Ok(vec![arrival(42, "101")]));
        assert_eq!(board.load_status(), &LoadStatus::Loaded);
        assert_eq!(board.all_flights().len(), 1);
    }

    #[test]
    fn test_refresh_clamps_stale_page() {
        let mut board = loaded_board(mixed_arrivals());
        assert!(board.next_page());
        assert!(board.next_page());
        assert_eq!(board.page(), 2);
        board.apply_arrivals(Ok(vec![arrival(0, "5"), arrival(1, "6")]));
        assert_eq!(board.page(), 0);
        assert_eq!(board.visible_flights().len(), 2);
    }

    #[test]
    fn test_zone_filter_resets_page() {
        let mut board = loaded_board(mixed_arrivals());
        assert!(board.next_page());
        board.set_zone_filter(ZoneName::T2East);
        assert_eq!(board.page(), 0);
        let visible = board.visible_flights();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|f| f.zone() == ZoneName::T2East));
        assert_eq!(board.all_flights().len(), 11);
    }

    #[test]
    fn test_every_zone_filter_shows_only_that_zone() {
        let records = ZoneName::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, zone)| {
                let gate = *zone.gate_range().expect("named zone").start();
                vec![arrival(i * 2, &gate.to_string()), arrival(i * 2 + 1, &gate.to_string())]
            })
            .collect();
        let mut board = loaded_board(records);
        for zone in ZoneName::ALL {
            board.set_zone_filter(zone);
            assert_eq!(board.page(), 0);
            let visible = board.visible_flights();
            assert_eq!(visible.len(), 2, "zone {zone}");
            assert!(visible.iter().all(|f| f.zone() == zone));
        }
        board.set_zone_filter(ZoneFilter::All);
        assert_eq!(board.filtered_len(), 16);
    }

    #[test]
    fn test_pagination_boundary() {
        let mut board = loaded_board(mixed_arrivals());
        board.set_zone_filter(ZoneName::WestAntler);
        assert_eq!(board.filtered_len(), 7);
        assert_eq!(board.page_count(), 2);
        assert_eq!(board.visible_flights().len(), PAGE_SIZE);
        assert!(!board.prev_page());
        assert!(board.next_page());
        assert_eq!(board.visible_flights().len(), 2);
        assert!(!board.next_page());
        assert_eq!(board.page(), 1);
        assert!(board.prev_page());
        assert_eq!(board.page(), 0);
    }

    #[test]
    fn test_visible_flights_is_idempotent() {
        let mut board = loaded_board(mixed_arrivals());
        board.next_page();
        let first = board.visible_flights();
        let second = board.visible_flights();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_board() {
        let mut board = FlightBoard::new();
        assert!(board.visible_flights().is_empty());
        assert_eq!(board.page_count(), 0);
        assert!(!board.next_page());
        assert!(!board.prev_page());
        board.set_zone_filter(ZoneName::T2West);
        assert!(board.visible_flights().is_empty());
    }

    #[test]
    fn test_zone_counts() {
        let board = loaded_board(mixed_arrivals());
        let counts = board.zone_counts();
        assert_eq!(counts.len(), 8);
        assert_eq!(counts[0], (ZoneName::WestAntler, 7));
        assert_eq!(counts[6], (ZoneName::T2East, 3));
        assert_eq!(counts[1], (ZoneName::WestCorridor, 0));
    }
}
