#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use pangan_dashboard::config::Config;
    use pangan_dashboard::hooks::use_prices::DataState;
    use pangan_dashboard::models::{
        dataset::{DatasetSource, resolve_dataset},
        error::AppError,
        filter::{Condition, FilterState, MarketFilter},
        pagination::Pagination,
        price::{Direction, PriceChange, PriceRecord},
        snapshot::Snapshot,
        trend::{ChartTable, TrendPoint, trend_or_placeholder, weekly_trend},
    };
    use pangan_dashboard::services::{
        api::parse_price_feed, cache::FeedCache, fallback::fallback_records,
    };
    use serde_json::json;
    use std::rc::Rc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    // Helper function to create a dated record
    fn record(id: i64, name: &str, market: &str, d: u32, price: f64, previous: f64) -> PriceRecord {
        PriceRecord {
            id,
            commodity_id: Some(id),
            name: name.to_string(),
            date: Some(day(d)),
            price,
            previous_price: previous,
            unit: "kg".to_string(),
            market: market.to_string(),
            ..PriceRecord::default()
        }
    }

    // Helper function to create a feed spanning two days and two markets
    fn create_test_feed() -> Vec<PriceRecord> {
        vec![
            record(1, "Beras Premium", "Pasar Kawali", 24, 14_000.0, 13_500.0),
            record(2, "Bawang Merah", "Pasar Manis", 24, 39_000.0, 39_000.0),
            record(1, "Beras Premium", "Pasar Kawali", 25, 14_200.0, 14_000.0),
            record(2, "Bawang Merah", "Pasar Manis", 25, 38_000.0, 39_000.0),
            record(3, "Cabai Rawit", "Pasar Kawali", 25, 45_000.0, 45_000.0),
            record(4, "Gula Pasir", "Pasar Ciamis", 25, 17_500.0, 0.0),
        ]
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::Network("timeout".to_string()).to_string(),
            "Network error: timeout"
        );
        assert_eq!(
            AppError::DataError("bad shape".to_string()).to_string(),
            "Data error: bad shape"
        );
    }

    // ===== Price Change Tests =====

    #[test]
    fn test_price_change_cases() {
        let same = PriceChange::between(100.0, 100.0);
        assert_eq!(same.percent, 0.0);
        assert_eq!(same.direction(), Direction::Unchanged);

        let up = PriceChange::between(110.0, 100.0);
        assert_eq!(up.percent, 10.0);
        assert_eq!(up.direction(), Direction::Up);

        let down = PriceChange::between(90.0, 100.0);
        assert_eq!(down.percent, -10.0);
        assert_eq!(down.direction(), Direction::Down);

        let no_previous = PriceChange::between(250.0, 0.0);
        assert_eq!(no_previous.percent, 0.0);
        assert_eq!(no_previous.direction(), Direction::Unchanged);
    }

    // ===== Snapshot Tests =====

    #[test]
    fn test_snapshot_prefers_today() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(24));

        assert_eq!(snapshot.date(), Some(day(24)));
        assert_eq!(snapshot.records().len(), 2);
        assert!(snapshot.records().iter().all(|r| r.date == Some(day(24))));
    }

    #[test]
    fn test_snapshot_falls_back_to_latest_date() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(30));

        assert_eq!(snapshot.date(), Some(day(25)));
        assert_eq!(snapshot.records().len(), 4);
        // Input order is preserved
        let ids: Vec<i64> = snapshot.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_snapshot_of_empty_feed() {
        let snapshot = Snapshot::select(&[], day(25));
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.date(), None);
        assert!(snapshot.markets().is_empty());

        let filtered = FilterState::default().apply(snapshot.records());
        assert!(filtered.is_empty());

        let pagination = Pagination::new(filtered.len(), 9, 1);
        assert_eq!(pagination.total_pages(), 0);
        assert!(pagination.slice(&filtered).is_empty());
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_market_set_unique_in_first_seen_order() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(25));

        assert_eq!(
            snapshot.markets(),
            vec!["Pasar Kawali", "Pasar Manis", "Pasar Ciamis"]
        );
    }

    // ===== Filter Tests =====

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(25));
        let state = FilterState::default().with_search("BERAS");

        let result = state.apply(snapshot.records());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Beras Premium");
    }

    #[test]
    fn test_tab_overrides_market_dropdown() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(25));
        let state = FilterState::default()
            .with_market(MarketFilter::Market("Pasar Manis".to_string()))
            .with_tab(MarketFilter::Market("Pasar Kawali".to_string()));

        let result = state.apply(snapshot.records());
        assert!(result.iter().all(|r| r.market == "Pasar Kawali"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_condition_filters() {
        let feed = create_test_feed();
        let snapshot = Snapshot::select(&feed, day(25));

        let count = |condition: Condition| {
            FilterState::default()
                .with_condition(condition)
                .apply(snapshot.records())
                .len()
        };

        assert_eq!(count(Condition::All), 4);
        assert_eq!(count(Condition::Up), 1);
        assert_eq!(count(Condition::Down), 1);
        // Unchanged includes the record with no previous price
        assert_eq!(count(Condition::Unchanged), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let feed = create_test_feed();
        let state = FilterState::default()
            .with_search("a")
            .with_condition(Condition::Unchanged);

        let once = state.apply(&feed);
        let twice = state.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_edit_resets_page() {
        let state = FilterState::default().with_page(3);
        assert_eq!(state.page, 3);
        assert_eq!(state.with_search("cabai").page, 1);
        assert_eq!(state.with_condition(Condition::Down).page, 1);
    }

    // ===== Pagination Tests =====

    #[test]
    fn test_pagination_twenty_items() {
        let items: Vec<usize> = (0..20).collect();

        let first = Pagination::new(items.len(), 9, 1);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.slice(&items), &items[0..9]);

        let last = Pagination::new(items.len(), 9, 3);
        assert_eq!(last.slice(&items), &items[18..20]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_pagination_clamps_stale_page() {
        let pagination = Pagination::new(4, 9, 3);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.range(), 0..4);
    }

    // ===== Trend Tests =====

    #[test]
    fn test_weekly_trend_averages_per_date() {
        let records = vec![
            record(7, "Telur", "Pasar Kawali", 1, 100.0, 0.0),
            record(7, "Telur", "Pasar Manis", 1, 120.0, 0.0),
            record(7, "Telur", "Pasar Kawali", 2, 110.0, 0.0),
        ];

        assert_eq!(
            weekly_trend(&records, Some(7), 7),
            vec![
                TrendPoint {
                    date: day(1),
                    price: 110
                },
                TrendPoint {
                    date: day(2),
                    price: 110
                },
            ]
        );
    }

    #[test]
    fn test_chart_table_for_export() {
        let feed = create_test_feed();
        let table = ChartTable::for_commodity(&feed, Some(2));

        assert_eq!(table.markets, vec!["Pasar Manis"]);
        assert_eq!(table.dates(), vec![day(24), day(25)]);
        assert_eq!(
            table.to_csv().unwrap(),
            "Tanggal,Pasar Manis\n2025-07-24,39000\n2025-07-25,38000\n"
        );
    }

    // ===== Feed and Dataset Tests =====

    #[test]
    fn test_parse_wrapped_feed() {
        let body = json!({
            "data": [
                {
                    "id": 1,
                    "komoditi_id": 5,
                    "nama": "Bawang Merah",
                    "tanggal": "2025-07-25",
                    "harga": "39818",
                    "harga_sebelumnya": 39000,
                    "nama_satuan": "kg",
                    "nama_pasar": "Pasar Kawali"
                }
            ]
        });

        let records = parse_price_feed(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, 39_818.0);
        assert_eq!(records[0].date, Some(day(25)));
    }

    #[test]
    fn test_dataset_falls_back_on_error_and_empty() {
        let fallback = fallback_records();
        assert!(!fallback.is_empty());

        let failed = resolve_dataset(
            Err(AppError::Network("offline".to_string())),
            None,
            fallback.clone(),
        );
        assert_eq!(failed.source, DatasetSource::Fallback);
        assert_eq!(failed.notice.as_deref(), Some("Network error: offline"));

        let empty = resolve_dataset(Ok(Rc::new(Vec::new())), None, fallback.clone());
        assert!(empty.is_fallback());
        assert_eq!(empty.records, fallback);

        let live = Rc::new(create_test_feed());
        let remote = resolve_dataset(Ok(live.clone()), None, fallback);
        assert_eq!(remote.source, DatasetSource::Remote);
        assert_eq!(remote.records, live);
        assert!(remote.notice.is_none());
    }

    #[test]
    fn test_data_state_accessors() {
        let state = DataState::Loading;
        assert!(state.is_loading());
        assert!(state.data().is_none());

        let dataset = resolve_dataset(Err(AppError::RateLimited), None, fallback_records());
        let state = DataState::Loaded(Rc::new(dataset));
        assert!(!state.is_loading());
        assert!(state.notice().is_some());
    }

    #[test]
    fn test_feed_cache_last_write_wins() {
        let start = Utc.with_ymd_and_hms(2025, 7, 25, 8, 0, 0).unwrap();
        let mut cache = FeedCache::new(Duration::minutes(5), Duration::minutes(10));

        let older = cache.begin_fetch();
        let newer = cache.begin_fetch();

        let newer_data = Rc::new(create_test_feed());
        assert!(cache.complete(newer, newer_data.clone(), start));
        assert!(!cache.complete(older, Rc::new(Vec::new()), start));

        assert_eq!(cache.fresh(start + Duration::minutes(1)), Some(newer_data));
        assert!(cache.fresh(start + Duration::minutes(6)).is_none());
        assert!(cache.refetch_due(start + Duration::minutes(10)));
    }

    #[test]
    fn test_failed_refresh_keeps_last_successful_feed() {
        let mut cache = FeedCache::new(Duration::minutes(5), Duration::minutes(10));
        let start = Utc.with_ymd_and_hms(2025, 7, 25, 8, 0, 0).unwrap();
        let live = Rc::new(create_test_feed());

        let ticket = cache.begin_fetch();
        assert!(cache.complete(ticket, live.clone(), start));

        let dataset = resolve_dataset(
            Err(AppError::Network("offline".to_string())),
            cache.data(),
            fallback_records(),
        );
        assert_eq!(dataset.source, DatasetSource::Resident);
        assert_eq!(dataset.records, live);
        assert_eq!(dataset.notice.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn test_fallback_dataset_shows_placeholder_trends() {
        let dataset = resolve_dataset(Err(AppError::RateLimited), None, fallback_records());
        let record = &dataset.records[0];

        let trend = trend_or_placeholder(
            dataset.trend_history(),
            record,
            day(30),
            Config::TREND_WINDOW,
        );
        assert_eq!(trend.len(), Config::TREND_WINDOW);
        assert!(trend.iter().all(|p| p.price == record.price.round() as i64));
        assert_eq!(trend.last().map(|p| p.date), record.date);
    }
}
