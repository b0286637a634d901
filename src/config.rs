/// Which record source the dashboard is driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Only the embedded sample dataset, no network access
    Static,
    /// The public price feed, with the embedded dataset as fallback
    Remote,
}

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Record source used by the dashboard
    pub const DATA_SOURCE: DataSource = DataSource::Remote;

    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (10 minutes = 600,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 600_000;

    /// Age after which cached feed data is refetched on demand (5 minutes)
    pub const STALE_AFTER_MS: u32 = 300_000;

    /// Maximum attempts for rate-limited requests
    pub const MAX_RETRY_ATTEMPTS: u32 = 3;

    /// Product cards per page
    pub const PAGE_SIZE: usize = 9;

    /// Number of dates shown in trend sparklines and charts
    pub const TREND_WINDOW: usize = 7;

    /// Delay before search input is applied to the filters
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;
}
