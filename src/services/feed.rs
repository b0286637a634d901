use crate::config::{Config, DataSource};
use crate::models::{
    dataset::{Dataset, DatasetSource, resolve_dataset},
    error::AppError,
    price::PriceRecord,
};
use crate::services::{api::PriceFeedClient, cache::FeedCache, fallback::fallback_records};
use chrono::{Duration, Utc};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the feed cache and is the only writer to it.
#[derive(Debug)]
pub struct PriceFeed {
    client: PriceFeedClient,
    cache: RefCell<FeedCache>,
}

impl PriceFeed {
    /// Creates a feed with the default client and refresh timings.
    pub fn new() -> Result<Self, AppError> {
        Ok(Self::with_client(PriceFeedClient::new()?))
    }

    pub fn with_client(client: PriceFeedClient) -> Self {
        let cache = FeedCache::new(
            Duration::milliseconds(i64::from(Config::STALE_AFTER_MS)),
            Duration::milliseconds(i64::from(Config::POLLING_INTERVAL_MS)),
        );

        Self {
            client,
            cache: RefCell::new(cache),
        }
    }

    /// Resident records while they are fresh, otherwise a new fetch.
    pub async fn get_or_refresh(&self) -> Result<Rc<Vec<PriceRecord>>, AppError> {
        if let Some(records) = self.cache.borrow().fresh(Utc::now()) {
            return Ok(records);
        }

        self.refresh().await
    }

    /// Records of the last successful fetch, if any.
    pub fn resident(&self) -> Option<Rc<Vec<PriceRecord>>> {
        self.cache.borrow().data()
    }

    /// Whether a background poll should go to the network.
    pub fn refetch_due(&self) -> bool {
        self.cache.borrow().refetch_due(Utc::now())
    }

    /// Delay between background polls.
    pub fn poll_interval_ms(&self) -> u32 {
        let interval = self.cache.borrow().refetch_interval().num_milliseconds();
        u32::try_from(interval).unwrap_or(Config::POLLING_INTERVAL_MS)
    }

    /// Fetches unconditionally and replaces the resident records, unless a
    /// newer fetch already landed, in which case that newer data is returned.
    /// An empty response never replaces resident records.
    pub async fn refresh(&self) -> Result<Rc<Vec<PriceRecord>>, AppError> {
        let ticket = self.cache.borrow_mut().begin_fetch();
        let records = Rc::new(self.client.fetch_latest_prices().await?);
        if records.is_empty() {
            return Ok(records);
        }

        let mut cache = self.cache.borrow_mut();
        if cache.complete(ticket, records.clone(), Utc::now()) {
            let at = cache.fetched_at().map(|at| at.to_rfc3339()).unwrap_or_default();
            gloo::console::log!(format!("Loaded {} price records at {at}", records.len()));
            Ok(records)
        } else {
            gloo::console::log!("Discarding superseded price feed response");
            Ok(cache.data().unwrap_or(records))
        }
    }
}

/// Produces the dataset the dashboard renders. Feed failures and empty
/// responses are absorbed here: the last successful fetch is kept when
/// there is one, the embedded records are substituted otherwise.
///
/// `force_refresh` is set by background polls, which go to the network once
/// the refetch interval has elapsed even if the resident data is fresh.
pub async fn load_dataset(
    source: DataSource,
    feed: &Result<PriceFeed, AppError>,
    force_refresh: bool,
) -> Dataset {
    let fallback = fallback_records();

    let feed = match (source, feed) {
        (DataSource::Static, _) => {
            return Dataset {
                records: fallback,
                source: DatasetSource::Fallback,
                notice: None,
            };
        }
        (DataSource::Remote, Ok(feed)) => feed,
        (DataSource::Remote, Err(e)) => {
            return resolve_dataset(Err(e.clone()), None, fallback);
        }
    };

    let primary = if force_refresh && feed.refetch_due() {
        feed.refresh().await
    } else {
        feed.get_or_refresh().await
    };

    match &primary {
        Err(e) => {
            gloo::console::warn!(format!("Price feed unavailable: {e}"));
        }
        Ok(records) if records.is_empty() => {
            gloo::console::warn!("Price feed returned no records");
        }
        Ok(_) => {}
    }

    let dataset = resolve_dataset(primary, feed.resident(), fallback);
    if dataset.source == DatasetSource::Resident {
        gloo::console::log!("Keeping the last successful price feed");
    }
    dataset
}
