//! Memoized price feed with freshness tracking.
//!
//! The cache holds at most one record sequence. Every fetch is issued a
//! ticket; a result is only accepted when its ticket is newer than the one
//! that produced the resident data, so a slow response can never overwrite
//! a newer one.

use crate::models::price::PriceRecord;
use chrono::{DateTime, Duration, Utc};
use std::rc::Rc;

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct FeedCache {
    data: Option<Rc<Vec<PriceRecord>>>,
    fetched_at: Option<DateTime<Utc>>,
    stale_after: Duration,
    refetch_interval: Duration,
    issued: u64,
    resident: u64,
}

impl FeedCache {
    pub fn new(stale_after: Duration, refetch_interval: Duration) -> Self {
        Self {
            data: None,
            fetched_at: None,
            stale_after,
            refetch_interval,
            issued: 0,
            resident: 0,
        }
    }

    pub fn data(&self) -> Option<Rc<Vec<PriceRecord>>> {
        self.data.clone()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn refetch_interval(&self) -> Duration {
        self.refetch_interval
    }

    /// Resident data younger than `stale_after`, if any.
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<Rc<Vec<PriceRecord>>> {
        match (self.data.as_ref(), self.fetched_at) {
            (Some(data), Some(at)) if now - at < self.stale_after => Some(data.clone()),
            _ => None,
        }
    }

    /// True once the background refresh interval has elapsed (or nothing
    /// was ever fetched).
    pub fn refetch_due(&self, now: DateTime<Utc>) -> bool {
        self.fetched_at
            .is_none_or(|at| now - at >= self.refetch_interval)
    }

    /// Issues a ticket for a fetch that is about to start.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Stores the result of a completed fetch. Returns `false` and leaves the
    /// cache untouched when a newer result is already resident.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        records: Rc<Vec<PriceRecord>>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.0 <= self.resident {
            return false;
        }

        self.resident = ticket.0;
        self.data = Some(records);
        self.fetched_at = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cache() -> FeedCache {
        FeedCache::new(Duration::minutes(5), Duration::minutes(10))
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 25, 8, minute, 0).unwrap()
    }

    fn records(n: i64) -> Rc<Vec<PriceRecord>> {
        Rc::new(
            (1..=n)
                .map(|id| PriceRecord {
                    id,
                    ..PriceRecord::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_cache_is_never_fresh() {
        let cache = cache();
        assert!(cache.fresh(at(0)).is_none());
        assert!(cache.refetch_due(at(0)));
    }

    #[test]
    fn test_freshness_window() {
        let mut cache = cache();
        let ticket = cache.begin_fetch();
        assert!(cache.complete(ticket, records(2), at(0)));

        assert_eq!(cache.fresh(at(4)).map(|d| d.len()), Some(2));
        assert!(cache.fresh(at(5)).is_none());
        assert!(!cache.refetch_due(at(9)));
        assert!(cache.refetch_due(at(10)));
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut cache = cache();
        let slow = cache.begin_fetch();
        let fast = cache.begin_fetch();
        assert!(cache.complete(fast, records(3), at(1)));
        assert!(!cache.complete(slow, records(1), at(2)));

        assert_eq!(cache.data().map(|d| d.len()), Some(3));
        assert_eq!(cache.fetched_at(), Some(at(1)));
    }

    #[test]
    fn test_older_result_accepted_when_newer_failed() {
        let mut cache = cache();
        let first = cache.begin_fetch();
        let _failed = cache.begin_fetch();

        // The newer fetch never completes, so the older result still lands
        assert!(cache.complete(first, records(4), at(3)));
        assert_eq!(cache.data().map(|d| d.len()), Some(4));
    }
}
