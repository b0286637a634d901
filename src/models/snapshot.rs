use super::price::PriceRecord;
use chrono::NaiveDate;

/// Records sharing one observation date, selected as "current" for display.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Snapshot {
    date: Option<NaiveDate>,
    records: Vec<PriceRecord>,
}

impl Snapshot {
    /// Picks today's records, or the records of the latest date in the feed
    /// when nothing was reported today.
    ///
    /// Records without a usable date sort below every dated record, so they
    /// only form the snapshot when no record carries a date at all.
    pub fn select(records: &[PriceRecord], today: NaiveDate) -> Self {
        let todays: Vec<PriceRecord> = records
            .iter()
            .filter(|r| r.date == Some(today))
            .cloned()
            .collect();

        if !todays.is_empty() {
            return Self {
                date: Some(today),
                records: todays,
            };
        }

        let Some(latest) = records.iter().map(|r| r.date).max() else {
            return Self::default();
        };

        Self {
            date: latest,
            records: records
                .iter()
                .filter(|r| r.date == latest)
                .cloned()
                .collect(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct market names in first-seen order.
    pub fn markets(&self) -> Vec<String> {
        let mut markets: Vec<String> = Vec::new();
        for record in &self.records {
            if !record.market.is_empty() && !markets.contains(&record.market) {
                markets.push(record.market.clone());
            }
        }
        markets
    }
}
