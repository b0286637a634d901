use super::error::AppError;
use super::price::PriceRecord;
use std::rc::Rc;

/// Where the resident records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// The fetch that just completed
    Remote,
    /// The last successful fetch, kept after a later one failed
    Resident,
    /// Embedded sample records
    Fallback,
}

/// The record sequence the pipeline currently works on.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Rc<Vec<PriceRecord>>,
    pub source: DatasetSource,
    /// Why the latest fetch could not be shown, if it could not.
    pub notice: Option<String>,
}

impl Dataset {
    pub fn is_fallback(&self) -> bool {
        self.source == DatasetSource::Fallback
    }

    /// Records trends are aggregated from. Sample records carry no history,
    /// so a fallback dataset yields none and every card gets a placeholder.
    pub fn trend_history(&self) -> &[PriceRecord] {
        if self.is_fallback() {
            &[]
        } else {
            &self.records
        }
    }
}

/// Resolution in three tiers: the fetched records when they are non-empty,
/// else the last successfully fetched records, else the fallback. Any tier
/// below the first carries the failure as its notice.
pub fn resolve_dataset(
    primary: Result<Rc<Vec<PriceRecord>>, AppError>,
    resident: Option<Rc<Vec<PriceRecord>>>,
    fallback: Rc<Vec<PriceRecord>>,
) -> Dataset {
    let failure = match primary {
        Ok(records) if !records.is_empty() => {
            return Dataset {
                records,
                source: DatasetSource::Remote,
                notice: None,
            };
        }
        Ok(_) => AppError::EmptyData,
        Err(e) => e,
    };

    match resident.filter(|records| !records.is_empty()) {
        Some(records) => Dataset {
            records,
            source: DatasetSource::Resident,
            notice: Some(failure.to_string()),
        },
        None => Dataset {
            records: fallback,
            source: DatasetSource::Fallback,
            notice: Some(failure.to_string()),
        },
    }
}
