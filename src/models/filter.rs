use super::error::AppError;
use super::price::{Direction, PriceRecord};

/// Sentinel value used by the market dropdown and tabs for "every market".
pub const ALL: &str = "all";

/// Price-direction filter ("kondisi harga").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    All,
    /// naik
    Up,
    /// turun
    Down,
    /// tetap
    Unchanged,
}

impl Condition {
    /// Returns the value used in the condition dropdown.
    pub fn code(&self) -> &'static str {
        match self {
            Condition::All => ALL,
            Condition::Up => "naik",
            Condition::Down => "turun",
            Condition::Unchanged => "tetap",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::All => "Semua",
            Condition::Up => "Naik",
            Condition::Down => "Turun",
            Condition::Unchanged => "Tetap",
        }
    }

    pub fn all() -> &'static [Condition] {
        &[
            Condition::All,
            Condition::Up,
            Condition::Down,
            Condition::Unchanged,
        ]
    }

    /// Exact comparison: "tetap" only matches a percentage of exactly zero.
    pub fn matches(&self, record: &PriceRecord) -> bool {
        match self {
            Condition::All => true,
            Condition::Up => record.change().direction() == Direction::Up,
            Condition::Down => record.change().direction() == Direction::Down,
            Condition::Unchanged => record.change().percent == 0.0,
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            ALL => Ok(Condition::All),
            "naik" => Ok(Condition::Up),
            "turun" => Ok(Condition::Down),
            "tetap" => Ok(Condition::Unchanged),
            _ => Err(AppError::ConfigError(format!("Invalid price condition: {s}"))),
        }
    }
}

/// Selection on the market axis, written by both the dropdown and the tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MarketFilter {
    #[default]
    All,
    Market(String),
}

impl MarketFilter {
    /// Maps the "all" sentinel to `All`, anything else to an exact market name.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            MarketFilter::All
        } else {
            MarketFilter::Market(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MarketFilter::All => ALL,
            MarketFilter::Market(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MarketFilter::All)
    }

    pub fn matches(&self, record: &PriceRecord) -> bool {
        match self {
            MarketFilter::All => true,
            MarketFilter::Market(name) => record.market == *name,
        }
    }
}

/// Everything the user has selected on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub market: MarketFilter,
    pub tab: MarketFilter,
    pub condition: Condition,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            market: MarketFilter::All,
            tab: MarketFilter::All,
            condition: Condition::All,
            page: 1,
        }
    }
}

impl FilterState {
    // Every filter edit starts again from the first page.

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_market(&self, market: MarketFilter) -> Self {
        Self {
            market,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_tab(&self, tab: MarketFilter) -> Self {
        Self {
            tab,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_condition(&self, condition: Condition) -> Self {
        Self {
            condition,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Tab selection takes precedence over the dropdown when it is not "all".
    pub fn resolved_market(&self) -> &MarketFilter {
        if self.tab.is_all() {
            &self.market
        } else {
            &self.tab
        }
    }

    fn matches_search(&self, record: &PriceRecord) -> bool {
        record
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn matches(&self, record: &PriceRecord) -> bool {
        self.matches_search(record)
            && self.resolved_market().matches(record)
            && self.condition.matches(record)
    }

    /// Stable filter over the snapshot; input order is preserved.
    pub fn apply(&self, records: &[PriceRecord]) -> Vec<PriceRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
