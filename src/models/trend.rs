use super::error::AppError;
use super::price::PriceRecord;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Averaged price of one commodity on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub price: i64,
}

/// Per-date average price of a commodity across all markets, ascending by
/// date and limited to the most recent `window` dates.
///
/// Works on the full feed rather than the current snapshot, so the series
/// covers every date the feed reports. Records without a commodity id never
/// form a trend.
pub fn weekly_trend(
    records: &[PriceRecord],
    commodity_id: Option<i64>,
    window: usize,
) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for record in of_commodity(records, commodity_id) {
        if let Some(date) = record.date {
            let (sum, count) = by_date.entry(date).or_insert((0.0, 0));
            *sum += record.price;
            *count += 1;
        }
    }

    let points: Vec<TrendPoint> = by_date
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            price: (sum / count as f64).round() as i64,
        })
        .collect();

    let skip = points.len().saturating_sub(window);
    points.into_iter().skip(skip).collect()
}

fn of_commodity(
    records: &[PriceRecord],
    commodity_id: Option<i64>,
) -> impl Iterator<Item = &PriceRecord> {
    records
        .iter()
        .filter(move |r| commodity_id.is_some() && r.commodity_id == commodity_id)
}

/// Flat series used when a commodity has no history in the feed.
pub fn placeholder_trend(price: f64, end: NaiveDate, window: usize) -> Vec<TrendPoint> {
    let price = price.round() as i64;
    (0..window)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(back as u64)))
        .map(|date| TrendPoint { date, price })
        .collect()
}

/// Trend shown on a record's card: the commodity's weekly trend, or a flat
/// series ending on the record's date when the feed has no history for it.
pub fn trend_or_placeholder(
    records: &[PriceRecord],
    record: &PriceRecord,
    today: NaiveDate,
    window: usize,
) -> Vec<TrendPoint> {
    let trend = weekly_trend(records, record.commodity_id, window);
    if trend.is_empty() {
        placeholder_trend(record.price, record.date.unwrap_or(today), window)
    } else {
        trend
    }
}

/// A commodity's prices laid out for charting and export: one row per date,
/// one column per market.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartTable {
    pub markets: Vec<String>,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub date: NaiveDate,
    /// One entry per market, aligned with `ChartTable::markets`.
    pub values: Vec<Option<f64>>,
}

impl ChartTable {
    /// Builds the table for one commodity. Repeated observations of the same
    /// market on the same date are averaged; undated records are skipped.
    /// An absent id yields an empty table.
    pub fn for_commodity(records: &[PriceRecord], commodity_id: Option<i64>) -> Self {
        let mut markets: Vec<String> = Vec::new();
        let mut cells: BTreeMap<NaiveDate, BTreeMap<usize, (f64, usize)>> = BTreeMap::new();

        for record in of_commodity(records, commodity_id) {
            let Some(date) = record.date else { continue };

            let column = match markets.iter().position(|m| *m == record.market) {
                Some(index) => index,
                None => {
                    markets.push(record.market.clone());
                    markets.len() - 1
                }
            };

            let (sum, count) = cells
                .entry(date)
                .or_default()
                .entry(column)
                .or_insert((0.0, 0));
            *sum += record.price;
            *count += 1;
        }

        let rows = cells
            .into_iter()
            .map(|(date, columns)| ChartRow {
                date,
                values: (0..markets.len())
                    .map(|i| columns.get(&i).map(|(sum, count)| sum / *count as f64))
                    .collect(),
            })
            .collect();

        Self { markets, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only the most recent `n` dates.
    pub fn tail(&self, n: usize) -> Self {
        let skip = self.rows.len().saturating_sub(n);
        Self {
            markets: self.markets.clone(),
            rows: self.rows[skip..].to_vec(),
        }
    }

    /// Category labels for the x axis.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|row| row.date).collect()
    }

    /// Values of one market column, in date order.
    pub fn column(&self, market_index: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.values.get(market_index).copied().flatten())
            .collect()
    }

    /// Row-wise CSV: a `Tanggal` column followed by one column per market.
    /// Missing observations are written as empty cells.
    pub fn to_csv(&self) -> Result<String, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header = std::iter::once("Tanggal").chain(self.markets.iter().map(String::as_str));
        writer
            .write_record(header)
            .map_err(|e| AppError::ExportError(format!("Failed to write CSV header: {e}")))?;

        for row in &self.rows {
            let record = std::iter::once(row.date.format("%Y-%m-%d").to_string()).chain(
                row.values
                    .iter()
                    .map(|v| v.map(|price| price.round().to_string()).unwrap_or_default()),
            );
            writer
                .write_record(record)
                .map_err(|e| AppError::ExportError(format!("Failed to write CSV row: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::ExportError(format!("Failed to flush CSV: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::ExportError(format!("CSV is not valid UTF-8: {e}")))
    }
}
