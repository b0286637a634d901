use super::serde_util;
use chrono::NaiveDate;
use serde::Deserialize;

/// One observed price for one commodity at one market on one date.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct PriceRecord {
    #[serde(default, deserialize_with = "serde_util::id")]
    pub id: i64,
    #[serde(
        rename = "komoditi_id",
        default,
        deserialize_with = "serde_util::optional_id"
    )]
    pub commodity_id: Option<i64>,
    #[serde(rename = "nama", default, deserialize_with = "serde_util::string")]
    pub name: String,
    #[serde(rename = "foto", default, deserialize_with = "serde_util::optional_string")]
    pub image: Option<String>,
    #[serde(rename = "tanggal", default, deserialize_with = "serde_util::date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "harga", default, deserialize_with = "serde_util::amount")]
    pub price: f64,
    #[serde(
        rename = "harga_sebelumnya",
        default,
        deserialize_with = "serde_util::amount"
    )]
    pub previous_price: f64,
    #[serde(rename = "nama_satuan", default, deserialize_with = "serde_util::string")]
    pub unit: String,
    #[serde(rename = "nama_pasar", default, deserialize_with = "serde_util::string")]
    pub market: String,
}

impl PriceRecord {
    pub fn change(&self) -> PriceChange {
        PriceChange::between(self.price, self.previous_price)
    }
}

/// Direction of a price movement ("kondisi harga").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Harga naik
    Up,
    /// Harga turun
    Down,
    /// Harga tetap
    Unchanged,
}

impl Direction {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Up => "trend-up",
            Direction::Down => "trend-down",
            Direction::Unchanged => "trend-unchanged",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Unchanged => "→",
        }
    }

    /// Returns the legend label shown next to the color swatch
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Harga Naik",
            Direction::Down => "Harga Turun",
            Direction::Unchanged => "Harga Tetap",
        }
    }
}

/// Change between a price and the previous observation of the same
/// commodity at the same market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub percent: f64,
    pub nominal: f64,
}

impl PriceChange {
    /// A previous price of zero means there is no prior observation, so the
    /// percentage is reported as 0.
    pub fn between(price: f64, previous_price: f64) -> Self {
        let percent = if previous_price > 0.0 {
            (price - previous_price) / previous_price * 100.0
        } else {
            0.0
        };

        Self {
            percent,
            nominal: price - previous_price,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.percent > 0.0 {
            Direction::Up
        } else if self.percent < 0.0 {
            Direction::Down
        } else {
            Direction::Unchanged
        }
    }
}

/// Commodity summary served by the by-id endpoint.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct CommodityData {
    #[serde(default, deserialize_with = "serde_util::id")]
    pub id: i64,
    #[serde(rename = "nama", default, deserialize_with = "serde_util::string")]
    pub name: String,
    #[serde(rename = "kategori", default, deserialize_with = "serde_util::string")]
    pub category: String,
    #[serde(rename = "satuan", default, deserialize_with = "serde_util::string")]
    pub unit: String,
    #[serde(
        rename = "harga_rata_rata",
        default,
        deserialize_with = "serde_util::amount"
    )]
    pub average_price: f64,
    #[serde(
        rename = "perubahan_persen",
        default,
        deserialize_with = "serde_util::signed_amount"
    )]
    pub percent_change: f64,
    #[serde(
        rename = "perubahan_nominal",
        default,
        deserialize_with = "serde_util::signed_amount"
    )]
    pub nominal_change: f64,
    #[serde(rename = "gambar", default, deserialize_with = "serde_util::optional_string")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_directions() {
        assert_eq!(PriceChange::between(100.0, 100.0).percent, 0.0);
        assert_eq!(PriceChange::between(110.0, 100.0).percent, 10.0);
        assert_eq!(PriceChange::between(90.0, 100.0).percent, -10.0);
        assert_eq!(PriceChange::between(12_345.0, 0.0).percent, 0.0);

        assert_eq!(
            PriceChange::between(110.0, 100.0).direction(),
            Direction::Up
        );
        assert_eq!(
            PriceChange::between(90.0, 100.0).direction(),
            Direction::Down
        );
        assert_eq!(
            PriceChange::between(50.0, 0.0).direction(),
            Direction::Unchanged
        );
    }

    #[test]
    fn test_nominal_change_ignores_missing_previous() {
        let change = PriceChange::between(39_818.0, 37_768.0);
        assert_eq!(change.nominal, 2_050.0);

        // Nominal change is still price - previous even without prior data
        assert_eq!(PriceChange::between(500.0, 0.0).nominal, 500.0);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": 1,
            "komoditi_id": 19,
            "nama": "Bawang Bombay",
            "foto": "komoditi/January2024/tepcwDcugMfllSYMBG7Y.jpg",
            "tanggal": "2025-07-25",
            "harga": 39818,
            "harga_sebelumnya": 37768,
            "nama_satuan": "kg",
            "nama_pasar": "Pasar Kawali"
        }"#;

        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.commodity_id, Some(19));
        assert_eq!(record.name, "Bawang Bombay");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 7, 25));
        assert_eq!(record.price, 39818.0);
        assert_eq!(record.market, "Pasar Kawali");
    }

    #[test]
    fn test_malformed_record_gets_defaults() {
        let json = r#"{
            "id": "12",
            "komoditi_id": 0,
            "nama": null,
            "foto": "",
            "tanggal": "not-a-date",
            "harga": "15000",
            "harga_sebelumnya": -5,
            "nama_pasar": null
        }"#;

        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.commodity_id, None);
        assert_eq!(record.name, "");
        assert_eq!(record.image, None);
        assert_eq!(record.date, None);
        assert_eq!(record.price, 15000.0);
        assert_eq!(record.previous_price, 0.0);
        assert_eq!(record.unit, "");
        assert_eq!(record.market, "");
    }

    #[test]
    fn test_commodity_deserialization() {
        let json = r#"{
            "id": 2,
            "nama": "Beras Medium",
            "kategori": "Konsumsi",
            "satuan": "kg",
            "harga_rata_rata": 13397,
            "perubahan_persen": -0.85,
            "perubahan_nominal": -115
        }"#;

        let commodity: CommodityData = serde_json::from_str(json).unwrap();
        assert_eq!(commodity.category, "Konsumsi");
        assert_eq!(commodity.percent_change, -0.85);
        assert_eq!(commodity.nominal_change, -115.0);
        assert_eq!(commodity.image, None);
    }
}
