use crate::models::{
    error::AppError,
    price::{CommodityData, PriceRecord},
};
use crate::services::retry::{RetryPolicy, retry_with_backoff};
use serde_json::Value;

// CONSTANTS
const BASE_URL: &str = "https://situ.ciamiskab.go.id/api";
const STORAGE_URL: &str = "https://situ.ciamiskab.go.id/storage";
const PRICES_PATH: &str = "perkembangan-harga-sebulan";
const COMMODITY_PATH: &str = "get-komoditi-by-id";

// API CONFIGURATION
/// Configuration for the price feed client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    storage_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// URL of the month-long price history feed.
    pub fn prices_url(&self) -> String {
        format!("{}/{PRICES_PATH}", self.base_url)
    }

    /// URL of a single commodity summary.
    pub fn commodity_url(&self, id: i64) -> String {
        format!("{}/{COMMODITY_PATH}/{id}", self.base_url)
    }

    /// Absolute URL for a stored image path; no path means no image.
    pub fn image_url(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        Some(format!(
            "{}/{}",
            self.storage_url,
            path.trim_start_matches('/')
        ))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    storage_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom API base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the base URL that image paths are resolved against.
    pub fn storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let trim = |url: String| url.trim_end_matches('/').to_string();
        ApiConfig {
            base_url: trim(self.base_url.unwrap_or_else(|| BASE_URL.to_string())),
            storage_url: trim(
                self.storage_url
                    .unwrap_or_else(|| STORAGE_URL.to_string()),
            ),
        }
    }
}

// RESPONSE PARSING
/// The feed answers either with the payload itself or with the payload
/// wrapped under `data`.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(_) | None => Value::Object(map),
        },
        other => other,
    }
}

/// Parses a price feed body into records.
///
/// Fields of individual records are read leniently; an element that is not
/// an object is dropped on its own without affecting its siblings.
pub fn parse_price_feed(body: Value) -> Result<Vec<PriceRecord>, AppError> {
    match unwrap_envelope(body) {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        other => Err(AppError::DataError(format!(
            "Expected an array of price records, got {}",
            json_kind(&other)
        ))),
    }
}

/// Parses a commodity-by-id body.
pub fn parse_commodity(body: Value) -> Result<CommodityData, AppError> {
    match unwrap_envelope(body) {
        item @ Value::Object(_) => serde_json::from_value(item)
            .map_err(|e| AppError::DataError(format!("Failed to parse commodity: {e}"))),
        other => Err(AppError::DataError(format!(
            "Expected a commodity object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// PRICE FEED CLIENT
/// HTTP client for the public price feed.
#[derive(Debug, Clone)]
pub struct PriceFeedClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PriceFeedClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the latest price records (all markets, about a month of dates).
    pub async fn fetch_latest_prices(&self) -> Result<Vec<PriceRecord>, AppError> {
        let url = self.config.prices_url();

        let body = retry_with_backoff(
            || self.fetch_json(&url),
            RetryPolicy::default(),
        )
        .await?;

        parse_price_feed(body)
    }

    /// Fetches the summary of one commodity.
    pub async fn fetch_commodity_by_id(&self, id: i64) -> Result<CommodityData, AppError> {
        let url = self.config.commodity_url(id);

        let body = retry_with_backoff(
            || self.fetch_json(&url),
            RetryPolicy::default(),
        )
        .await?;

        parse_commodity(body)
    }

    /// Executes a single fetch attempt.
    async fn fetch_json(&self, url: &str) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Transport error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches one commodity summary using default configuration.
pub async fn fetch_commodity_by_id(id: i64) -> Result<CommodityData, AppError> {
    PriceFeedClient::new()?.fetch_commodity_by_id(id).await
}
