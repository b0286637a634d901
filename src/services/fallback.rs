use crate::models::price::PriceRecord;
use crate::services::api::parse_price_feed;
use std::rc::Rc;

const FALLBACK_JSON: &str = include_str!("fallback.json");

/// Embedded sample records shown when the feed is unavailable or empty.
pub fn fallback_records() -> Rc<Vec<PriceRecord>> {
    let records = serde_json::from_str(FALLBACK_JSON)
        .ok()
        .and_then(|body| parse_price_feed(body).ok())
        .unwrap_or_default();

    Rc::new(records)
}
