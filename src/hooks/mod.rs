pub mod use_commodity;
pub mod use_debounced_search;
pub mod use_filters;
pub mod use_prices;
