pub mod api;
pub mod cache;
pub mod export;
pub mod fallback;
pub mod feed;
pub mod retry;
