pub mod dataset;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod price;
pub mod serde_util;
pub mod snapshot;
pub mod trend;
