pub mod category_tabs;
pub mod chart;
pub mod dashboard;
pub mod filter_section;
pub mod layout;
pub mod pagination;
pub mod price_chart_modal;
pub mod product_card;
pub mod status;

pub use dashboard::Dashboard;
