pub mod aggregation_service;
pub mod format_service;
pub mod quote_service;
pub mod valuation_service;
pub mod view_service;
