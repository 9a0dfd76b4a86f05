pub mod aggregation_service;
pub mod poll_service;
pub mod sort_service;
pub mod suggestion_service;
pub mod sync_service;
pub mod transaction_service;
