//! Command implementations.

pub mod analyze;
pub mod ask;
pub mod config;
pub mod filings;
pub mod parse;

pub use self::analyze::execute_analyze;
pub use self::ask::execute_ask;
pub use self::config::execute_config;
pub use self::filings::execute_filings;
pub use self::parse::execute_parse;
