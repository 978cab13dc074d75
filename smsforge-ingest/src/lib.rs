//! smsforge-ingest: reading transaction exports from CSV.

pub mod reader;
pub mod types;

pub use reader::TransactionExport;
pub use types::TransactionRow;
