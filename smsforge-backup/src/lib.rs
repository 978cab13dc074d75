//! smsforge-backup: document assembly, serialization, and validation for
//! SMS-backup exports.

pub mod analysis;
pub mod convert;
pub mod document;
pub mod validate;
pub mod writer;

pub use analysis::{CsvAnalysis, analyze};
pub use convert::{ConversionStats, Converter};
pub use document::BackupDocument;
pub use validate::{ValidationCheck, ValidationReport, validate_backup};
pub use writer::write_backup;
