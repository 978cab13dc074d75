//! CSV reader for transaction exports.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::types::TransactionRow;

pub const RAW_SMS_COLUMN: &str = "rawSMS";
pub const DATE_COLUMN: &str = "date";
pub const KIND_COLUMN: &str = "type";
pub const BANK_ACCOUNT_COLUMN: &str = "bankAccount";
/// Optional UPI reference column.
pub const REFERENCE_COLUMN: &str = "ref";

/// A transaction export read into memory: header columns plus rows in
/// file order.
#[derive(Debug, Clone)]
pub struct TransactionExport {
    pub columns: Vec<String>,
    pub rows: Vec<TransactionRow>,
}

impl TransactionExport {
    /// Read an export file. The four conversion columns must be present
    /// in the header; `ref` may be absent. Row fields come back raw,
    /// empty strings included, so downstream skip rules see the file as
    /// it is.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr
            .headers()
            .with_context(|| format!("reading header of {}", path.display()))?
            .clone();
        let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| anyhow!("required column '{name}' not found in {}", path.display()))
        };
        let raw_sms = position(RAW_SMS_COLUMN)?;
        let date = position(DATE_COLUMN)?;
        let kind = position(KIND_COLUMN)?;
        let bank_account = position(BANK_ACCOUNT_COLUMN)?;
        let reference = headers.iter().position(|h| h == REFERENCE_COLUMN);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.with_context(|| format!("parsing {}", path.display()))?;
            rows.push(TransactionRow {
                raw_sms: record.get(raw_sms).unwrap_or("").to_string(),
                date: record.get(date).unwrap_or("").to_string(),
                kind: record.get(kind).unwrap_or("").to_string(),
                bank_account: record.get(bank_account).unwrap_or("").to_string(),
                reference: reference.and_then(|i| record.get(i)).map(|s| s.to_string()),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Whether the export carries the optional reference column.
    pub fn has_reference_column(&self) -> bool {
        self.columns.iter().any(|c| c == REFERENCE_COLUMN)
    }
}
