//! Raw transaction-export records.

use serde::{Deserialize, Serialize};

/// One row of the transaction export, untouched by any normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Captured notification text, possibly empty.
    pub raw_sms: String,
    /// Transaction date as exported; format varies, possibly empty.
    pub date: String,
    /// The export's own direction tag ("sent", "received", or anything).
    pub kind: String,
    /// Masked account string like "X1583", possibly empty.
    pub bank_account: String,
    /// UPI reference number, when the export has a `ref` column.
    pub reference: Option<String>,
}
