//! Pre-conversion survey of an export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smsforge_core::classify_sender;
use smsforge_ingest::TransactionExport;

/// Counts an operator wants to see before converting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvAnalysis {
    pub total_rows: usize,
    pub columns: Vec<String>,
    /// Rows the export itself tags as sent.
    pub sent_kind: usize,
    /// Rows the export itself tags as received.
    pub received_kind: usize,
    /// (sender address, row count), most frequent first.
    pub sender_counts: Vec<(String, usize)>,
    pub missing_dates: usize,
    /// Whether the export carried the optional reference column at all.
    /// When it did not, every row counts as missing a reference.
    pub has_reference_column: bool,
    pub missing_references: usize,
}

/// Survey `export` without converting anything. Sender counts run the
/// same classifier as conversion, so the two can never disagree.
pub fn analyze(export: &TransactionExport) -> CsvAnalysis {
    let mut sent_kind = 0;
    let mut received_kind = 0;
    let mut missing_dates = 0;
    let mut missing_references = 0;
    let mut by_sender: HashMap<&'static str, usize> = HashMap::new();

    for row in &export.rows {
        match row.kind.as_str() {
            "sent" => sent_kind += 1,
            "received" => received_kind += 1,
            _ => {}
        }
        if row.date.trim().is_empty() {
            missing_dates += 1;
        }
        match &row.reference {
            Some(reference) if !reference.trim().is_empty() => {}
            _ => missing_references += 1,
        }
        let sender = classify_sender(&row.raw_sms, &row.bank_account);
        *by_sender.entry(sender.address()).or_insert(0) += 1;
    }

    let mut sender_counts: Vec<(String, usize)> = by_sender
        .into_iter()
        .map(|(address, count)| (address.to_string(), count))
        .collect();
    sender_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    CsvAnalysis {
        total_rows: export.rows.len(),
        columns: export.columns.clone(),
        sent_kind,
        received_kind,
        sender_counts,
        missing_dates,
        has_reference_column: export.has_reference_column(),
        missing_references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smsforge_ingest::TransactionRow;

    fn row(raw_sms: &str, date: &str, kind: &str, account: &str) -> TransactionRow {
        TransactionRow {
            raw_sms: raw_sms.to_string(),
            date: date.to_string(),
            kind: kind.to_string(),
            bank_account: account.to_string(),
            reference: None,
        }
    }

    fn export(rows: Vec<TransactionRow>) -> TransactionExport {
        TransactionExport {
            columns: vec![
                "date".to_string(),
                "rawSMS".to_string(),
                "type".to_string(),
                "bankAccount".to_string(),
            ],
            rows,
        }
    }

    #[test]
    fn test_counts_kinds_and_missing_fields() {
        let export = export(vec![
            row("Sent Rs.29.00 from Kotak Bank", "29-11-25", "sent", "X1583"),
            row("Received Rs.1897.00 in your Kotak Bank AC", "", "received", "X1583"),
            row("INR 1000 credited. -SBI", "30-11-25", "", ""),
        ]);
        let analysis = analyze(&export);
        assert_eq!(analysis.total_rows, 3);
        assert_eq!(analysis.sent_kind, 1);
        assert_eq!(analysis.received_kind, 1);
        assert_eq!(analysis.missing_dates, 1);
        // no ref column in this export, every reference counts as missing
        assert!(!analysis.has_reference_column);
        assert_eq!(analysis.missing_references, 3);
    }

    #[test]
    fn test_sender_histogram_sorted_by_count() {
        let export = export(vec![
            row("Sent from Kotak Bank", "29-11-25", "sent", ""),
            row("Received in your Kotak Bank AC", "29-11-25", "received", ""),
            row("Credit Alert! credited to HDFC Bank A/c", "29-11-25", "", ""),
        ]);
        let analysis = analyze(&export);
        assert_eq!(
            analysis.sender_counts,
            vec![("VK-KOTAK".to_string(), 2), ("VM-HDFCBK".to_string(), 1)]
        );
    }

    #[test]
    fn test_histogram_uses_account_fallback() {
        let export = export(vec![row("Rs.500 debited from your account", "29-11-25", "", "X1583")]);
        let analysis = analyze(&export);
        assert_eq!(analysis.sender_counts, vec![("VK-KOTAK".to_string(), 1)]);
    }

    #[test]
    fn test_present_references_are_not_missing() {
        let mut with_ref = row("Sent Rs.48.00", "19-11-25", "sent", "X1583");
        with_ref.reference = Some("227911213761".to_string());
        let mut export = export(vec![with_ref, row("Sent Rs.86.00", "19-11-25", "sent", "X1583")]);
        export.columns.push("ref".to_string());
        let analysis = analyze(&export);
        assert!(analysis.has_reference_column);
        assert_eq!(analysis.missing_references, 1);
    }
}
