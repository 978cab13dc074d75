//! Console report sections for the operator.

use std::path::Path;

use smsforge_backup::{ConversionStats, CsvAnalysis, ValidationReport};

pub fn print_analysis(analysis: &CsvAnalysis) {
    println!("Export analysis:");
    println!("- total rows: {}", analysis.total_rows);
    println!("- columns: {}", analysis.columns.join(", "));
    println!("- tagged sent: {}", analysis.sent_kind);
    println!("- tagged received: {}", analysis.received_kind);
    println!("- banks detected:");
    for (address, count) in &analysis.sender_counts {
        println!("    {address}: {count} messages");
    }
    println!("- missing dates: {}", analysis.missing_dates);
    if analysis.has_reference_column {
        println!("- missing references: {}", analysis.missing_references);
    } else {
        println!("- reference column: absent");
    }
}

pub fn print_conversion(stats: &ConversionStats, out: &Path) {
    println!("\nConversion complete.");
    println!("- rows read: {}", stats.total);
    println!("- converted: {}", stats.processed);
    println!("- skipped: {}", stats.skipped);
    println!("- output file: {}", out.display());
}

pub fn print_validation(report: &ValidationReport) {
    println!("\nValidation results:");
    for check in &report.checks {
        let status = if check.passed { "ok" } else { "FAIL" };
        println!("- {}: {status} ({})", check.name, truncate(&check.detail, 50));
    }
    println!(
        "Validation {}.",
        if report.is_valid() { "passed" } else { "failed" }
    );
}

pub fn print_epilogue(out: &Path) {
    println!("\nNext steps:");
    println!("1. Transfer '{}' to the Android device", out.display());
    println!("2. Restore it with the SMS Backup & Restore app");
    println!("3. The messages then show up as regular SMS history");
}

fn truncate(detail: &str, limit: usize) -> &str {
    match detail.char_indices().nth(limit) {
        Some((index, _)) => &detail[..index],
        None => detail,
    }
}
