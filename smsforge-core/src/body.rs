//! Notification text cleanup before classification and output.

/// Collapse whitespace runs and repair doubled-quote artifacts.
///
/// OCR capture leaves uneven spacing and embedded newlines; the source
/// export's CSV quoting leaves literal `""` pairs inside the text.
/// Whitespace is collapsed first, then quote pairs.
pub fn clean_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("\"\"", "\"")
}
