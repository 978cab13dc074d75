//! Post-write structural checks on a serialized backup.

use std::path::Path;

use anyhow::Result;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};

/// Attributes every serialized message must carry to restore cleanly.
const REQUIRED_SMS_ATTRIBUTES: &[&str] = &["protocol", "address", "date", "type", "body", "read"];

/// Outcome of one structural check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationCheck {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// All checks for one document. Advisory: the artifact stays in place
/// whatever the outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    fn record(&mut self, name: &str, passed: bool, detail: impl Into<String>) {
        self.checks.push(ValidationCheck {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

#[derive(Default)]
struct DocumentShape {
    root_name: Option<String>,
    declared_count: Option<String>,
    backup_set: Option<String>,
    sms_count: usize,
    first_sms_attributes: Option<Vec<(String, String)>>,
}

/// Re-parse `path` and check it looks like a restorable backup.
/// `expected_count`, when known, is checked against the elements found.
/// Never fails: problems come back as failed checks.
pub fn validate_backup(path: impl AsRef<Path>, expected_count: Option<usize>) -> ValidationReport {
    let path = path.as_ref();
    let mut report = ValidationReport::default();

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            report.record("readable", false, format!("{}: {err}", path.display()));
            return report;
        }
    };
    report.record("readable", true, path.display().to_string());

    let shape = match scan_document(&text) {
        Ok(shape) => shape,
        Err(err) => {
            report.record("well-formed", false, err.to_string());
            return report;
        }
    };
    report.record("well-formed", true, "document parses");

    match shape.root_name.as_deref() {
        Some("smses") => report.record("root element", true, "<smses>"),
        Some(other) => report.record("root element", false, format!("found <{other}>")),
        None => report.record("root element", false, "no root element"),
    }

    match shape.declared_count.as_deref().map(str::parse::<usize>) {
        Some(Ok(declared)) if declared == shape.sms_count => {
            report.record("declared count", true, format!("{declared} messages"));
        }
        Some(Ok(declared)) => {
            report.record(
                "declared count",
                false,
                format!("declared {declared}, found {}", shape.sms_count),
            );
        }
        Some(Err(_)) => report.record("declared count", false, "count is not a number"),
        None => report.record("declared count", false, "count attribute missing"),
    }

    if let Some(expected) = expected_count {
        report.record(
            "expected count",
            shape.sms_count == expected,
            format!("expected {expected}, found {}", shape.sms_count),
        );
    }

    match shape.backup_set.as_deref() {
        Some(id) if !id.is_empty() => report.record("backup set", true, id.to_string()),
        _ => report.record("backup set", false, "backup_set attribute missing"),
    }

    match &shape.first_sms_attributes {
        Some(attributes) => {
            let missing: Vec<&str> = REQUIRED_SMS_ATTRIBUTES
                .iter()
                .copied()
                .filter(|required| !attributes.iter().any(|(key, _)| key == required))
                .collect();
            if missing.is_empty() {
                report.record(
                    "sample attributes",
                    true,
                    format!("all of {}", REQUIRED_SMS_ATTRIBUTES.join(", ")),
                );
            } else {
                report.record("sample attributes", false, format!("missing {}", missing.join(", ")));
            }
        }
        None => report.record("sample attributes", true, "no messages to sample"),
    }

    report
}

fn scan_document(text: &str) -> Result<DocumentShape> {
    let mut reader = Reader::from_str(text);
    let mut shape = DocumentShape::default();

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => inspect_element(&element, &mut shape)?,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(shape)
}

fn inspect_element(element: &BytesStart, shape: &mut DocumentShape) -> Result<()> {
    let name = String::from_utf8_lossy(element.name().as_ref()).to_string();
    if shape.root_name.is_none() {
        shape.root_name = Some(name.clone());
    }

    match name.as_str() {
        "smses" => {
            for attribute in element.attributes() {
                let attribute = attribute?;
                let key = String::from_utf8_lossy(attribute.key.as_ref()).to_string();
                let value = attribute.unescape_value()?.into_owned();
                match key.as_str() {
                    "count" => shape.declared_count = Some(value),
                    "backup_set" => shape.backup_set = Some(value),
                    _ => {}
                }
            }
        }
        "sms" => {
            shape.sms_count += 1;
            if shape.first_sms_attributes.is_none() {
                let mut attributes = Vec::new();
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    attributes.push((
                        String::from_utf8_lossy(attribute.key.as_ref()).to_string(),
                        attribute.unescape_value()?.into_owned(),
                    ));
                }
                shape.first_sms_attributes = Some(attributes);
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BackupDocument;
    use crate::writer::write_backup;
    use smsforge_core::{Direction, SenderId, TextMessage};
    use tempfile::TempDir;

    fn message(body: &str) -> TextMessage {
        TextMessage {
            sender: SenderId::Kotak,
            body: body.to_string(),
            timestamp_millis: 1764354600000,
            direction: Direction::Sent,
            readable_date: "Nov 29, 2025 12:00:00 AM".to_string(),
        }
    }

    fn written_backup(dir: &TempDir, messages: usize) -> std::path::PathBuf {
        let mut document = BackupDocument::new(1764590400000);
        for index in 0..messages {
            document.push(message(&format!("message {index}")));
        }
        let path = dir.path().join("backup.xml");
        write_backup(&document, &path).unwrap();
        path
    }

    #[test]
    fn test_accepts_a_written_backup() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 3);
        let report = validate_backup(&path, Some(3));
        assert!(report.is_valid(), "{:?}", report.checks);
    }

    #[test]
    fn test_accepts_an_empty_backup() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 0);
        let report = validate_backup(&path, Some(0));
        assert!(report.is_valid(), "{:?}", report.checks);
    }

    #[test]
    fn test_flags_declared_count_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 3);
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, text.replacen("count=\"3\"", "count=\"4\"", 1)).unwrap();

        let report = validate_backup(&path, None);
        assert!(!report.is_valid());
        let check = report
            .checks
            .iter()
            .find(|check| check.name == "declared count")
            .unwrap();
        assert!(!check.passed);
        assert!(check.detail.contains("declared 4, found 3"));
    }

    #[test]
    fn test_flags_count_drift_from_pipeline() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 2);
        let report = validate_backup(&path, Some(5));
        assert!(!report.is_valid());
        let check = report
            .checks
            .iter()
            .find(|check| check.name == "expected count")
            .unwrap();
        assert!(!check.passed);
    }

    #[test]
    fn test_flags_missing_required_attribute() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 1);
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, text.replacen(" read=\"1\"", "", 1)).unwrap();

        let report = validate_backup(&path, None);
        assert!(!report.is_valid());
        let check = report
            .checks
            .iter()
            .find(|check| check.name == "sample attributes")
            .unwrap();
        assert!(check.detail.contains("read"));
    }

    #[test]
    fn test_flags_truncated_document() {
        let dir = TempDir::new().unwrap();
        let path = written_backup(&dir, 1);
        let text = std::fs::read_to_string(&path).unwrap();
        let cut = text.find("protocol").unwrap();
        std::fs::write(&path, &text[..cut]).unwrap();

        let report = validate_backup(&path, None);
        assert!(!report.is_valid());
        assert!(
            report
                .checks
                .iter()
                .any(|check| check.name == "well-formed" && !check.passed)
        );
    }

    #[test]
    fn test_flags_missing_file() {
        let report = validate_backup("no/such/backup.xml", None);
        assert!(!report.is_valid());
        assert!(
            report
                .checks
                .iter()
                .any(|check| check.name == "readable" && !check.passed)
        );
    }

    #[test]
    fn test_flags_wrong_root_element() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.xml");
        std::fs::write(&path, "<?xml version=\"1.0\"?>\n<notes count=\"0\"></notes>\n").unwrap();

        let report = validate_backup(&path, None);
        assert!(!report.is_valid());
        let check = report
            .checks
            .iter()
            .find(|check| check.name == "root element")
            .unwrap();
        assert!(check.detail.contains("notes"));
    }
}
