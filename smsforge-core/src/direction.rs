//! Incoming/outgoing classification for notification records.

use serde::{Deserialize, Serialize};

/// Message direction, numbered the way SMS backup files encode it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "sent")]
    Sent,
}

impl Direction {
    /// Numeric code used in the backup format: 1 received, 2 sent.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Received => "1",
            Direction::Sent => "2",
        }
    }
}

const RECEIVED_HINTS: &[&str] = &["received", "credited", "credit alert"];
const SENT_HINTS: &[&str] = &["sent", "debited", "debit"];

/// Classify a record's direction from the export's own direction tag and
/// the notification text. Received checks run before sent checks, and an
/// exact tag beats text inference at each step. Anything still ambiguous
/// counts as received, keeping record count over classification
/// precision.
pub fn classify_direction(kind: &str, body: &str) -> Direction {
    let lower = body.to_lowercase();
    if kind == "received" {
        return Direction::Received;
    }
    if RECEIVED_HINTS.iter().any(|hint| lower.contains(hint)) {
        return Direction::Received;
    }
    if kind == "sent" {
        return Direction::Sent;
    }
    if SENT_HINTS.iter().any(|hint| lower.contains(hint)) {
        return Direction::Sent;
    }
    Direction::Received
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_received_wins() {
        // the tag beats a body full of debit words
        assert_eq!(
            classify_direction("received", "Rs.500 debited, debit card"),
            Direction::Received
        );
    }

    #[test]
    fn test_body_credit_keywords() {
        assert_eq!(
            classify_direction("", "Credit Alert! Rs.2900.00 credited to HDFC Bank A/c"),
            Direction::Received
        );
        assert_eq!(
            classify_direction("", "You have received a payment of Rs. 80.00"),
            Direction::Received
        );
    }

    #[test]
    fn test_explicit_sent() {
        assert_eq!(classify_direction("sent", "no keywords here"), Direction::Sent);
    }

    #[test]
    fn test_body_debit_keywords() {
        assert_eq!(
            classify_direction("", "Rs.500 debited from your account"),
            Direction::Sent
        );
        assert_eq!(
            classify_direction("", "A/C X0519 Debit Rs.500.00 for UPI"),
            Direction::Sent
        );
    }

    #[test]
    fn test_received_checks_precede_sent() {
        // "credited" in the text outranks an explicit "sent" tag
        assert_eq!(classify_direction("sent", "Rs.100 credited"), Direction::Received);
    }

    #[test]
    fn test_default_is_received() {
        assert_eq!(classify_direction("", "Balance update"), Direction::Received);
        assert_eq!(classify_direction("unknown", ""), Direction::Received);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Direction::Received.code(), "1");
        assert_eq!(Direction::Sent.code(), "2");
    }
}
