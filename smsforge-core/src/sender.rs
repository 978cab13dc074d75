//! Sender identification for transaction notification text.
//!
//! The export has no sender column, so the bank is reconstructed from the
//! message text itself, falling back to known masked account numbers.

use serde::{Deserialize, Serialize};

/// Canonical notification senders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SenderId {
    #[serde(rename = "kotak")]
    Kotak,
    #[serde(rename = "sbi")]
    Sbi,
    #[serde(rename = "hdfc")]
    Hdfc,
    #[serde(rename = "ippb")]
    Ippb,
    #[serde(rename = "axis")]
    Axis,
    #[serde(rename = "icici")]
    Icici,
    #[serde(rename = "paytm")]
    Paytm,
    #[serde(rename = "unknown")]
    Unknown,
}

impl SenderId {
    /// Sender short code as it would appear on a handset.
    pub fn address(&self) -> &'static str {
        match self {
            SenderId::Kotak => "VK-KOTAK",
            SenderId::Sbi => "AD-SBIPSG",
            SenderId::Hdfc => "VM-HDFCBK",
            SenderId::Ippb => "AD-IPPBMB",
            SenderId::Axis => "AX-AXISBK",
            SenderId::Icici => "VM-ICICIB",
            SenderId::Paytm => "VM-PAYTMB",
            SenderId::Unknown => "VK-XXXBANK",
        }
    }
}

/// Bank-name substrings in priority order; first hit wins. Transfer
/// confirmations can mention several banks, and the first listed
/// institution is the account owner.
const KEYWORD_RULES: &[(&str, SenderId)] = &[
    ("kotak", SenderId::Kotak),
    ("sbi", SenderId::Sbi),
    ("state bank", SenderId::Sbi),
    ("hdfc", SenderId::Hdfc),
    ("ippb", SenderId::Ippb),
    ("axis", SenderId::Axis),
    ("icici", SenderId::Icici),
    ("paytm", SenderId::Paytm),
];

/// Masked account numbers seen in the export, checked when the text names
/// no bank. Case-sensitive; the export masks accounts in uppercase.
const ACCOUNT_RULES: &[(&str, SenderId)] = &[
    ("X1583", SenderId::Kotak),
    ("X3146", SenderId::Sbi),
    ("X7717", SenderId::Sbi),
    ("X1100", SenderId::Hdfc),
    ("X5911", SenderId::Hdfc),
    ("X0519", SenderId::Ippb),
];

/// Identify the sender for a notification body and its masked account
/// hint. Total: anything unmatched classifies as Unknown.
pub fn classify_sender(body: &str, account_hint: &str) -> SenderId {
    let lower = body.to_lowercase();
    for &(needle, sender) in KEYWORD_RULES {
        if lower.contains(needle) {
            return sender;
        }
    }
    for &(mask, sender) in ACCOUNT_RULES {
        if account_hint.contains(mask) {
            return sender;
        }
    }
    SenderId::Unknown
}
