//! The backup document assembled by the conversion pipeline.

use serde::{Deserialize, Serialize};
use smsforge_core::{TextMessage, short_hash};

/// Root attribute: these backups are always complete snapshots.
pub const BACKUP_TYPE: &str = "full";

/// An assembled backup: run metadata plus messages in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Run identifier, 16 hex chars derived from the generation time.
    pub backup_set: String,
    /// Generation time as epoch milliseconds.
    pub backup_date: i64,
    pub messages: Vec<TextMessage>,
}

impl BackupDocument {
    /// Start an empty document stamped with the generation time.
    pub fn new(generated_at_millis: i64) -> Self {
        Self {
            backup_set: short_hash(&generated_at_millis.to_string()),
            backup_date: generated_at_millis,
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: TextMessage) {
        self.messages.push(message);
    }

    /// Appended message count. This is what the serialized `count`
    /// attribute reports, regardless of how many input rows existed.
    pub fn count(&self) -> usize {
        self.messages.len()
    }
}
