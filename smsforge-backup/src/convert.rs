//! The conversion pipeline: export rows to a backup document.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use smsforge_core::clock::{Clock, SystemClock};
use smsforge_core::dates::DateNormalizer;
use smsforge_core::{TextMessage, classify_direction, classify_sender, clean_body};
use smsforge_ingest::TransactionRow;

use crate::document::BackupDocument;

const PROGRESS_EVERY: usize = 50;

/// Counts for one conversion run. `processed + skipped == total` always
/// holds: every row is either converted or skipped, never dropped
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
}

/// Converts export rows into a backup document. Rows are handled in
/// order; a row can be skipped but never aborts the run.
pub struct Converter<C: Clock = SystemClock> {
    dates: DateNormalizer<C>,
}

impl Converter<SystemClock> {
    pub fn new(tz: Tz) -> Self {
        Self { dates: DateNormalizer::new(tz) }
    }
}

impl<C: Clock> Converter<C> {
    pub fn with_clock(tz: Tz, clock: C) -> Self {
        Self { dates: DateNormalizer::with_clock(tz, clock) }
    }

    pub fn run(&self, rows: &[TransactionRow]) -> (BackupDocument, ConversionStats) {
        let mut document = BackupDocument::new(self.dates.now_millis());
        let mut skipped = 0;

        for (index, row) in rows.iter().enumerate() {
            if row.raw_sms.trim().is_empty() {
                // 1-based so the number matches the export's row numbering
                warn!("row {}: empty message body, skipping", index + 1);
                skipped += 1;
                continue;
            }

            let body = clean_body(&row.raw_sms);
            let timestamp_millis = self.dates.normalize(&row.date);
            let sender = classify_sender(&body, &row.bank_account);
            let direction = classify_direction(&row.kind, &body);

            document.push(TextMessage {
                sender,
                body,
                timestamp_millis,
                direction,
                readable_date: self.dates.readable_date(timestamp_millis),
            });

            if document.count() % PROGRESS_EVERY == 0 {
                info!("converted {} messages", document.count());
            }
        }

        let stats = ConversionStats {
            total: rows.len(),
            processed: document.count(),
            skipped,
        };
        (document, stats)
    }
}
