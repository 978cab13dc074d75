//! Date normalization: heterogeneous export dates to epoch milliseconds.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

use crate::clock::{Clock, SystemClock};

/// Day-month-year patterns accepted by the export, in priority order.
/// Numeric `%Y` and both month-name forms accept one- to four-digit
/// years, so these four patterns cover the export's eight date shapes.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y", "%d-%B-%Y"];

/// Rendering used for the human-readable timestamp attribute.
const READABLE_DATE_FORMAT: &str = "%b %d, %Y %I:%M:%S %p";

/// Resolve an IANA timezone name like "Asia/Kolkata".
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// Converts export date strings into epoch milliseconds, interpreting
/// dates as local midnight in `tz` and reading `clock` when a date is
/// absent or unusable.
#[derive(Debug, Clone)]
pub struct DateNormalizer<C: Clock = SystemClock> {
    tz: Tz,
    clock: C,
}

impl DateNormalizer<SystemClock> {
    pub fn new(tz: Tz) -> Self {
        Self { tz, clock: SystemClock }
    }
}

impl<C: Clock> DateNormalizer<C> {
    pub fn with_clock(tz: Tz, clock: C) -> Self {
        Self { tz, clock }
    }

    /// Wall-clock reading, shared with callers stamping run metadata.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Parse `raw` into epoch milliseconds. Blank input means "no date"
    /// and yields the current time; anything unparseable is logged and
    /// also falls back to the current time. Never fails, never negative.
    pub fn normalize(&self, raw: &str) -> i64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.now_millis();
        }
        match self.parse_local_midnight(trimmed) {
            Some(millis) if millis >= 0 => millis,
            _ => {
                warn!("could not parse date '{trimmed}', using current time");
                self.now_millis()
            }
        }
    }

    fn parse_local_midnight(&self, text: &str) -> Option<i64> {
        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())?;
        let date = adjust_century(date)?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        // a DST gap has no midnight; an ambiguous fold takes the earlier instant
        self.tz
            .from_local_datetime(&midnight)
            .earliest()
            .map(|instant| instant.timestamp_millis())
    }

    /// Render epoch milliseconds in the configured zone.
    pub fn readable_date(&self, millis: i64) -> String {
        match DateTime::from_timestamp_millis(millis) {
            Some(utc) => utc
                .with_timezone(&self.tz)
                .format(READABLE_DATE_FORMAT)
                .to_string(),
            // normalize never produces a value outside chrono's range
            None => String::new(),
        }
    }
}

/// Two-digit years are 2000s dates in this export.
fn adjust_century(date: NaiveDate) -> Option<NaiveDate> {
    if (0..100).contains(&date.year()) {
        date.with_year(date.year() + 2000)
    } else {
        Some(date)
    }
}
