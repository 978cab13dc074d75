//! Canonical message records produced by the conversion pipeline.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::sender::SenderId;

/// One converted notification, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    /// Identified sending bank.
    pub sender: SenderId,
    /// Normalized notification text.
    pub body: String,
    /// Event time as epoch milliseconds, never negative.
    pub timestamp_millis: i64,
    pub direction: Direction,
    /// Timestamp rendered in the run's timezone.
    pub readable_date: String,
}

impl TextMessage {
    /// Address the message is attributed to.
    pub fn address(&self) -> &'static str {
        self.sender.address()
    }

    /// Contact label; mirrors the sender address.
    pub fn contact_name(&self) -> &'static str {
        self.sender.address()
    }
}
