//! smsforge-core: normalization and classification primitives for turning
//! transaction notifications into message records.

pub mod body;
pub mod clock;
pub mod dates;
pub mod direction;
pub mod fingerprint;
pub mod message;
pub mod sender;

pub use body::clean_body;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{DateNormalizer, parse_timezone};
pub use direction::{Direction, classify_direction};
pub use fingerprint::{message_fingerprint, short_hash};
pub use message::TextMessage;
pub use sender::{SenderId, classify_sender};
