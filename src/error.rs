//! Error taxonomy for the scheduling core.
//!
//! All errors are values returned through [`ScheduleResult`]; the core never
//! panics on bad input and never recovers locally. A malformed rule is not
//! skipped — dropping it silently could suppress or fabricate availability,
//! so the caller decides whether to ignore, log, or abort.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ClockTime;

/// Result alias used throughout the crate.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors produced by (or defined for) the scheduling core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A clock time failed to parse or fell outside [0, 1440) minutes.
    ///
    /// Raised by time arithmetic and propagated unchanged by every resolver.
    #[error("invalid clock time: {input}")]
    InvalidTime {
        /// The offending input, as received.
        input: String,
    },

    /// A persisted rule or override is structurally broken: an inverted or
    /// empty interval, an out-of-range weekday index, or a zero slot
    /// duration. `detail` identifies the offending record.
    #[error("invalid schedule data: {detail}")]
    InvalidScheduleData {
        /// Description naming the offending record.
        detail: String,
    },

    /// The persistence layer's uniqueness constraint rejected a booking the
    /// core had approved.
    ///
    /// Never produced inside this crate: two concurrent requests can both
    /// pass the conflict check against a stale snapshot, so the storage
    /// layer enforces uniqueness over (practitioner, date, start) restricted
    /// to non-cancelled bookings and surfaces violations as this variant.
    /// Retryable — the caller should re-fetch and re-evaluate.
    #[error("slot already taken: practitioner {practitioner_id} on {date} at {start}")]
    SlotAlreadyTaken {
        /// Practitioner whose slot was contested.
        practitioner_id: String,
        /// Calendar date of the contested slot.
        date: NaiveDate,
        /// Start time of the contested slot.
        start: ClockTime,
    },
}

impl ScheduleError {
    /// Shorthand for an [`ScheduleError::InvalidTime`].
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
        }
    }

    /// Shorthand for an [`ScheduleError::InvalidScheduleData`].
    pub fn invalid_data(detail: impl Into<String>) -> Self {
        Self::InvalidScheduleData {
            detail: detail.into(),
        }
    }
}
