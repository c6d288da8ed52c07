//! Offerable slot model.

use serde::{Deserialize, Serialize};

use crate::models::time::ClockTime;

/// A discrete, fixed-duration candidate appointment start.
///
/// Slots are query-time artifacts of the availability resolver: produced,
/// never persisted, and recomputed on every query because the underlying
/// bookings may change between queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start.
    pub start: ClockTime,
    /// Slot end (exclusive); always `start + slot duration`.
    pub end: ClockTime,
}

impl Slot {
    /// Creates a slot.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes() - self.start.to_minutes()
    }
}
