//! Booking model and status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time::ClockTime;

/// Lifecycle status of a booking.
///
/// Only [`Pending`](BookingStatus::Pending) and
/// [`Confirmed`](BookingStatus::Confirmed) bookings block a slot;
/// cancelled, completed, and no-show bookings never conflict with new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    /// Whether a booking in this status occupies its slot.
    #[inline]
    pub fn blocks_slot(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// An existing appointment booking for one practitioner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Practitioner the booking belongs to.
    pub practitioner_id: String,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Appointment start time.
    pub start: ClockTime,
    /// Appointment length in minutes.
    pub duration_minutes: u16,
    /// Lifecycle status.
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a booking.
    pub fn new(
        practitioner_id: impl Into<String>,
        date: NaiveDate,
        start: ClockTime,
        duration_minutes: u16,
        status: BookingStatus,
    ) -> Self {
        Self {
            practitioner_id: practitioner_id.into(),
            date,
            start,
            duration_minutes,
            status,
        }
    }

    /// Start of the occupied interval as a minute offset.
    #[inline]
    pub fn start_minutes(&self) -> u16 {
        self.start.to_minutes()
    }

    /// End of the occupied interval as a minute offset (exclusive).
    ///
    /// Kept in raw minutes: a late booking may end past 23:59 and still
    /// compares correctly against other offsets.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.start.to_minutes() as u32 + self.duration_minutes as u32
    }
}
