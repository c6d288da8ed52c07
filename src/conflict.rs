//! Booking conflict checker.
//!
//! Decides whether a proposed booking may share a practitioner's day with
//! the bookings already on record. Independent of — and performed after —
//! the availability check: a slot can be inside working hours yet already
//! taken.
//!
//! # Tie-break
//! The scan walks the existing list in the order given and rejects with the
//! FIRST overlapping booking. Callers whose storage layer returns bookings
//! in a nondeterministic order can apply [`sort_bookings_by_start`] first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Booking, ClockTime};

/// A proposed booking to be checked against existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Calendar date of the proposed appointment.
    pub date: NaiveDate,
    /// Proposed start time.
    pub start: ClockTime,
    /// Proposed length in minutes.
    pub duration_minutes: u16,
}

impl BookingRequest {
    /// Creates a booking request.
    pub fn new(date: NaiveDate, start: ClockTime, duration_minutes: u16) -> Self {
        Self {
            date,
            start,
            duration_minutes,
        }
    }
}

/// Outcome of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictOutcome {
    /// No blocking booking overlaps the proposed interval.
    Accept,
    /// The proposed interval overlaps an existing booking.
    Reject {
        /// The first conflicting booking, in existing-list order.
        conflicting: Booking,
    },
}

impl ConflictOutcome {
    /// Whether the proposal was accepted.
    #[inline]
    pub fn is_accept(&self) -> bool {
        matches!(self, ConflictOutcome::Accept)
    }
}

/// Checks a proposed booking against the practitioner's existing bookings
/// for that date.
///
/// Overlap is half-open on minute offsets: a booking ending at 10:00 does
/// not conflict with one starting at 10:00. Bookings whose status does not
/// block a slot (cancelled, completed, no-show) and bookings on other dates
/// are skipped.
pub fn check_booking_conflict(
    proposed: &BookingRequest,
    existing: &[Booking],
) -> ConflictOutcome {
    let proposed_start = proposed.start.to_minutes() as u32;
    let proposed_end = proposed_start + proposed.duration_minutes as u32;

    for booking in existing {
        if booking.date != proposed.date || !booking.status.blocks_slot() {
            continue;
        }
        if overlaps_u32(
            proposed_start,
            proposed_end,
            booking.start_minutes() as u32,
            booking.end_minutes(),
        ) {
            warn!(
                date = %proposed.date,
                start = %proposed.start,
                conflicting_start = %booking.start,
                "booking conflict"
            );
            return ConflictOutcome::Reject {
                conflicting: booking.clone(),
            };
        }
    }

    debug!(date = %proposed.date, start = %proposed.start, "no booking conflict");
    ConflictOutcome::Accept
}

/// Sorts bookings by start time (stable), for callers that need the
/// first-match tie-break to be independent of storage query order.
pub fn sort_bookings_by_start(bookings: &mut [Booking]) {
    bookings.sort_by_key(Booking::start_minutes);
}

// Booking intervals live in u32 minutes so a late booking running past
// midnight still compares correctly. Same half-open semantics as
// [`crate::models::overlaps`].
#[inline]
fn overlaps_u32(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}
