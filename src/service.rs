//! Booking service facade and external-collaborator seams.
//!
//! The core stays agnostic to transport and storage: schedules and existing
//! bookings arrive through the [`ScheduleSource`] and [`BookingSource`]
//! traits, "today" through [`Clock`]. The facade evaluates a snapshot —
//! availability first, then conflicts — and never persists anything.
//!
//! # Concurrency contract
//! Two concurrent requests can both pass the conflict check against a stale
//! snapshot. The persistence layer closes that race with a uniqueness
//! constraint over (practitioner, date, start) restricted to non-cancelled
//! bookings, surfacing violations as
//! [`ScheduleError::SlotAlreadyTaken`](crate::ScheduleError::SlotAlreadyTaken);
//! the core's contract is "evaluate this snapshot correctly", not global
//! serializability.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::conflict::{check_booking_conflict, BookingRequest, ConflictOutcome};
use crate::error::ScheduleResult;
use crate::horizon::{scan_horizon, DayAvailability, DEFAULT_HORIZON_DAYS};
use crate::models::{Booking, ClockTime, PractitionerSchedule, Slot};
use crate::resolver::{resolve_availability, working_intervals, SlotGenerator, DEFAULT_SLOT_MINUTES};

/// Supplies practitioner schedule snapshots (weekly rules + overrides).
pub trait ScheduleSource {
    /// The schedule snapshot for one practitioner.
    fn practitioner_schedule(&self, practitioner_id: &str)
        -> ScheduleResult<PractitionerSchedule>;
}

/// Supplies existing bookings for one practitioner and date.
///
/// Implementations may pre-filter to non-cancelled statuses; the conflict
/// checker skips non-blocking statuses regardless.
pub trait BookingSource {
    /// Bookings on record for the practitioner on the given date.
    fn bookings_for_day(
        &self,
        practitioner_id: &str,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<Booking>>;
}

/// Decision for a proposed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingDecision {
    /// Within working hours and conflict-free; the caller may persist.
    Accepted,
    /// The proposed start is not an offerable slot for that date.
    OutsideWorkingHours,
    /// An existing booking occupies the proposed interval.
    Conflict {
        /// The first conflicting booking.
        conflicting: Booking,
    },
}

/// Orchestrates availability resolution and conflict checking over the
/// external sources.
#[derive(Debug, Clone)]
pub struct BookingService<S, B, C> {
    schedules: S,
    bookings: B,
    clock: C,
    slot_minutes: u16,
}

impl<S, B, C> BookingService<S, B, C>
where
    S: ScheduleSource,
    B: BookingSource,
    C: Clock,
{
    /// Creates a service with the default 30-minute slot duration.
    pub fn new(schedules: S, bookings: B, clock: C) -> Self {
        Self {
            schedules,
            bookings,
            clock,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }

    /// Sets the slot duration in minutes.
    pub fn with_slot_minutes(mut self, slot_minutes: u16) -> Self {
        self.slot_minutes = slot_minutes;
        self
    }

    /// Offerable slots for a practitioner on a date.
    pub fn available_slots(
        &self,
        practitioner_id: &str,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<Slot>> {
        let schedule = self.schedules.practitioner_schedule(practitioner_id)?;
        resolve_availability(&schedule, date, self.slot_minutes)
    }

    /// Days with at least one open slot in the next `days_ahead` dates,
    /// starting from the injected clock's today.
    pub fn open_days(
        &self,
        practitioner_id: &str,
        days_ahead: u32,
    ) -> ScheduleResult<Vec<DayAvailability>> {
        let schedule = self.schedules.practitioner_schedule(practitioner_id)?;
        scan_horizon(&schedule, self.clock.today(), days_ahead, self.slot_minutes).collect()
    }

    /// Same as [`BookingService::open_days`] with the default horizon.
    pub fn open_days_default(
        &self,
        practitioner_id: &str,
    ) -> ScheduleResult<Vec<DayAvailability>> {
        self.open_days(practitioner_id, DEFAULT_HORIZON_DAYS)
    }

    /// Evaluates a proposed booking against the current snapshot.
    ///
    /// The proposed start must be one of the date's offerable slot starts,
    /// and the whole proposed interval `[start, start + duration)` must fit
    /// inside the working interval containing it — a booking may span
    /// several slots but never run past the end of working hours. The
    /// duration is then conflict-checked as given. An accepted decision is
    /// a verdict on the snapshot only — persistence must still enforce its
    /// uniqueness constraint.
    pub fn evaluate_booking(
        &self,
        practitioner_id: &str,
        date: NaiveDate,
        start: ClockTime,
        duration_minutes: u16,
    ) -> ScheduleResult<BookingDecision> {
        let schedule = self.schedules.practitioner_schedule(practitioner_id)?;
        let intervals = working_intervals(&schedule, date)?;
        let generator = SlotGenerator::new(intervals.clone(), self.slot_minutes)?;
        if !generator.iter().any(|slot| slot.start == start) {
            debug!(%practitioner_id, %date, %start, "proposed start outside working hours");
            return Ok(BookingDecision::OutsideWorkingHours);
        }

        let start_minutes = start.to_minutes() as u32;
        let end_minutes = start_minutes + duration_minutes as u32;
        let fits = intervals.iter().any(|interval| {
            interval.start.to_minutes() as u32 <= start_minutes
                && end_minutes <= interval.end.to_minutes() as u32
        });
        if !fits {
            debug!(
                %practitioner_id, %date, %start, duration_minutes,
                "proposed booking runs past working hours"
            );
            return Ok(BookingDecision::OutsideWorkingHours);
        }

        let existing = self.bookings.bookings_for_day(practitioner_id, date)?;
        let request = BookingRequest::new(date, start, duration_minutes);
        match check_booking_conflict(&request, &existing) {
            ConflictOutcome::Accept => Ok(BookingDecision::Accepted),
            ConflictOutcome::Reject { conflicting } => {
                Ok(BookingDecision::Conflict { conflicting })
            }
        }
    }
}
