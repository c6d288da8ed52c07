//! Availability horizon scanner.
//!
//! Projects the availability resolver across the next N calendar days and
//! yields the days that have at least one open slot, for calendar-picker
//! UIs. Purely derived — safe to recompute per request.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::models::{PractitionerSchedule, Weekday};
use crate::resolver::resolve_availability;

/// Default scan window in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// A day in the horizon with at least one open slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// The open day.
    pub date: NaiveDate,
    /// Canonical weekday, for UI labels.
    pub weekday: Weekday,
    /// Whether the day is the injected "today".
    pub is_today: bool,
    /// Whether the day is the day after the injected "today".
    pub is_tomorrow: bool,
}

/// Scans the next `days_ahead` dates (today inclusive, ascending) and
/// yields the days whose resolved slot list is non-empty.
///
/// Lazy: each day is resolved only when the iterator reaches it. Resolver
/// errors propagate through the items; after an error the iterator keeps
/// scanning subsequent days, so a caller that stops at the first `Err`
/// observes fail-fast behavior.
pub fn scan_horizon(
    schedule: &PractitionerSchedule,
    today: NaiveDate,
    days_ahead: u32,
    slot_minutes: u16,
) -> Horizon<'_> {
    Horizon {
        schedule,
        today,
        days_ahead,
        offset: 0,
        slot_minutes,
    }
}

/// Iterator produced by [`scan_horizon`].
#[derive(Debug, Clone)]
pub struct Horizon<'a> {
    schedule: &'a PractitionerSchedule,
    today: NaiveDate,
    days_ahead: u32,
    offset: u32,
    slot_minutes: u16,
}

impl Iterator for Horizon<'_> {
    type Item = ScheduleResult<DayAvailability>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.days_ahead {
            let offset = self.offset;
            self.offset += 1;

            let date = self.today.checked_add_days(Days::new(offset as u64))?;
            match resolve_availability(self.schedule, date, self.slot_minutes) {
                Err(err) => return Some(Err(err)),
                Ok(slots) if slots.is_empty() => continue,
                Ok(_) => {
                    return Some(Ok(DayAvailability {
                        date,
                        weekday: Weekday::from(date.weekday()),
                        is_today: offset == 0,
                        is_tomorrow: offset == 1,
                    }))
                }
            }
        }
        None
    }
}
