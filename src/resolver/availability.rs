//! Availability resolver.
//!
//! # Algorithm
//! 1. Ask the date override resolver for the target date.
//! 2. `Some(intervals)`: feed them to the slot generator and return, even
//!    when the result is empty (explicitly closed).
//! 3. `None`: derive the canonical weekday from the date, resolve the
//!    weekly template, feed its intervals to the slot generator.
//!
//! Pure and idempotent: identical inputs always produce identical slots.
//! Malformed stored data surfaces as an error, never as an empty list — the
//! caller must be able to tell "no availability" from "corrupt schedule".

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::ScheduleResult;
use crate::models::{PractitionerSchedule, Slot, TimeRange, Weekday};
use crate::resolver::overrides::override_for_date;
use crate::resolver::slots::SlotGenerator;
use crate::resolver::weekly::rules_for_weekday;

/// Resolves the working intervals for one (schedule, date) pair: the date
/// override when one exists for that exact date, otherwise the weekly
/// template for the date's weekday.
pub fn working_intervals(
    schedule: &PractitionerSchedule,
    date: NaiveDate,
) -> ScheduleResult<Vec<TimeRange>> {
    match override_for_date(&schedule.date_overrides, date)? {
        Some(intervals) => {
            debug!(%date, count = intervals.len(), "date override supersedes weekly template");
            Ok(intervals)
        }
        None => {
            let weekday = Weekday::from(date.weekday());
            rules_for_weekday(&schedule.weekly_rules, weekday)
        }
    }
}

/// Resolves the offerable slots for one (schedule, date) pair.
pub fn resolve_availability(
    schedule: &PractitionerSchedule,
    date: NaiveDate,
    slot_minutes: u16,
) -> ScheduleResult<Vec<Slot>> {
    let generator = SlotGenerator::new(working_intervals(schedule, date)?, slot_minutes)?;
    Ok(generator.iter().collect())
}
