//! Working-hour schedule models.
//!
//! A practitioner's offerable hours come from two layers:
//! - [`WeeklyRule`]: recurring weekday-scoped intervals (the template);
//! - [`DateOverride`]: date-specific slot sets that fully replace the
//!   template for that date — overrides never merge with weekly rules, and
//!   an override with no open slots means "explicitly closed".
//!
//! Both layers are owned and mutated by administrative tooling outside this
//! crate; here they are read-only inputs. Structural invariants (start <
//! end, known weekday) are enforced by the resolvers at read time, not by
//! construction, because the records arrive from storage as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::models::time::{ClockTime, TimeRange};
use crate::models::weekday::Weekday;

/// A recurring weekly working interval.
///
/// Multiple rules may target the same weekday (split shifts); they are
/// independent intervals and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRule {
    /// Weekday this rule applies to.
    pub weekday: Weekday,
    /// Working interval start.
    pub start: ClockTime,
    /// Working interval end (exclusive).
    pub end: ClockTime,
}

impl WeeklyRule {
    /// Creates a weekly rule. Interval validity is checked at resolve time.
    pub fn new(weekday: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self {
            weekday,
            start,
            end,
        }
    }

    /// The rule's interval, validated (`InvalidScheduleData` on start >= end).
    pub fn interval(&self) -> ScheduleResult<TimeRange> {
        TimeRange::new(self.start, self.end)
    }
}

/// One entry of a date override: an interval flagged open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSlot {
    /// Interval start.
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
    /// Whether the interval is offerable. Closed entries document blocked
    /// time and contribute no slots.
    pub is_open: bool,
}

impl OverrideSlot {
    /// Creates an open interval entry.
    pub fn open(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start,
            end,
            is_open: true,
        }
    }

    /// Creates a closed (blocked) interval entry.
    pub fn closed(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start,
            end,
            is_open: false,
        }
    }

    /// The entry's interval, validated.
    pub fn interval(&self) -> ScheduleResult<TimeRange> {
        TimeRange::new(self.start, self.end)
    }
}

/// A date-specific schedule that supersedes the weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOverride {
    /// The calendar date this override governs.
    pub date: NaiveDate,
    /// Slot entries for the date. May be empty: "explicitly closed".
    pub slots: Vec<OverrideSlot>,
}

impl DateOverride {
    /// Creates an override for a date.
    pub fn new(date: NaiveDate, slots: Vec<OverrideSlot>) -> Self {
        Self { date, slots }
    }

    /// An override that closes the date entirely.
    pub fn closed_all_day(date: NaiveDate) -> Self {
        Self {
            date,
            slots: Vec::new(),
        }
    }
}

/// The schedule snapshot for one practitioner, as handed to the core by the
/// external schedule source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PractitionerSchedule {
    /// Recurring weekly template.
    pub weekly_rules: Vec<WeeklyRule>,
    /// Date-specific overrides.
    pub date_overrides: Vec<DateOverride>,
}

impl PractitionerSchedule {
    /// Creates an empty schedule (no working hours at all).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a weekly rule.
    pub fn with_rule(mut self, rule: WeeklyRule) -> Self {
        self.weekly_rules.push(rule);
        self
    }

    /// Adds a date override.
    pub fn with_override(mut self, date_override: DateOverride) -> Self {
        self.date_overrides.push(date_override);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    #[test]
    fn test_rule_interval_validation() {
        let good = WeeklyRule::new(Weekday::Monday, t("08:00"), t("12:00"));
        assert_eq!(good.interval().unwrap().duration_minutes(), 240);

        let inverted = WeeklyRule::new(Weekday::Monday, t("12:00"), t("08:00"));
        assert!(inverted.interval().is_err());
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
        let schedule = PractitionerSchedule::new()
            .with_rule(WeeklyRule::new(Weekday::Monday, t("08:00"), t("12:00")))
            .with_override(DateOverride::new(
                date,
                vec![
                    OverrideSlot::open(t("09:00"), t("10:00")),
                    OverrideSlot::closed(t("10:00"), t("11:00")),
                ],
            ));

        let json = serde_json::to_string(&schedule).unwrap();
        let back: PractitionerSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
