//! Clock-time arithmetic and half-open intervals.
//!
//! All scheduling math happens on minutes since midnight, in [0, 1440).
//! Intervals are half-open `[start, end)`: touching endpoints do NOT
//! overlap, so a booking ending at 10:00 never conflicts with one starting
//! at 10:00.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Minutes in a day; valid minute offsets are `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// An immutable wall-clock time of day.
///
/// Canonical text form is `HH:MM` (parsing also accepts `H:MM`). Every
/// `ClockTime` normalizes to a minute offset in [0, 1440), which is the
/// representation the resolvers compute with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8) -> ScheduleResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::invalid_time(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parses the canonical `HH:MM` form.
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        let bad = || ScheduleError::invalid_time(text);
        let (h, m) = text.split_once(':').ok_or_else(bad)?;
        if m.len() != 2 || h.is_empty() || h.len() > 2 {
            return Err(bad());
        }
        let hour: u8 = h.parse().map_err(|_| bad())?;
        let minute: u8 = m.parse().map_err(|_| bad())?;
        Self::new(hour, minute).map_err(|_| bad())
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight. Total for any valid `ClockTime`.
    #[inline]
    pub fn to_minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Inverse of [`ClockTime::to_minutes`].
    ///
    /// Fails with `InvalidTime` outside [0, 1440).
    pub fn from_minutes(minutes: u16) -> ScheduleResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::invalid_time(format!("{minutes} minutes")));
        }
        Ok(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }

    /// In-range minute offsets only; callers guarantee `minutes < 1440`.
    #[inline]
    pub(crate) fn from_minutes_unchecked(minutes: u16) -> Self {
        debug_assert!(minutes < MINUTES_PER_DAY);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Half-open interval overlap on minute offsets.
///
/// True iff `[a_start, a_end)` and `[b_start, b_end)` share any minute.
/// Touching endpoints do not overlap.
#[inline]
pub fn overlaps(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && b_start < a_end
}

/// A validated half-open time interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeRange {
    /// Creates an interval, rejecting `start >= end`.
    pub fn new(start: ClockTime, end: ClockTime) -> ScheduleResult<Self> {
        if start >= end {
            return Err(ScheduleError::invalid_data(format!(
                "empty or inverted interval {start}-{end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Interval length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes() - self.start.to_minutes()
    }

    /// Whether two intervals overlap (half-open; touching is not overlap).
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(
            self.start.to_minutes(),
            self.end.to_minutes(),
            other.start.to_minutes(),
            other.end.to_minutes(),
        )
    }

    /// Whether `inner` lies entirely within `self`.
    pub fn contains(&self, inner: &Self) -> bool {
        inner.start >= self.start && inner.end <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> ClockTime {
        ClockTime::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("09:30").to_string(), "09:30");
        assert_eq!(t("9:30").to_string(), "09:30");
        assert_eq!(t("00:00").to_minutes(), 0);
        assert_eq!(t("23:59").to_minutes(), 1439);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "9", "24:00", "12:60", "ab:cd", "12:5", "12:345", "-1:00"] {
            assert!(ClockTime::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_minutes_round_trip() {
        let time = t("14:45");
        assert_eq!(time.to_minutes(), 885);
        assert_eq!(ClockTime::from_minutes(885).unwrap(), time);
        assert!(ClockTime::from_minutes(1440).is_err());
    }

    #[test]
    fn test_overlap_is_half_open() {
        // Touching endpoints: 10:00-10:30 vs 10:30-11:00 do not overlap.
        assert!(!overlaps(600, 630, 630, 660));
        // One extra minute and they do.
        assert!(overlaps(600, 631, 630, 660));
        assert!(overlaps(600, 660, 615, 630)); // containment
        assert!(!overlaps(600, 630, 700, 730)); // disjoint
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert!(TimeRange::new(t("10:00"), t("09:00")).is_err());
        assert!(TimeRange::new(t("10:00"), t("10:00")).is_err());
        assert!(TimeRange::new(t("09:00"), t("10:00")).is_ok());
    }

    #[test]
    fn test_range_contains() {
        let outer = TimeRange::new(t("08:00"), t("12:00")).unwrap();
        let inner = TimeRange::new(t("09:00"), t("09:30")).unwrap();
        let edge = TimeRange::new(t("08:00"), t("12:00")).unwrap();
        let spill = TimeRange::new(t("11:30"), t("12:30")).unwrap();
        assert!(outer.contains(&inner));
        assert!(outer.contains(&edge));
        assert!(!outer.contains(&spill));
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let time = t("08:05");
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"08:05\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
