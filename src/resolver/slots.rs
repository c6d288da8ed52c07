//! Slot generator.
//!
//! Turns working intervals into a discrete sequence of fixed-duration
//! offerable start times.
//!
//! # Algorithm
//! For each interval independently, in input order: start at
//! `interval.start`, emit `[t, t + d)`, advance by `d`, and stop as soon as
//! `t + d` would pass `interval.end`. Intervals are never merged, so
//! overlapping inputs yield overlapping slots — callers supply
//! non-overlapping intervals.

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ClockTime, Slot, TimeRange, MINUTES_PER_DAY};

/// Default slot length in minutes.
pub const DEFAULT_SLOT_MINUTES: u16 = 30;

/// Generates fixed-duration slots from a set of working intervals.
///
/// Iteration is lazy and restartable: the generator can be iterated any
/// number of times, and the iterator itself is `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGenerator {
    intervals: Vec<TimeRange>,
    slot_minutes: u16,
}

impl SlotGenerator {
    /// Creates a generator.
    ///
    /// The slot duration must be in `1..MINUTES_PER_DAY`: zero would step
    /// nowhere, and a day or more can never fit a within-day interval.
    /// Both are rejected as `InvalidScheduleData`, which also keeps the
    /// cursor arithmetic below `2 * MINUTES_PER_DAY` and free of `u16`
    /// overflow.
    pub fn new(intervals: Vec<TimeRange>, slot_minutes: u16) -> ScheduleResult<Self> {
        if slot_minutes == 0 || slot_minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::invalid_data(format!(
                "slot duration of {slot_minutes} minutes"
            )));
        }
        Ok(Self {
            intervals,
            slot_minutes,
        })
    }

    /// Slot length in minutes.
    #[inline]
    pub fn slot_minutes(&self) -> u16 {
        self.slot_minutes
    }

    /// Lazy iterator over the generated slots.
    pub fn iter(&self) -> Slots<'_> {
        Slots {
            intervals: &self.intervals,
            slot_minutes: self.slot_minutes,
            interval_index: 0,
            cursor: None,
        }
    }
}

impl<'a> IntoIterator for &'a SlotGenerator {
    type Item = Slot;
    type IntoIter = Slots<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over generated slots. `Clone` a snapshot to restart from it.
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    intervals: &'a [TimeRange],
    slot_minutes: u16,
    interval_index: usize,
    /// Minute offset of the next candidate start within the current
    /// interval; `None` before the interval is entered.
    cursor: Option<u16>,
}

impl Iterator for Slots<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let interval = self.intervals.get(self.interval_index)?;
            let start = self.cursor.unwrap_or_else(|| interval.start.to_minutes());
            // start and slot_minutes are both below MINUTES_PER_DAY, so the
            // sum stays well under u16::MAX.
            let end = start + self.slot_minutes;

            if end > interval.end.to_minutes() {
                // Interval exhausted; move on without emitting a partial slot.
                self.interval_index += 1;
                self.cursor = None;
                continue;
            }

            self.cursor = Some(end);
            // start/end stay below the interval bound, which a ClockTime
            // already proved is < 1440.
            return Some(Slot::new(
                ClockTime::from_minutes_unchecked(start),
                ClockTime::from_minutes_unchecked(end),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(t(start), t(end)).unwrap()
    }

    fn starts(generator: &SlotGenerator) -> Vec<String> {
        generator.iter().map(|s| s.start.to_string()).collect()
    }

    #[test]
    fn test_exact_fit_boundary() {
        // [09:00, 10:00) with 30-minute slots: exactly 09:00 and 09:30.
        // No slot may start at 10:00, and 09:30+30 <= 10:00 is allowed.
        let generator = SlotGenerator::new(vec![range("09:00", "10:00")], 30).unwrap();
        assert_eq!(starts(&generator), ["09:00", "09:30"]);
    }

    #[test]
    fn test_partial_tail_is_dropped() {
        // [09:00, 09:50): only 09:00 fits; a 09:30 slot would end at 10:00.
        let generator = SlotGenerator::new(vec![range("09:00", "09:50")], 30).unwrap();
        assert_eq!(starts(&generator), ["09:00"]);
    }

    #[test]
    fn test_interval_shorter_than_slot() {
        let generator = SlotGenerator::new(vec![range("09:00", "09:20")], 30).unwrap();
        assert_eq!(generator.iter().count(), 0);
    }

    #[test]
    fn test_intervals_processed_independently() {
        let generator = SlotGenerator::new(
            vec![range("08:00", "09:00"), range("14:00", "15:00")],
            30,
        )
        .unwrap();
        assert_eq!(starts(&generator), ["08:00", "08:30", "14:00", "14:30"]);

        // Overlapping inputs produce overlapping slots by design.
        let overlapping = SlotGenerator::new(
            vec![range("09:00", "10:00"), range("09:30", "10:30")],
            30,
        )
        .unwrap();
        assert_eq!(starts(&overlapping), ["09:00", "09:30", "09:30", "10:00"]);
    }

    #[test]
    fn test_restartable() {
        let generator = SlotGenerator::new(vec![range("09:00", "10:00")], 30).unwrap();
        let first: Vec<Slot> = generator.iter().collect();
        let second: Vec<Slot> = generator.iter().collect();
        assert_eq!(first, second);

        // A cloned iterator resumes from the clone point.
        let mut iter = generator.iter();
        iter.next();
        let mut resumed = iter.clone();
        assert_eq!(iter.next(), resumed.next());
    }

    #[test]
    fn test_slot_ends_follow_duration() {
        let generator = SlotGenerator::new(vec![range("09:00", "10:00")], 20).unwrap();
        let slots: Vec<Slot> = generator.iter().collect();
        assert_eq!(slots.len(), 3);
        for slot in slots {
            assert_eq!(slot.duration_minutes(), 20);
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(SlotGenerator::new(vec![range("09:00", "10:00")], 0).is_err());
    }

    #[test]
    fn test_oversized_duration_rejected() {
        // Durations of a day or more can never fit a within-day interval;
        // accepting one would wrap the cursor arithmetic into inverted
        // slots and a scan that never terminates.
        for minutes in [1440, 65000, u16::MAX] {
            assert!(
                SlotGenerator::new(vec![range("09:00", "10:00")], minutes).is_err(),
                "{minutes} minutes accepted"
            );
        }
    }

    #[test]
    fn test_longest_valid_duration_terminates() {
        // 1439 minutes is the largest accepted duration; it fits the full
        // day exactly once and nothing shorter than itself.
        let full_day = SlotGenerator::new(vec![range("00:00", "23:59")], 1439).unwrap();
        assert_eq!(full_day.iter().count(), 1);

        let one_hour = SlotGenerator::new(vec![range("09:00", "10:00")], 1439).unwrap();
        assert_eq!(one_hour.iter().count(), 0);
    }

    #[test]
    fn test_late_evening_interval() {
        // End of day: [23:00, 23:59) must not overflow past-midnight math.
        let generator = SlotGenerator::new(vec![range("23:00", "23:59")], 30).unwrap();
        assert_eq!(starts(&generator), ["23:00"]);
    }
}
