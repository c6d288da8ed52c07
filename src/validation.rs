//! Bulk schedule integrity checks.
//!
//! The resolvers fail fast on the first bad record; this module is the
//! admin-facing counterpart that accumulates every problem in a schedule so
//! staff can repair them in one pass. Detects:
//! - Empty or inverted intervals (weekly rules and override slots)
//! - Overlapping weekly rules on one weekday
//! - Duplicate overrides for one date

use std::collections::HashSet;

use crate::models::{overlaps, PractitionerSchedule, Weekday};

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A schedule integrity problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending record.
    pub message: String,
}

/// Categories of schedule integrity problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An interval has `start >= end`.
    EmptyInterval,
    /// Two weekly rules on the same weekday overlap; the slot generator
    /// would offer duplicate slots.
    OverlappingRules,
    /// More than one override exists for the same date; only the first is
    /// honored.
    DuplicateOverrideDate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a practitioner schedule, collecting all detected issues.
pub fn validate_schedule(schedule: &PractitionerSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    for rule in &schedule.weekly_rules {
        if rule.start >= rule.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                format!(
                    "weekly rule for {} has empty or inverted interval {}-{}",
                    rule.weekday, rule.start, rule.end
                ),
            ));
        }
    }

    // Pairwise overlap per weekday, valid intervals only.
    for weekday in Weekday::ALL {
        let day_rules: Vec<_> = schedule
            .weekly_rules
            .iter()
            .filter(|r| r.weekday == weekday && r.start < r.end)
            .collect();
        for (i, a) in day_rules.iter().enumerate() {
            for b in &day_rules[i + 1..] {
                if overlaps(
                    a.start.to_minutes(),
                    a.end.to_minutes(),
                    b.start.to_minutes(),
                    b.end.to_minutes(),
                ) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::OverlappingRules,
                        format!(
                            "weekly rules for {weekday} overlap: {}-{} and {}-{}",
                            a.start, a.end, b.start, b.end
                        ),
                    ));
                }
            }
        }
    }

    let mut seen_dates = HashSet::new();
    for day in &schedule.date_overrides {
        if !seen_dates.insert(day.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOverrideDate,
                format!("duplicate override for {}", day.date),
            ));
        }
        for slot in &day.slots {
            if slot.start >= slot.end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyInterval,
                    format!(
                        "override for {} has empty or inverted interval {}-{}",
                        day.date, slot.start, slot.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
