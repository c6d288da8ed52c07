//! Date override resolver.
//!
//! # Precedence
//! An override for a date fully replaces the weekly template for that date.
//! `Some(vec![])` — an override whose slots are empty or all closed — means
//! "explicitly closed that day" and still suppresses the template; only
//! `None` falls back to weekly rules.

use chrono::NaiveDate;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{DateOverride, TimeRange};

/// Returns the override intervals for `date`, or `None` when no override
/// exists for that exact date.
///
/// Only `is_open` entries contribute intervals, but every entry — open or
/// closed — is validated: a broken record fails the lookup rather than
/// silently fabricating or suppressing availability. When duplicate
/// overrides exist for one date the first wins (bulk validation reports the
/// duplication).
pub fn override_for_date(
    overrides: &[DateOverride],
    date: NaiveDate,
) -> ScheduleResult<Option<Vec<TimeRange>>> {
    let Some(day) = overrides.iter().find(|o| o.date == date) else {
        return Ok(None);
    };

    let mut intervals = Vec::new();
    for slot in &day.slots {
        let interval = slot.interval().map_err(|_| {
            ScheduleError::invalid_data(format!(
                "override for {date} has empty or inverted interval {}-{}",
                slot.start, slot.end
            ))
        })?;
        if slot.is_open {
            intervals.push(interval);
        }
    }
    Ok(Some(intervals))
}
