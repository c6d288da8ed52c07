//! Injectable clock.
//!
//! The pure resolvers never read the system clock; "today" enters through
//! this trait so that horizon scans and today/tomorrow labels are testable.

use chrono::NaiveDate;

/// Provides the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock for production callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Fixed clock for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
