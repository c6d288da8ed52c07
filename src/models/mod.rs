//! Scheduling domain models.
//!
//! Core data types for practitioner availability: clock times and
//! half-open intervals, the canonical weekday, the two schedule layers
//! (weekly template and date overrides), bookings, and offerable slots.

mod booking;
mod schedule;
mod slot;
mod time;
mod weekday;

pub use booking::{Booking, BookingStatus};
pub use schedule::{DateOverride, OverrideSlot, PractitionerSchedule, WeeklyRule};
pub use slot::Slot;
pub use time::{overlaps, ClockTime, TimeRange, MINUTES_PER_DAY};
pub use weekday::Weekday;
