//! Practitioner availability and booking-conflict core.
//!
//! Given a practitioner's recurring weekly working-hour template, optional
//! date-specific overrides, and the bookings already on record, this crate
//! determines which fixed-duration slots are offerable to a patient and
//! whether a proposed booking may be accepted.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClockTime`, `TimeRange`, `Weekday`,
//!   `WeeklyRule`, `DateOverride`, `Slot`, `Booking`
//! - **`resolver`**: Availability pipeline — date overrides, weekly
//!   template, slot generation
//! - **`conflict`**: Booking conflict checker
//! - **`horizon`**: Forward scan for days with open slots
//! - **`service`**: Facade over the external schedule/booking sources
//! - **`validation`**: Collect-all integrity checks for admin tooling
//!
//! # Design
//!
//! Everything here is a pure, synchronous function over in-memory
//! snapshots. Storage, transport, and the system clock enter only through
//! the `ScheduleSource`/`BookingSource`/`Clock` seams, and errors are
//! values — a malformed stored rule is reported, never skipped.

pub mod clock;
pub mod conflict;
pub mod error;
pub mod horizon;
pub mod models;
pub mod resolver;
pub mod service;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use conflict::{check_booking_conflict, BookingRequest, ConflictOutcome};
pub use error::{ScheduleError, ScheduleResult};
pub use horizon::{scan_horizon, DayAvailability, DEFAULT_HORIZON_DAYS};
pub use models::{
    Booking, BookingStatus, ClockTime, DateOverride, OverrideSlot, PractitionerSchedule, Slot,
    TimeRange, Weekday, WeeklyRule,
};
pub use resolver::{resolve_availability, SlotGenerator, DEFAULT_SLOT_MINUTES};
pub use service::{BookingDecision, BookingService, BookingSource, ScheduleSource};
