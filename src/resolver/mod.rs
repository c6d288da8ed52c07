//! Availability resolution pipeline.
//!
//! Date override resolver → weekly template fallback → slot generator.
//! All stages are pure functions over in-memory snapshots; they perform no
//! I/O and surface malformed stored data as errors instead of empty output.

mod availability;
mod overrides;
mod slots;
mod weekly;

pub use availability::{resolve_availability, working_intervals};
pub use overrides::override_for_date;
pub use slots::{SlotGenerator, Slots, DEFAULT_SLOT_MINUTES};
pub use weekly::rules_for_weekday;
