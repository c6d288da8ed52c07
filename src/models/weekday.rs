//! Canonical weekday type and its single normalization table.
//!
//! Stored schedule data reaches the core in several encodings: English enum
//! strings, Vietnamese labels, bare numeric indices, and `chrono::Weekday`
//! values derived from calendar dates. Exactly one lookup table, here, maps
//! every accepted encoding to the canonical type — resolvers never compare
//! raw strings.
//!
//! # Indexing
//! 0 = Sunday through 6 = Saturday.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// A canonical weekday, indexed 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// The one normalization table. Keys are matched case-insensitively after
/// trimming; every encoding observed in stored data appears exactly once.
const LOOKUP: &[(&str, Weekday)] = &[
    // English enum strings and abbreviations
    ("sunday", Weekday::Sunday),
    ("monday", Weekday::Monday),
    ("tuesday", Weekday::Tuesday),
    ("wednesday", Weekday::Wednesday),
    ("thursday", Weekday::Thursday),
    ("friday", Weekday::Friday),
    ("saturday", Weekday::Saturday),
    ("sun", Weekday::Sunday),
    ("mon", Weekday::Monday),
    ("tue", Weekday::Tuesday),
    ("wed", Weekday::Wednesday),
    ("thu", Weekday::Thursday),
    ("fri", Weekday::Friday),
    ("sat", Weekday::Saturday),
    // Vietnamese labels
    ("chủ nhật", Weekday::Sunday),
    ("thứ 2", Weekday::Monday),
    ("thứ hai", Weekday::Monday),
    ("thứ 3", Weekday::Tuesday),
    ("thứ ba", Weekday::Tuesday),
    ("thứ 4", Weekday::Wednesday),
    ("thứ tư", Weekday::Wednesday),
    ("thứ 5", Weekday::Thursday),
    ("thứ năm", Weekday::Thursday),
    ("thứ 6", Weekday::Friday),
    ("thứ sáu", Weekday::Friday),
    ("thứ 7", Weekday::Saturday),
    ("thứ bảy", Weekday::Saturday),
    // Numeric index, 0 = Sunday
    ("0", Weekday::Sunday),
    ("1", Weekday::Monday),
    ("2", Weekday::Tuesday),
    ("3", Weekday::Wednesday),
    ("4", Weekday::Thursday),
    ("5", Weekday::Friday),
    ("6", Weekday::Saturday),
];

impl Weekday {
    /// All weekdays in index order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Canonical index, 0 = Sunday.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for a canonical index.
    ///
    /// Out-of-range indices are `InvalidScheduleData` — they can only come
    /// from a corrupt stored record.
    pub fn from_index(index: u8) -> ScheduleResult<Self> {
        Self::ALL.get(index as usize).copied().ok_or_else(|| {
            ScheduleError::invalid_data(format!("weekday index {index} out of range 0..=6"))
        })
    }

    /// Normalizes any accepted external encoding via the lookup table.
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        let key = text.trim().to_lowercase();
        LOOKUP
            .iter()
            .find(|(label, _)| *label == key)
            .map(|(_, day)| *day)
            .ok_or_else(|| {
                ScheduleError::invalid_data(format!("unrecognized weekday label {text:?}"))
            })
    }

    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // num_days_from_sunday matches the canonical 0 = Sunday indexing.
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()).unwrap(), day);
        }
        assert!(Weekday::from_index(7).is_err());
    }

    #[test]
    fn test_every_encoding_normalizes() {
        assert_eq!(Weekday::parse("MONDAY").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("mon").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("Thứ 2").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("thứ hai").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("1").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("chủ nhật").unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::parse(" 0 ").unwrap(), Weekday::Sunday);
        assert!(Weekday::parse("someday").is_err());
    }

    #[test]
    fn test_chrono_conversion() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }
}
