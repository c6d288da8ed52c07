//! Weekly template resolver.
//!
//! Looks up the recurring working intervals for one weekday. Rules are
//! compared only on the canonical [`Weekday`] — every external encoding is
//! normalized before the data reaches this module.

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{TimeRange, Weekday, WeeklyRule};

/// Returns the working intervals for `weekday`, in rule order.
///
/// Multiple rules on one weekday (split shifts) stay independent intervals;
/// nothing is merged. A matching rule with `start >= end` fails the whole
/// lookup with `InvalidScheduleData` naming the rule — a broken template
/// must not silently shrink availability.
pub fn rules_for_weekday(
    rules: &[WeeklyRule],
    weekday: Weekday,
) -> ScheduleResult<Vec<TimeRange>> {
    rules
        .iter()
        .filter(|rule| rule.weekday == weekday)
        .map(|rule| {
            rule.interval().map_err(|_| {
                ScheduleError::invalid_data(format!(
                    "weekly rule for {} has empty or inverted interval {}-{}",
                    rule.weekday, rule.start, rule.end
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;

    fn t(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    #[test]
    fn test_filters_by_weekday() {
        let rules = vec![
            WeeklyRule::new(Weekday::Monday, t("08:00"), t("12:00")),
            WeeklyRule::new(Weekday::Tuesday, t("09:00"), t("17:00")),
            WeeklyRule::new(Weekday::Monday, t("14:00"), t("18:00")),
        ];

        let monday = rules_for_weekday(&rules, Weekday::Monday).unwrap();
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].start, t("08:00"));
        assert_eq!(monday[1].start, t("14:00")); // input order preserved

        assert!(rules_for_weekday(&rules, Weekday::Sunday)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_split_shifts_stay_separate() {
        let rules = vec![
            WeeklyRule::new(Weekday::Friday, t("08:00"), t("12:00")),
            WeeklyRule::new(Weekday::Friday, t("12:00"), t("16:00")),
        ];
        // Adjacent shifts are not merged into 08:00-16:00.
        let friday = rules_for_weekday(&rules, Weekday::Friday).unwrap();
        assert_eq!(friday.len(), 2);
    }

    #[test]
    fn test_inverted_rule_fails_lookup() {
        let rules = vec![
            WeeklyRule::new(Weekday::Monday, t("08:00"), t("12:00")),
            WeeklyRule::new(Weekday::Monday, t("15:00"), t("13:00")),
        ];
        let err = rules_for_weekday(&rules, Weekday::Monday).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ScheduleError::InvalidScheduleData { .. }
        ));
        // Other weekdays are unaffected by the broken Monday rule.
        assert!(rules_for_weekday(&rules, Weekday::Tuesday)
            .unwrap()
            .is_empty());
    }
}
