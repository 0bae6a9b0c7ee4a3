//! Initial-test warning windows.
//!
//! A newly hired (or rehired) employee owes an initial test within 90 days
//! of their effective start date. Two countdown warnings fire on the way to
//! that deadline: a 2-week warning and a 1-week warning, each eligible for
//! an inclusive two-day range of day counts.

use std::ops::RangeInclusive;

use crate::models::NotificationKind;

/// Number of days after the effective start date the initial test is due.
pub const INITIAL_TEST_DUE_DAYS: i64 = 90;

/// Day counts (inclusive) on which the 2-week warning fires.
pub const TWO_WEEK_WARNING_WINDOW: RangeInclusive<i64> = 76..=77;

/// Day counts (inclusive) on which the 1-week warning fires.
pub const ONE_WEEK_WARNING_WINDOW: RangeInclusive<i64> = 83..=84;

/// Returns the initial-test warnings eligible at a given day count.
///
/// Warnings are only evaluated while the employee is still inside the
/// initial 90-day period. Each warning window is checked on its own rather
/// than as an else-branch of the other, so adjusting one range never changes
/// the boundary behavior of the other. The two ranges are disjoint, so at
/// most one warning is returned for any single day count.
///
/// # Arguments
///
/// * `days_since_start` - Whole days elapsed from the effective start date
///   to the reference date. May be negative for start dates in the future.
///
/// # Examples
///
/// ```
/// use compliance_engine::evaluation::initial_warnings;
/// use compliance_engine::models::NotificationKind;
///
/// assert_eq!(initial_warnings(76), vec![NotificationKind::TwoWeekWarning]);
/// assert_eq!(initial_warnings(84), vec![NotificationKind::OneWeekWarning]);
/// assert!(initial_warnings(78).is_empty());
/// assert!(initial_warnings(91).is_empty());
/// ```
pub fn initial_warnings(days_since_start: i64) -> Vec<NotificationKind> {
    let mut warnings = Vec::new();

    if days_since_start <= INITIAL_TEST_DUE_DAYS {
        if TWO_WEEK_WARNING_WINDOW.contains(&days_since_start) {
            warnings.push(NotificationKind::TwoWeekWarning);
        }
        if ONE_WEEK_WARNING_WINDOW.contains(&days_since_start) {
            warnings.push(NotificationKind::OneWeekWarning);
        }
    }

    warnings
}
