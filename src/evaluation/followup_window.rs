//! Follow-up test windows.
//!
//! After the initial period, a test is due every 5 synthetic months. A
//! synthetic month is a fixed 30.44 days, not a calendar month, so
//! consecutive deadlines drift from calendar anniversaries over time. Day
//! offsets derived from the synthetic month are floor-truncated, which keeps
//! every deadline on a whole calendar day.

use chrono::{Duration, NaiveDate};

/// Fixed length of one synthetic month in days.
pub const SYNTHETIC_MONTH_DAYS: f64 = 30.44;

/// Number of synthetic months between consecutive follow-up tests.
pub const FOLLOWUP_CYCLE_MONTHS: f64 = 5.0;

/// Days of advance notice (inclusive) during which a follow-up reminder fires.
pub const FOLLOWUP_NOTICE_DAYS: i64 = 7;

/// Returns the next follow-up deadline if the reference date falls inside
/// the notice window ahead of it.
///
/// The month count must strictly exceed one cycle before follow-ups begin;
/// the cycle index is the number of whole 5-month cycles elapsed, and the
/// reminder fires when the next cycle deadline is at most
/// [`FOLLOWUP_NOTICE_DAYS`] days away (and not already past).
///
/// # Arguments
///
/// * `effective_start` - The later of hire and rehire date.
/// * `reference_date` - The date the evaluation runs for.
///
/// # Examples
///
/// ```
/// use compliance_engine::evaluation::followup_due;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// // 300 days in: the second cycle deadline (start + 304 days) is 4 days out.
/// let reference = NaiveDate::from_ymd_opt(2023, 10, 28).unwrap();
/// assert_eq!(
///     followup_due(start, reference),
///     Some(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap())
/// );
///
/// // 100 days in: still inside the initial period, nothing is due.
/// let reference = NaiveDate::from_ymd_opt(2023, 4, 11).unwrap();
/// assert_eq!(followup_due(start, reference), None);
/// ```
pub fn followup_due(effective_start: NaiveDate, reference_date: NaiveDate) -> Option<NaiveDate> {
    let days_since_start = (reference_date - effective_start).num_days();
    let months_since_start = days_since_start as f64 / SYNTHETIC_MONTH_DAYS;

    // Follow-ups only begin once the first full cycle is strictly behind us.
    if months_since_start <= FOLLOWUP_CYCLE_MONTHS {
        return None;
    }

    let cycle_index = (months_since_start / FOLLOWUP_CYCLE_MONTHS).floor();
    let cycle_offset_days = (FOLLOWUP_CYCLE_MONTHS * SYNTHETIC_MONTH_DAYS * cycle_index).floor();
    let cycle_length_days = (FOLLOWUP_CYCLE_MONTHS * SYNTHETIC_MONTH_DAYS).floor() as i64;

    let last_test_due = effective_start + Duration::days(cycle_offset_days as i64);
    let next_test_due = last_test_due + Duration::days(cycle_length_days);

    let days_until_next = (next_test_due - reference_date).num_days();
    if (0..=FOLLOWUP_NOTICE_DAYS).contains(&days_until_next) {
        Some(next_test_due)
    } else {
        None
    }
}
