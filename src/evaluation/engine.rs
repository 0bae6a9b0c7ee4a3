//! The deadline-window evaluation entry point.
//!
//! [`evaluate`] applies the initial-test and follow-up windows to every
//! active employee in a roster snapshot and returns the sorted notification
//! set for one reference date.

use chrono::{Duration, NaiveDate};

use crate::models::{Employee, EvaluationResult, Notification, NotificationKind};

use super::followup_window::followup_due;
use super::initial_window::{INITIAL_TEST_DUE_DAYS, initial_warnings};

/// Evaluates a roster snapshot against a reference date.
///
/// Deterministic and pure: no side effects, no I/O, no state carried between
/// calls. Employees whose status is not active are skipped entirely. The
/// initial and follow-up checks run independently of each other, and each
/// notification is constructed as a fresh value from the employee's fields.
///
/// Both output sequences are sorted ascending by deadline date with a stable
/// sort, so employees sharing a deadline keep their roster order.
///
/// # Arguments
///
/// * `employees` - The roster snapshot to evaluate.
/// * `reference_date` - The date the evaluation runs for. Callers holding a
///   timestamp must truncate it to its day first; the engine only reasons in
///   whole days.
///
/// # Examples
///
/// ```
/// use compliance_engine::evaluation::evaluate;
/// use compliance_engine::models::{Employee, EmployeeStatus, NotificationKind};
/// use chrono::NaiveDate;
///
/// let employees = vec![Employee {
///     id: "acct_1042".to_string(),
///     first_name: "Dana".to_string(),
///     last_name: "Reyes".to_string(),
///     status: EmployeeStatus::Active,
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     rehire_date: None,
/// }];
///
/// // Day 76 after the start date: the 2-week warning window.
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
/// let result = evaluate(&employees, reference);
///
/// assert_eq!(result.initial_tests.len(), 1);
/// assert_eq!(result.initial_tests[0].kind, NotificationKind::TwoWeekWarning);
/// assert_eq!(
///     result.initial_tests[0].deadline,
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
/// );
/// ```
pub fn evaluate(employees: &[Employee], reference_date: NaiveDate) -> EvaluationResult {
    let mut initial_tests = Vec::new();
    let mut followup_tests = Vec::new();

    for employee in employees {
        if !employee.is_active() {
            continue;
        }

        let effective_start = employee.effective_start_date();
        let days_since_start = (reference_date - effective_start).num_days();

        let initial_deadline = effective_start + Duration::days(INITIAL_TEST_DUE_DAYS);
        for kind in initial_warnings(days_since_start) {
            initial_tests.push(make_notification(employee, effective_start, kind, initial_deadline));
        }

        if let Some(deadline) = followup_due(effective_start, reference_date) {
            followup_tests.push(make_notification(
                employee,
                effective_start,
                NotificationKind::Followup,
                deadline,
            ));
        }
    }

    initial_tests.sort_by_key(|n: &Notification| n.deadline);
    followup_tests.sort_by_key(|n: &Notification| n.deadline);

    EvaluationResult {
        initial_tests,
        followup_tests,
    }
}

/// Builds a fresh notification from an employee's fields.
fn make_notification(
    employee: &Employee,
    effective_start: NaiveDate,
    kind: NotificationKind,
    deadline: NaiveDate,
) -> Notification {
    Notification {
        employee_name: employee.full_name(),
        employee_id: employee.id.clone(),
        effective_start_date: effective_start,
        kind,
        deadline,
    }
}
