//! Notification models for the compliance notification engine.
//!
//! This module contains the [`Notification`] type produced by the evaluation
//! engine, the [`NotificationKind`] enum, and the [`EvaluationResult`] bundle
//! returned from one evaluation call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the kind of reminder a notification carries.
///
/// Initial-test warnings fire on a 2-week and a 1-week countdown to the
/// 90-day deadline; follow-up reminders fire ahead of each 5-month cycle
/// deadline.
///
/// # Example
///
/// ```
/// use compliance_engine::models::NotificationKind;
///
/// let kind = NotificationKind::TwoWeekWarning;
/// assert_eq!(kind.title(), "2 Week Warning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Two weeks remain until the initial 90-day test deadline.
    #[serde(rename = "2_week_warning")]
    TwoWeekWarning,
    /// One week remains until the initial 90-day test deadline.
    #[serde(rename = "1_week_warning")]
    OneWeekWarning,
    /// A recurring 5-month follow-up test is due.
    #[serde(rename = "followup")]
    Followup,
}

impl NotificationKind {
    /// Returns the wire label for this kind (e.g. `2_week_warning`).
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::TwoWeekWarning => "2_week_warning",
            NotificationKind::OneWeekWarning => "1_week_warning",
            NotificationKind::Followup => "followup",
        }
    }

    /// Returns the human-readable rendering of this kind.
    ///
    /// Underscores become spaces and each word is title-cased, so
    /// `2_week_warning` renders as "2 Week Warning".
    pub fn title(&self) -> String {
        self.label()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true if this kind belongs to the initial 90-day test period.
    pub fn is_initial(&self) -> bool {
        !matches!(self, NotificationKind::Followup)
    }
}

/// Represents one flagged employee/obligation pair.
///
/// Notifications are created fresh on each evaluation call and hold no
/// identity beyond that call; there is no persisted notification store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The employee's display name ("First Last").
    pub employee_name: String,
    /// The employee's roster identifier.
    pub employee_id: String,
    /// The effective start date the deadline derives from.
    pub effective_start_date: NaiveDate,
    /// The kind of reminder.
    pub kind: NotificationKind,
    /// The calendar date the obligation is due.
    pub deadline: NaiveDate,
}

/// The output of one evaluation call.
///
/// Both sequences are sorted ascending by deadline date; ties keep the
/// roster's input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Warnings for employees approaching their initial 90-day deadline.
    pub initial_tests: Vec<Notification>,
    /// Reminders for employees whose 5-month follow-up test is due.
    pub followup_tests: Vec<Notification>,
}

impl EvaluationResult {
    /// Returns true if neither category produced a notification.
    ///
    /// An empty result is a valid, non-error outcome of an evaluation run.
    pub fn is_empty(&self) -> bool {
        self.initial_tests.is_empty() && self.followup_tests.is_empty()
    }

    /// Returns the total number of notifications across both categories.
    pub fn len(&self) -> usize {
        self.initial_tests.len() + self.followup_tests.len()
    }
}
