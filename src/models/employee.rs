//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing roster rows in the compliance notification engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the employment status recorded in the roster.
///
/// Only [`EmployeeStatus::Active`] employees are evaluated for test
/// obligations; every other status is skipped entirely regardless of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and subject to test obligations.
    Active,
    /// No longer on the active roster.
    Inactive,
    /// Employment has ended.
    Terminated,
    /// Temporarily away; not evaluated until reactivated.
    OnLeave,
}

impl EmployeeStatus {
    /// Parses a roster status cell into a status value.
    ///
    /// Matching is case-insensitive and accepts either spaces or underscores
    /// ("On Leave" and "on_leave" both parse). Returns `None` for anything
    /// unrecognized; the roster loader turns that into a fatal load error.
    ///
    /// # Examples
    ///
    /// ```
    /// use compliance_engine::models::EmployeeStatus;
    ///
    /// assert_eq!(EmployeeStatus::parse("Active"), Some(EmployeeStatus::Active));
    /// assert_eq!(EmployeeStatus::parse("on leave"), Some(EmployeeStatus::OnLeave));
    /// assert_eq!(EmployeeStatus::parse("retired"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(' ', "_").as_str() {
            "active" => Some(EmployeeStatus::Active),
            "inactive" => Some(EmployeeStatus::Inactive),
            "terminated" => Some(EmployeeStatus::Terminated),
            "on_leave" => Some(EmployeeStatus::OnLeave),
            _ => None,
        }
    }
}

/// Represents one employee row from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique stable identifier from the roster source (Account Id).
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employment status; only active employees are evaluated.
    pub status: EmployeeStatus,
    /// The date the employee was hired. Always present.
    pub hire_date: NaiveDate,
    /// The date the employee was rehired, if they were.
    #[serde(default)]
    pub rehire_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the employee's display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is on the active roster.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the effective start date for all deadline computation.
    ///
    /// This is the later of the hire date and the rehire date; a rehire date
    /// earlier than the hire date never wins. The value is recomputed on
    /// every call rather than cached, so it is always consistent with the
    /// current field values.
    ///
    /// # Examples
    ///
    /// ```
    /// use compliance_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "acct_1042".to_string(),
    ///     first_name: "Dana".to_string(),
    ///     last_name: "Reyes".to_string(),
    ///     status: EmployeeStatus::Active,
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     rehire_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    /// };
    /// assert_eq!(
    ///     employee.effective_start_date(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    /// );
    /// ```
    pub fn effective_start_date(&self) -> NaiveDate {
        match self.rehire_date {
            Some(rehire_date) => self.hire_date.max(rehire_date),
            None => self.hire_date,
        }
    }
}
