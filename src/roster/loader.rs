//! Roster loading functionality.
//!
//! The roster is a CSV dataset with the columns `First Name`, `Last Name`,
//! `Account Id`, `Employee Status`, `Date Hired`, and `Date Re-Hired`
//! (blank-able). Date cells parse with the fixed `%Y-%m-%d` format. Any
//! malformed required field aborts the whole load: a partial roster could
//! silently miss a test obligation, so the loader never produces one.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeStatus};

/// The fixed input format for roster date cells.
const ROSTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw roster row, addressed by header name.
#[derive(Debug, Deserialize)]
struct RosterRecord {
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Account Id")]
    account_id: String,
    #[serde(rename = "Employee Status")]
    status: String,
    #[serde(rename = "Date Hired")]
    date_hired: String,
    #[serde(rename = "Date Re-Hired")]
    date_rehired: Option<String>,
}

impl RosterRecord {
    /// Validates and converts a raw row into an [`Employee`].
    fn into_employee(self, row: usize) -> EngineResult<Employee> {
        let invalid = |message: String| EngineError::InvalidRosterRow { row, message };

        let id = require_field(&self.account_id, "Account Id", row)?;
        let first_name = require_field(&self.first_name, "First Name", row)?;
        let last_name = require_field(&self.last_name, "Last Name", row)?;
        let status_raw = require_field(&self.status, "Employee Status", row)?;

        let status = EmployeeStatus::parse(&status_raw)
            .ok_or_else(|| invalid(format!("unknown Employee Status '{}'", status_raw)))?;

        let hire_raw = require_field(&self.date_hired, "Date Hired", row)?;
        let hire_date = parse_roster_date(&hire_raw)
            .ok_or_else(|| invalid(format!("unparseable Date Hired '{}'", hire_raw)))?;

        // A blank re-hire cell means "never rehired", not an earlier date.
        let rehire_date = match self.date_rehired.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                parse_roster_date(raw)
                    .ok_or_else(|| invalid(format!("unparseable Date Re-Hired '{}'", raw)))?,
            ),
        };

        Ok(Employee {
            id,
            first_name,
            last_name,
            status,
            hire_date,
            rehire_date,
        })
    }
}

/// Returns the trimmed field value, or an error if it is empty.
fn require_field(value: &str, name: &str, row: usize) -> EngineResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidRosterRow {
            row,
            message: format!("missing {}", name),
        });
    }
    Ok(trimmed.to_string())
}

/// Parses a roster date cell with the fixed input format.
fn parse_roster_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ROSTER_DATE_FORMAT).ok()
}

/// Loads the roster from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the roster CSV file.
///
/// # Returns
///
/// Returns all employees in roster order, or an error if the file is
/// missing, is not valid CSV with the expected headers, or contains any
/// malformed row.
///
/// # Example
///
/// ```no_run
/// use compliance_engine::roster::load_roster;
///
/// let employees = load_roster("data/roster.csv")?;
/// println!("{} employees on the roster", employees.len());
/// # Ok::<(), compliance_engine::error::EngineError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(EngineError::RosterNotFound { path: path_str });
    }

    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| EngineError::RosterParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    read_records(reader, &path_str)
}

/// Parses a roster from any reader carrying the CSV bytes.
///
/// Identical semantics to [`load_roster`] apart from the source.
///
/// # Example
///
/// ```
/// use compliance_engine::roster::parse_roster;
///
/// let csv = "\
/// First Name,Last Name,Account Id,Employee Status,Date Hired,Date Re-Hired
/// Dana,Reyes,acct_1042,Active,2024-01-01,
/// ";
/// let employees = parse_roster(csv.as_bytes())?;
/// assert_eq!(employees.len(), 1);
/// assert!(employees[0].rehire_date.is_none());
/// # Ok::<(), compliance_engine::error::EngineError>(())
/// ```
pub fn parse_roster<R: Read>(reader: R) -> EngineResult<Vec<Employee>> {
    let csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    read_records(csv_reader, "<roster>")
}

/// Deserializes and validates every row, aborting on the first bad one.
fn read_records<R: Read>(mut reader: csv::Reader<R>, source: &str) -> EngineResult<Vec<Employee>> {
    let mut employees = Vec::new();

    for (index, record) in reader.deserialize::<RosterRecord>().enumerate() {
        let row = index + 1;
        let record = record.map_err(|e| EngineError::RosterParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        employees.push(record.into_employee(row)?);
    }

    Ok(employees)
}
