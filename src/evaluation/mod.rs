//! Deadline-window evaluation logic for the compliance notification engine.
//!
//! This module contains the pure computation at the core of the crate:
//! initial-test warning windows counted in days from the effective start
//! date, follow-up test windows counted in synthetic 30.44-day months, and
//! the [`evaluate`] entry point that applies both to a roster snapshot.

mod engine;
mod followup_window;
mod initial_window;

pub use engine::evaluate;
pub use followup_window::{
    FOLLOWUP_CYCLE_MONTHS, FOLLOWUP_NOTICE_DAYS, SYNTHETIC_MONTH_DAYS, followup_due,
};
pub use initial_window::{
    INITIAL_TEST_DUE_DAYS, ONE_WEEK_WARNING_WINDOW, TWO_WEEK_WARNING_WINDOW, initial_warnings,
};
