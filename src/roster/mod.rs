//! Roster loading for the compliance notification engine.
//!
//! This module parses the tabular roster dataset into [`Employee`] records
//! with normalized hire and rehire dates.
//!
//! [`Employee`]: crate::models::Employee

mod loader;

pub use loader::{load_roster, parse_roster};
