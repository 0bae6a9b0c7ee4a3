//! Drug-Test Compliance Notification Engine
//!
//! This crate tracks employee drug-test obligations from a roster dataset and
//! computes timed notifications for two recurring duties: an initial test due
//! within 90 days of the effective start date, and a follow-up test due every
//! 5 synthetic months thereafter.
//!
//! The heart of the crate is [`evaluation::evaluate`], a pure function from a
//! roster snapshot and a reference date to a sorted notification set. The
//! surrounding modules are thin I/O glue: roster loading, webhook delivery,
//! the HTTP trigger endpoint, and the daily scheduled job.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod delivery;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod payload;
pub mod pipeline;
pub mod roster;
pub mod schedule;
