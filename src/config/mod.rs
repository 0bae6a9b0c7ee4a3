//! Runtime configuration for the compliance notification engine.
//!
//! This module provides the [`TrackerConfig`] type and its YAML loader.

mod loader;
mod types;

pub use loader::{WEBHOOK_URL_ENV, load_config};
pub use types::TrackerConfig;
