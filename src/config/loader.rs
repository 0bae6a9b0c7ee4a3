//! Configuration loading functionality.
//!
//! This module loads the [`TrackerConfig`] from a YAML file, applying the
//! `WEBHOOK_URL` environment override on top of the file contents.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TrackerConfig;

/// Environment variable that overrides the configured webhook URL.
pub const WEBHOOK_URL_ENV: &str = "WEBHOOK_URL";

/// Loads configuration from the specified YAML file.
///
/// If the `WEBHOOK_URL` environment variable is set and non-empty, it
/// overrides the file's `webhook_url` value. A configuration without any
/// webhook target is still valid: evaluations run and delivery is skipped.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g. "config/tracker.yaml").
///
/// # Returns
///
/// Returns the parsed configuration, or an error if the file is missing,
/// contains invalid YAML, or sets `notify_hour` outside 0-23.
///
/// # Example
///
/// ```no_run
/// use compliance_engine::config::load_config;
///
/// let config = load_config("config/tracker.yaml")?;
/// println!("roster at {}", config.roster_path);
/// # Ok::<(), compliance_engine::error::EngineError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<TrackerConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let mut config: TrackerConfig =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    if config.notify_hour > 23 {
        return Err(EngineError::ConfigParseError {
            path: path_str,
            message: format!("notify_hour {} is not an hour of day", config.notify_hour),
        });
    }

    if let Ok(url) = env::var(WEBHOOK_URL_ENV) {
        if !url.trim().is_empty() {
            config.webhook_url = Some(url.trim().to_string());
        }
    }

    Ok(config)
}
