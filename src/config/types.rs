//! Configuration types for the compliance notification engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

/// Runtime configuration for the tracker service.
///
/// Loaded once at startup; the engine itself never reads configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Path to the roster CSV file, reloaded on every evaluation.
    pub roster_path: String,
    /// The outbound webhook URL. When absent, evaluations still run and
    /// delivery is skipped.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Hour of day (0-23, UTC) the scheduled evaluation fires.
    #[serde(default = "default_notify_hour")]
    pub notify_hour: u32,
    /// Address the HTTP trigger endpoint binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_notify_hour() -> u32 {
    9
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
roster_path: data/roster.csv
webhook_url: https://hooks.example.com/abc
notify_hour: 7
bind_addr: 0.0.0.0:8080
"#;
        let config: TrackerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.roster_path, "data/roster.csv");
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://hooks.example.com/abc")
        );
        assert_eq!(config.notify_hour, 7);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults_apply_when_fields_absent() {
        let yaml = "roster_path: data/roster.csv\n";
        let config: TrackerConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.webhook_url.is_none());
        assert_eq!(config.notify_hour, 9);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_roster_path_is_required() {
        let yaml = "notify_hour: 9\n";
        let result: Result<TrackerConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
