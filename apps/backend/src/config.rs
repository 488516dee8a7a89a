//! Server configuration read from the environment.

use lingolens_core::{Language, LearnerSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Largest accepted HISTORY_LIMIT.
pub const MAX_HISTORY_LIMIT: usize = 1000;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Settings a fresh server starts with.
    pub default_settings: LearnerSettings,
    /// Number of analyses kept in history.
    pub history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_settings: LearnerSettings::default(),
            history_limit: 10,
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT, DEFAULT_LANGUAGE, CONFIDENCE_THRESHOLD and
    /// HISTORY_LIMIT, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "PORT",
                value: port.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(language) = lookup("DEFAULT_LANGUAGE") {
            config.default_settings.language =
                language.parse::<Language>().map_err(|e| ConfigError::Invalid {
                    key: "DEFAULT_LANGUAGE",
                    value: language.clone(),
                    reason: e.to_string(),
                })?;
        }
        if let Some(threshold) = lookup("CONFIDENCE_THRESHOLD") {
            config.default_settings.confidence_threshold =
                threshold.parse().map_err(|e: std::num::ParseFloatError| ConfigError::Invalid {
                    key: "CONFIDENCE_THRESHOLD",
                    value: threshold.clone(),
                    reason: e.to_string(),
                })?;
            config
                .default_settings
                .validate()
                .map_err(|e| ConfigError::Invalid {
                    key: "CONFIDENCE_THRESHOLD",
                    value: threshold.clone(),
                    reason: e.to_string(),
                })?;
        }
        if let Some(limit) = lookup("HISTORY_LIMIT") {
            let parsed: usize = limit.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "HISTORY_LIMIT",
                value: limit.clone(),
                reason: e.to_string(),
            })?;
            if !(1..=MAX_HISTORY_LIMIT).contains(&parsed) {
                return Err(ConfigError::Invalid {
                    key: "HISTORY_LIMIT",
                    value: limit,
                    reason: format!("must be between 1 and {}", MAX_HISTORY_LIMIT),
                });
            }
            config.history_limit = parsed;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.default_settings, LearnerSettings::default());
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEFAULT_LANGUAGE", "fr"),
            ("CONFIDENCE_THRESHOLD", "0.6"),
            ("HISTORY_LIMIT", "25"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.default_settings.language, Language::French);
        assert_eq!(config.default_settings.confidence_threshold, 0.6);
        assert_eq!(config.history_limit, 25);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let err = ServerConfig::from_lookup(lookup(&[("CONFIDENCE_THRESHOLD", "0.1")])).unwrap_err();
        assert!(err.to_string().contains("CONFIDENCE_THRESHOLD"));
    }

    #[test]
    fn rejects_zero_history_limit() {
        let err = ServerConfig::from_lookup(lookup(&[("HISTORY_LIMIT", "0")])).unwrap_err();
        assert!(err.to_string().contains("HISTORY_LIMIT"));
    }

    #[test]
    fn rejects_huge_history_limit() {
        let err = ServerConfig::from_lookup(lookup(&[("HISTORY_LIMIT", "18446744073709551615")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be between 1 and 1000"));
    }

    #[test]
    fn accepts_history_limit_at_cap() {
        let config = ServerConfig::from_lookup(lookup(&[("HISTORY_LIMIT", "1000")])).unwrap();
        assert_eq!(config.history_limit, MAX_HISTORY_LIMIT);
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(ServerConfig::from_lookup(lookup(&[("DEFAULT_LANGUAGE", "latin")])).is_err());
    }
}
