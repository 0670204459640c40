//! Application configuration loaded from environment variables.

use crate::error::ConfigError;

/// Optional endpoints that can be switched off per deployment.
///
/// `/health` and `/api/status` are always served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// `GET /ready`
    pub ready: bool,
    /// `GET /api/geo/info`
    pub geo: bool,
    /// `GET /metrics`
    pub metrics: bool,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ready: true,
            geo: true,
            metrics: true,
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `NODE_ENV` — environment name reported by `/api/status` (default: `"development"`);
///   `APP_ENV` is read when `NODE_ENV` is unset
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `ENABLE_READY`, `ENABLE_GEO`, `ENABLE_METRICS` — optional endpoints (default: on)
///
/// Empty values are treated as unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };

        let flag = |name: &'static str, default: bool| match get(name) {
            Some(value) => parse_flag(name, value),
            None => Ok(default),
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            environment: get("NODE_ENV")
                .or_else(|| get("APP_ENV"))
                .unwrap_or(defaults.environment),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            endpoints: Endpoints {
                ready: flag("ENABLE_READY", defaults.endpoints.ready)?,
                geo: flag("ENABLE_GEO", defaults.endpoints.geo)?,
                metrics: flag("ENABLE_METRICS", defaults.endpoints.metrics)?,
            },
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.environment, "development");
        assert!(config.endpoints.ready && config.endpoints.geo && config.endpoints.metrics);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("APP_ENV", "production"),
            ("RUST_LOG", "debug"),
            ("ENABLE_READY", "off"),
            ("ENABLE_METRICS", "FALSE"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8081");
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_level, "debug");
        assert!(!config.endpoints.ready);
        assert!(config.endpoints.geo);
        assert!(!config.endpoints.metrics);
    }

    #[test]
    fn test_node_env_sets_environment() {
        let config = Config::from_lookup(lookup_from(&[("NODE_ENV", "production")])).unwrap();
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_node_env_takes_precedence_over_app_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("NODE_ENV", "production"),
            ("APP_ENV", "staging"),
        ]))
        .unwrap();
        assert_eq!(config.environment, "production");

        let config =
            Config::from_lookup(lookup_from(&[("NODE_ENV", ""), ("APP_ENV", "staging")])).unwrap();
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[("PORT", ""), ("NODE_ENV", "")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));

        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("ENABLE_GEO", "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidFlag { name: "ENABLE_GEO", ref value } if value == "maybe"
        ));
    }

    #[test]
    fn test_flag_spellings() {
        for on in ["1", "true", "Yes", "ON"] {
            assert!(parse_flag("ENABLE_READY", on.to_string()).unwrap());
        }
        for off in ["0", "false", "No", "off"] {
            assert!(!parse_flag("ENABLE_READY", off.to_string()).unwrap());
        }
    }
}
