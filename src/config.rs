//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so running with an empty environment
//! is always valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_WINDOW_DAYS;
use std::env;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an address book session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: i64,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window, 1 to 365 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", UPCOMING_WINDOW_DAYS)?;
        if !(1..=365).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 365".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "error".to_string())
            .to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_i64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_I64", " 42 ");

        assert_eq!(Config::parse_env_i64("TEST_I64", 7).unwrap(), 42);
        assert_eq!(Config::parse_env_i64("NONEXISTENT_I64", 7).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_parse_env_i64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_I64_INVALID", "seven");

        assert!(Config::parse_env_i64("TEST_I64_INVALID", 7).is_err());
    }
}
