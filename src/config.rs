//! Configuration management for the phone directory.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_CONTACTS_FILE: &str = "contacts.txt";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for the phone directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing file of the directory (default: "contacts.txt")
    pub contacts_file: PathBuf,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_DIRECTORY_FILE`: Path of the backing file (default: "contacts.txt")
    /// - `LOG_LEVEL`: One of trace/debug/info/warn/error (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("PHONE_DIRECTORY_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONE_DIRECTORY_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONTACTS_FILE),
        };

        let log_level = Self::parse_log_level("LOG_LEVEL")?;

        Ok(Config {
            contacts_file,
            log_level,
        })
    }

    /// Parse a log level variable, falling back to the default when unset.
    fn parse_log_level(var_name: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), val),
                    })
                }
            }
            Err(_) => Ok(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
