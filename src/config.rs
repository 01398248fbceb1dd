//! Configuration for the contact book core.
//!
//! Everything is optional with a sensible default; the crate works with no
//! environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the persisted contact file.
pub const DEFAULT_DATA_PATH: &str = "contacts.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted contact file
    pub data_path: PathBuf,

    /// Log level (default: "error"); advisory for the embedding front end,
    /// which owns the tracing subscriber
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Path of the persisted contact file
    ///   (default: `contacts.json`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// A `.env` file is loaded best-effort first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `CONTACT_BOOK_PATH` is set but
    /// empty.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let data_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_BOOK_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_DATA_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: "error".to_string(),
        }
    }
}
