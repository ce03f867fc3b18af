//! Runtime configuration.
//!
//! Values come from command-line flags first, then environment variables,
//! then built-in defaults:
//!
//! - `ADDRESSBOOK_FILE`: snapshot path (default `.data/addressbook.json`)
//! - `ADDRESSBOOK_LOG`: log filter used when `RUST_LOG` is unset (default `warn`)
//! - `ADDRESSBOOK_WINDOW_DAYS`: upcoming-birthday window in days (default 7)

use std::env;
use std::path::PathBuf;

use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries::DEFAULT_WINDOW_DAYS;

pub const DEFAULT_DATA_FILE: &str = ".data/addressbook.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the snapshot is read from and written to.
    pub data_file: PathBuf,

    /// Fallback log filter.
    pub log_level: String,

    /// Days ahead `birthdays` looks.
    pub window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    pub fn from_env() -> BookResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> BookResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(file) = lookup("ADDRESSBOOK_FILE").filter(|s| !s.trim().is_empty()) {
            config.data_file = PathBuf::from(file);
        }
        if let Some(level) = lookup("ADDRESSBOOK_LOG").filter(|s| !s.trim().is_empty()) {
            config.log_level = level;
        }
        if let Some(raw) = lookup("ADDRESSBOOK_WINDOW_DAYS") {
            config.window_days = raw.trim().parse().map_err(|_| BookError::Config {
                var: "ADDRESSBOOK_WINDOW_DAYS".to_string(),
                reason: format!("expected a non-negative whole number, got '{}'", raw),
            })?;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of what the environment gave.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        log_level: Option<String>,
        window_days: Option<u32>,
    ) -> Self {
        if let Some(file) = data_file {
            self.data_file = file;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(days) = window_days {
            self.window_days = days;
        }
        self
    }
}
