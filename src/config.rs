//! Session configuration.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{
    core::{
        eval::{MAX_FRACTION_DIGITS, RESULT_FRACTION_DIGITS},
        ledger::DEFAULT_CAPACITY,
    },
    persist::{HISTORY_KEY, THEME_KEY},
};

/// Configuration load failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid JSON config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for a [`crate::session::CalculatorSession`].
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Maximum history entries kept; zero is treated as one.
    pub history_capacity: usize,
    /// Fraction digits kept on chained and equals results; capped at
    /// [`MAX_FRACTION_DIGITS`].
    pub result_fraction_digits: u32,
    /// Storage key for the history array.
    pub history_key: String,
    /// Storage key for the theme preference.
    pub theme_key: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            result_fraction_digits: RESULT_FRACTION_DIGITS,
            history_key: HISTORY_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
        }
    }
}

impl CalcConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let mut cfg: Self = serde_json::from_str(s)?;
        cfg.result_fraction_digits = cfg.result_fraction_digits.min(MAX_FRACTION_DIGITS);
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
