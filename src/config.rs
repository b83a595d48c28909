//! Game configuration
//!
//! Built from command-line arguments in the binary; library callers can use
//! `GameConfig::default()` and override fields.

use std::fmt;
use std::path::PathBuf;

/// Number of tries when none is configured
pub const DEFAULT_TRIES: usize = 6;

/// Default history file, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "progle_history.json";

/// Labels printed around the share grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLabels {
    pub title: String,
    pub tagline: String,
}

impl Default for ShareLabels {
    fn default() -> Self {
        Self {
            title: "Progle".to_string(),
            tagline: "#Progle".to_string(),
        }
    }
}

/// Where the daily words come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    #[default]
    Embedded,
    File(PathBuf),
}

/// Settings shared by every front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tries: usize,
    pub store_path: PathBuf,
    pub words: WordSource,
    pub share: ShareLabels,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            words: WordSource::default(),
            share: ShareLabels::default(),
        }
    }
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoTries,
    TooManyTries(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTries => write!(f, "At least one try is required"),
            Self::TooManyTries(n) => {
                write!(f, "{n} tries is more than the supported {MAX_TRIES}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Upper bound on tries, keeps the grid displayable
pub const MAX_TRIES: usize = 26;

impl GameConfig {
    /// Check the configuration before a session starts
    ///
    /// # Errors
    /// Returns `ConfigError` when the number of tries is out of range.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        match self.tries {
            0 => Err(ConfigError::NoTries),
            n if n > MAX_TRIES => Err(ConfigError::TooManyTries(n)),
            _ => Ok(()),
        }
    }
}
