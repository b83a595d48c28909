//! Session context
//!
//! The day, its secret word, and the number of tries are computed once when a
//! session starts and passed explicitly to everything that needs them.

use crate::calendar::DayKey;
use crate::config::{ConfigError, GameConfig};
use crate::core::SecretWord;
use crate::wordlists::{WordList, word_of_the_day};
use chrono::{DateTime, Local, TimeZone};

/// Everything fixed for the lifetime of one day's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    day: DayKey,
    secret: SecretWord,
    tries: usize,
}

impl SessionContext {
    /// # Panics
    /// Panics if `tries` is zero.
    #[must_use]
    pub fn new(day: DayKey, secret: SecretWord, tries: usize) -> Self {
        assert!(tries > 0, "a session needs at least one try");
        Self { day, secret, tries }
    }

    /// Context for the day containing `now`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn at<Tz: TimeZone>(
        now: &DateTime<Tz>,
        config: &GameConfig,
        words: &WordList,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let day = DayKey::from_datetime(now);
        let secret = word_of_the_day(words, day).clone();
        Ok(Self::new(day, secret, config.tries))
    }

    /// Context for today in the local time zone
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn today(config: &GameConfig, words: &WordList) -> Result<Self, ConfigError> {
        Self::at(&Local::now(), config, words)
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> DayKey {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }
}
