//! Daily word list and word-of-the-day selection
//!
//! The word list is fixed, ordered configuration data. The secret for a day is
//! `words[ordinal mod len]`, so selection never fails for any day.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::calendar::DayKey;
use crate::core::SecretWord;
use std::fmt;
use std::io;
use std::path::Path;

/// Error type for word lists that cannot serve daily words
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    Empty,
    MixedLengths { expected: usize, word: String },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid words"),
            Self::MixedLengths { expected, word } => write!(
                f,
                "Word '{word}' has {} letters, expected {expected}",
                word.len()
            ),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Ordered, non-empty list of equal-length secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<SecretWord>,
}

impl WordList {
    /// Build a list, rejecting empty and mixed-length input
    ///
    /// # Errors
    /// Returns `WordListError::Empty` or `WordListError::MixedLengths`.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordListError> {
        let expected = words.first().ok_or(WordListError::Empty)?.len();
        if let Some(odd) = words.iter().find(|w| w.len() != expected) {
            return Err(WordListError::MixedLengths {
                expected,
                word: odd.text().to_string(),
            });
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Will not panic: the build script rejects an empty list and every
    /// bundled word is checked by the tests below.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is valid")
    }

    /// Load a custom list from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no usable words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Secret word for a day ordinal; out-of-range ordinals wrap
    ///
    /// # Examples
    /// ```
    /// use progle::core::SecretWord;
    /// use progle::wordlists::WordList;
    ///
    /// let list = WordList::new(vec![
    ///     SecretWord::new("world").unwrap(),
    ///     SecretWord::new("hello").unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(list.word_for_day(1).text(), "hello");
    /// assert_eq!(list.word_for_day(2).text(), "world");
    /// assert_eq!(list.word_for_day(365).text(), "hello");
    /// ```
    #[must_use]
    pub fn word_for_day(&self, ordinal: u32) -> &SecretWord {
        let index = ordinal as usize % self.words.len();
        &self.words[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, the constructor rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Secret word for a calendar day
///
/// Only the ordinal matters, so the same day of the year repeats its word
/// every year.
#[must_use]
pub fn word_of_the_day(words: &WordList, day: DayKey) -> &SecretWord {
    words.word_for_day(day.ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::new(loader::words_from_slice(words)).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn bundled_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_usable() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert_eq!(list.word_for_day(0).len(), 5);
    }

    #[test]
    fn word_for_day_wraps_any_ordinal() {
        let list = list(&["world", "hello", "crane"]);
        assert_eq!(list.word_for_day(0).text(), "world");
        assert_eq!(list.word_for_day(2).text(), "crane");
        assert_eq!(list.word_for_day(3).text(), "world");
        assert_eq!(list.word_for_day(u32::MAX).text(), list.word_for_day(u32::MAX).text());
    }

    #[test]
    fn word_of_the_day_uses_ordinal() {
        let words = list(&["abc", "def", "ghi"]);
        assert_eq!(word_of_the_day(&words, DayKey::new(2025, 4)).text(), "def");
        assert_eq!(word_of_the_day(&words, DayKey::new(2026, 4)).text(), "def");
        assert_eq!(word_of_the_day(&words, DayKey::new(2026, 3)).text(), "abc");
    }

    #[test]
    fn word_for_day_is_deterministic() {
        let list = WordList::embedded();
        for day in 1..=366 {
            assert_eq!(list.word_for_day(day), list.word_for_day(day));
        }
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
    }

    #[test]
    fn rejects_mixed_lengths() {
        let words = loader::words_from_slice(&["hello", "ox"]);
        assert!(matches!(
            WordList::new(words),
            Err(WordListError::MixedLengths { expected: 5, .. })
        ));
    }

    #[test]
    fn supports_other_word_lengths() {
        let list = list(&["rust", "crab"]);
        assert_eq!(list.word_for_day(0).len(), 4);
        assert_eq!(list.word_for_day(1).text(), "crab");
    }
}
