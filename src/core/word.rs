//! Secret word representation
//!
//! A `SecretWord` stores the day's target word along with the set of letters
//! it contains for feedback lookups.

use rustc_hash::FxHashSet;
use std::fmt;

/// The day's target word
///
/// Stores the word as lowercase ASCII bytes and keeps a set of its letters
/// so membership checks do not rescan the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word
    ///
    /// The word is folded to lowercase. Any non-zero length is accepted; the
    /// grid width follows the word.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use progle::core::SecretWord;
    ///
    /// let word = SecretWord::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("h3llo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word length, which is also the grid width
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a column, `None` past the end
    #[inline]
    #[must_use]
    pub fn letter_at(&self, column: usize) -> Option<u8> {
        self.text.as_bytes().get(column).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_variable_length() {
        assert_eq!(SecretWord::new("ox").unwrap().len(), 2);
        assert_eq!(SecretWord::new("abstract").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(word.letter_at(0), Some(b'c'));
        assert_eq!(word.letter_at(4), Some(b'e'));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn duplicate_letters_are_one_member() {
        let word = SecretWord::new("hello").unwrap();
        assert!(word.has_letter(b'l'));
        assert_eq!(word.letters.len(), 4);
        assert_eq!(word.letter_at(3), Some(b'l'));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
