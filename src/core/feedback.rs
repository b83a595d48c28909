//! Per-cell feedback classification
//!
//! Feedback is never stored. It is derived from the cell letter, its column,
//! the secret word, and whether the row has been submitted:
//! - Unrevealed = row not submitted yet
//! - Correct = letter in the correct position
//! - Present = letter in the word, wrong position
//! - Absent = letter not in the word

use std::fmt;

/// Feedback for a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFeedback {
    Unrevealed,
    Correct,
    Present,
    Absent,
}

impl CellFeedback {
    /// The three revealed classes, strongest first
    pub const REVEALED: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    /// Emoji used in share text, `None` for unrevealed cells
    ///
    /// # Examples
    /// ```
    /// use progle::core::CellFeedback;
    ///
    /// assert_eq!(CellFeedback::Absent.emoji(), Some("⬛"));
    /// assert_eq!(CellFeedback::Unrevealed.emoji(), None);
    /// ```
    #[must_use]
    pub const fn emoji(self) -> Option<&'static str> {
        match self {
            Self::Unrevealed => None,
            Self::Correct => Some("🧑\u{200d}💻"),
            Self::Present => Some("🟧"),
            Self::Absent => Some("⬛"),
        }
    }

    /// Ordering used when one letter carries several classes on the keyboard
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Unrevealed => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Unrevealed)
    }
}

impl fmt::Display for CellFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unrevealed => "unrevealed",
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
