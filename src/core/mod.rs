//! Core domain types for the game
//!
//! Pure, deterministic types: the secret word, the guess grid, and the
//! per-cell feedback derived from them.

mod feedback;
mod grid;
mod word;

pub use feedback::CellFeedback;
pub use grid::{
    Cell, GridError, GuessGrid, cell_feedback, keyboard_hints, letters_by_feedback, row_matches,
};
pub use word::{SecretWord, WordError};
