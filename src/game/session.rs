//! Game session state machine
//!
//! A session is a value. Every key press returns an `Outcome`: either
//! `Unchanged` (the key was ignored) or `Changed` with the next session, which
//! the caller stores in place of the old one. Ignored keys are not errors.

use crate::core::{CellFeedback, GridError, GuessGrid, SecretWord, cell_feedback, row_matches};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Progress of a session; `Won` and `Lost` are absorbing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Position of the next letter: current row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// A key from the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Clear,
    Enter,
}

impl Key {
    /// Map a keyboard label (`ENTER`, `CLEAR`, or a single letter) to a key
    ///
    /// # Examples
    /// ```
    /// use progle::game::Key;
    ///
    /// assert_eq!(Key::from_label("ENTER"), Some(Key::Enter));
    /// assert_eq!(Key::from_label("q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::from_label("qq"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ENTER" => Some(Self::Enter),
            "CLEAR" => Some(Self::Clear),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Result of applying a key to a session
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Unchanged,
    Changed(Session),
}

impl Outcome {
    /// Replace `session` with the new value if there is one
    ///
    /// Returns whether the session changed.
    pub fn apply(self, session: &mut Session) -> bool {
        match self {
            Self::Unchanged => false,
            Self::Changed(next) => {
                *session = next;
                true
            }
        }
    }
}

/// One day's game: grid, cursor, status and the winning try
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr", into = "SessionRepr")]
pub struct Session {
    grid: GuessGrid,
    cursor: Cursor,
    status: GameStatus,
    tries_used: u32,
}

impl Session {
    /// Fresh session with an empty grid
    ///
    /// # Panics
    /// Panics if `tries` or `width` is zero.
    #[must_use]
    pub fn new(tries: usize, width: usize) -> Self {
        Self {
            grid: GuessGrid::new(tries, width),
            cursor: Cursor::default(),
            status: GameStatus::Playing,
            tries_used: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// 1-based number of the winning row, 0 until the game is won
    #[inline]
    #[must_use]
    pub const fn tries_used(&self) -> u32 {
        self.tries_used
    }

    /// Number of submitted rows
    #[inline]
    #[must_use]
    pub const fn completed_rows(&self) -> usize {
        self.cursor.row
    }

    /// Whether the grid dimensions match `tries` rows of `width` letters
    #[must_use]
    pub fn fits(&self, tries: usize, width: usize) -> bool {
        self.grid.tries() == tries && self.grid.width() == width
    }

    /// Feedback for one cell, relative to the current cursor row
    #[must_use]
    pub fn feedback(&self, secret: &SecretWord, row: usize, col: usize) -> CellFeedback {
        cell_feedback(&self.grid, self.cursor.row, secret, row, col)
    }

    /// Apply any key
    pub fn press(&self, key: Key, secret: &SecretWord) -> Outcome {
        match key {
            Key::Letter(letter) => self.press_letter(letter),
            Key::Clear => self.press_clear(),
            Key::Enter => self.press_enter(secret),
        }
    }

    /// Write a letter at the cursor and advance the column
    ///
    /// Ignored when the game is over, the row is full, or the key is not an
    /// ASCII letter.
    pub fn press_letter(&self, letter: char) -> Outcome {
        if self.status.is_finished()
            || self.cursor.col >= self.grid.width()
            || !letter.is_ascii_alphabetic()
        {
            return Outcome::Unchanged;
        }

        let letter = letter.to_ascii_lowercase() as u8;
        Outcome::Changed(Self {
            grid: self
                .grid
                .with_cell(self.cursor.row, self.cursor.col, Some(letter)),
            cursor: Cursor {
                row: self.cursor.row,
                col: self.cursor.col + 1,
            },
            status: self.status,
            tries_used: self.tries_used,
        })
    }

    /// Erase the letter before the cursor
    pub fn press_clear(&self) -> Outcome {
        if self.status.is_finished() || self.cursor.col == 0 {
            return Outcome::Unchanged;
        }

        let col = self.cursor.col - 1;
        Outcome::Changed(Self {
            grid: self.grid.with_cell(self.cursor.row, col, None),
            cursor: Cursor {
                row: self.cursor.row,
                col,
            },
            status: self.status,
            tries_used: self.tries_used,
        })
    }

    /// Submit the current row
    ///
    /// Only a full row can be submitted. The submitted row decides the status:
    /// a match wins, otherwise running out of rows loses.
    pub fn press_enter(&self, secret: &SecretWord) -> Outcome {
        if self.status.is_finished() || self.cursor.col != self.grid.width() {
            return Outcome::Unchanged;
        }

        let submitted = self.cursor.row;
        let row = submitted + 1;
        let won = self
            .grid
            .row(submitted)
            .is_some_and(|cells| row_matches(cells, secret));

        let (status, tries_used) = if won {
            (GameStatus::Won, u32::try_from(row).unwrap_or(u32::MAX))
        } else if row >= self.grid.tries() {
            (GameStatus::Lost, self.tries_used)
        } else {
            (GameStatus::Playing, self.tries_used)
        };

        Outcome::Changed(Self {
            grid: self.grid.clone(),
            cursor: Cursor { row, col: 0 },
            status,
            tries_used,
        })
    }
}

/// Persisted shape of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRepr {
    rows: GuessGrid,
    cur_row: usize,
    cur_col: usize,
    game_state: GameStatus,
    #[serde(default)]
    number_tries: i64,
}

/// Error type for persisted sessions that break the grid invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Grid(GridError),
    CursorOutOfBounds { row: usize, col: usize },
    LettersPastCursor,
    PlayingWithoutRows,
    WonWithoutRows,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::CursorOutOfBounds { row, col } => {
                write!(f, "Cursor ({row}, {col}) is outside the grid")
            }
            Self::LettersPastCursor => write!(f, "Grid has letters past the cursor"),
            Self::PlayingWithoutRows => write!(f, "Game is playing but every row is used"),
            Self::WonWithoutRows => write!(f, "Game is won but no row was submitted"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl TryFrom<SessionRepr> for Session {
    type Error = SessionError;

    fn try_from(repr: SessionRepr) -> Result<Self, Self::Error> {
        let grid = repr.rows;
        let cursor = Cursor {
            row: repr.cur_row,
            col: repr.cur_col,
        };

        let in_bounds = if cursor.row == grid.tries() {
            cursor.col == 0
        } else {
            cursor.row < grid.tries() && cursor.col <= grid.width()
        };
        if !in_bounds {
            return Err(SessionError::CursorOutOfBounds {
                row: cursor.row,
                col: cursor.col,
            });
        }

        let current_row_tail_empty = (cursor.col..grid.width())
            .all(|col| grid.cell(cursor.row, col).is_none());
        if !grid.is_empty_from(cursor.row + 1) || !current_row_tail_empty {
            return Err(SessionError::LettersPastCursor);
        }

        if repr.game_state == GameStatus::Playing && cursor.row == grid.tries() {
            return Err(SessionError::PlayingWithoutRows);
        }
        if repr.game_state == GameStatus::Won && cursor.row == 0 {
            return Err(SessionError::WonWithoutRows);
        }

        // The winning row is the last submitted one; the stored count is not trusted
        let tries_used = match repr.game_state {
            GameStatus::Won => u32::try_from(cursor.row).unwrap_or(u32::MAX),
            GameStatus::Playing | GameStatus::Lost => 0,
        };
        if repr.number_tries != i64::from(tries_used) {
            debug!(
                stored = repr.number_tries,
                derived = tries_used,
                "stored try count disagrees with the grid"
            );
        }

        Ok(Self {
            grid,
            cursor,
            status: repr.game_state,
            tries_used,
        })
    }
}

impl From<Session> for SessionRepr {
    fn from(session: Session) -> Self {
        Self {
            rows: session.grid,
            cur_row: session.cursor.row,
            cur_col: session.cursor.col,
            game_state: session.status,
            number_tries: i64::from(session.tries_used),
        }
    }
}
