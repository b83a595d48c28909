//! Guess grid and feedback evaluation
//!
//! The grid holds `tries` rows of `width` cells. Cells are either empty or a
//! single lowercase ASCII letter. The grid is a value: every mutation returns
//! a new grid and the caller replaces its old one.

use super::{CellFeedback, SecretWord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid cell, `None` when empty
pub type Cell = Option<u8>;

/// Grid of guesses, one row per try
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct GuessGrid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

/// Error type for grids rebuilt from persisted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NoRows,
    ZeroWidth,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "Grid has no rows"),
            Self::ZeroWidth => write!(f, "Grid rows have no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "Row {row} has {found} cells, expected {expected}"),
            Self::InvalidCell { row, col, value } => {
                write!(f, "Cell ({row}, {col}) holds {value:?}, expected one letter")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl GuessGrid {
    /// Create an empty grid
    ///
    /// # Panics
    /// Panics if `tries` or `width` is zero.
    #[must_use]
    pub fn new(tries: usize, width: usize) -> Self {
        assert!(tries > 0 && width > 0, "grid needs at least one cell");
        Self {
            rows: vec![vec![None; width]; tries],
            width,
        }
    }

    /// Number of rows (tries)
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells per row
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|r| r.get(col).copied()).flatten()
    }

    /// Return a copy of the grid with one cell replaced
    ///
    /// Out-of-range coordinates return an unchanged copy.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, value: Cell) -> Self {
        let mut next = self.clone();
        if let Some(cell) = next.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
        next
    }

    /// True when no row at or after `row` holds a letter
    #[must_use]
    pub fn is_empty_from(&self, row: usize) -> bool {
        self.rows
            .iter()
            .skip(row)
            .all(|r| r.iter().all(Option::is_none))
    }

    /// Render a row as text, empty cells as spaces
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .map(|cells| {
                cells
                    .iter()
                    .map(|c| c.map_or(' ', char::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<Vec<String>>> for GuessGrid {
    type Error = GridError;

    fn try_from(raw: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        let width = raw.first().ok_or(GridError::NoRows)?.len();
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }

        let mut rows = Vec::with_capacity(raw.len());
        for (r, raw_row) in raw.into_iter().enumerate() {
            if raw_row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: raw_row.len(),
                });
            }

            let mut cells = Vec::with_capacity(width);
            for (c, value) in raw_row.into_iter().enumerate() {
                let Some(cell) = parse_cell(&value) else {
                    return Err(GridError::InvalidCell { row: r, col: c, value });
                };
                cells.push(cell);
            }
            rows.push(cells);
        }

        Ok(Self { rows, width })
    }
}

fn parse_cell(value: &str) -> Option<Cell> {
    match value.as_bytes() {
        [] => Some(None),
        [b] if b.is_ascii_alphabetic() => Some(Some(b.to_ascii_lowercase())),
        _ => None,
    }
}

impl From<GuessGrid> for Vec<Vec<String>> {
    fn from(grid: GuessGrid) -> Self {
        grid.rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|c| c.map(|b| char::from(b).to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Classify one cell of the grid
///
/// Rows at or below `cursor_row` are not submitted yet and stay unrevealed.
/// A letter in its secret position is `Correct` even when it also appears
/// elsewhere in the secret.
///
/// # Examples
/// ```
/// use progle::core::{CellFeedback, GuessGrid, SecretWord, cell_feedback};
///
/// let secret = SecretWord::new("hello").unwrap();
/// let grid = GuessGrid::new(6, 5)
///     .with_cell(0, 0, Some(b'h'))
///     .with_cell(0, 1, Some(b'l'))
///     .with_cell(0, 2, Some(b'z'));
///
/// assert_eq!(cell_feedback(&grid, 1, &secret, 0, 0), CellFeedback::Correct);
/// assert_eq!(cell_feedback(&grid, 1, &secret, 0, 1), CellFeedback::Present);
/// assert_eq!(cell_feedback(&grid, 1, &secret, 0, 2), CellFeedback::Absent);
/// assert_eq!(cell_feedback(&grid, 0, &secret, 0, 0), CellFeedback::Unrevealed);
/// ```
#[must_use]
pub fn cell_feedback(
    grid: &GuessGrid,
    cursor_row: usize,
    secret: &SecretWord,
    row: usize,
    col: usize,
) -> CellFeedback {
    if row >= cursor_row || row >= grid.tries() || col >= grid.width() {
        return CellFeedback::Unrevealed;
    }

    match grid.cell(row, col) {
        Some(letter) if secret.letter_at(col) == Some(letter) => CellFeedback::Correct,
        Some(letter) if secret.has_letter(letter) => CellFeedback::Present,
        _ => CellFeedback::Absent,
    }
}

/// True iff every cell of `row` equals the secret letter at that column
///
/// An empty cell never matches, and a row of a different width never matches.
#[must_use]
pub fn row_matches(row: &[Cell], secret: &SecretWord) -> bool {
    row.len() == secret.len()
        && row
            .iter()
            .zip(secret.text().bytes())
            .all(|(cell, expected)| *cell == Some(expected))
}

/// Every letter in the grid whose feedback equals `feedback`
///
/// Duplicates across rows are preserved; empty cells are never returned.
#[must_use]
pub fn letters_by_feedback(
    grid: &GuessGrid,
    cursor_row: usize,
    secret: &SecretWord,
    feedback: CellFeedback,
) -> Vec<char> {
    grid.rows()
        .enumerate()
        .flat_map(|(r, cells)| {
            cells.iter().enumerate().filter_map(move |(c, cell)| {
                let letter = (*cell)?;
                (cell_feedback(grid, cursor_row, secret, r, c) == feedback)
                    .then_some(char::from(letter))
            })
        })
        .collect()
}

/// Strongest revealed feedback per letter, for keyboard tinting
///
/// A letter seen as both `Present` and `Correct` is reported `Correct`.
#[must_use]
pub fn keyboard_hints(
    grid: &GuessGrid,
    cursor_row: usize,
    secret: &SecretWord,
) -> FxHashMap<char, CellFeedback> {
    let mut hints: FxHashMap<char, CellFeedback> = FxHashMap::default();

    for feedback in CellFeedback::REVEALED {
        for letter in letters_by_feedback(grid, cursor_row, secret, feedback) {
            let entry = hints.entry(letter).or_insert(feedback);
            if feedback.strength() > entry.strength() {
                *entry = feedback;
            }
        }
    }

    hints
}
