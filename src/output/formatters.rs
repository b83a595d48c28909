//! Formatting utilities for terminal output

use crate::core::CellFeedback;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A grid letter (or a blank) styled by its feedback
#[must_use]
pub fn feedback_letter(letter: Option<u8>, feedback: CellFeedback) -> ColoredString {
    let text = format!(
        " {} ",
        letter.map_or(' ', |b| char::from(b).to_ascii_uppercase())
    );
    match feedback {
        CellFeedback::Correct => text.black().on_green().bold(),
        CellFeedback::Present => text.black().on_yellow().bold(),
        CellFeedback::Absent => text.white().on_bright_black(),
        CellFeedback::Unrevealed => text.bright_white().on_black(),
    }
}

/// Plural-aware count, e.g. `1 try`, `3 tries`
#[must_use]
pub fn tries_label(count: usize) -> String {
    if count == 1 {
        "1 try".to_string()
    } else {
        format!("{count} tries")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(create_progress_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(create_progress_bar(0.0, 10.0, 3), "░░░");
        assert_eq!(create_progress_bar(10.0, 10.0, 3), "███");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(create_progress_bar(20.0, 10.0, 3), "███");
        assert_eq!(create_progress_bar(-1.0, 10.0, 2), "░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 2), "░░");
    }

    #[test]
    fn feedback_letter_is_uppercased_and_padded() {
        let cell = feedback_letter(Some(b'q'), CellFeedback::Correct);
        assert!(cell.to_string().contains(" Q "));
        let blank = feedback_letter(None, CellFeedback::Unrevealed);
        assert!(blank.to_string().contains("   "));
    }

    #[test]
    fn tries_label_pluralizes() {
        assert_eq!(tries_label(1), "1 try");
        assert_eq!(tries_label(0), "0 tries");
        assert_eq!(tries_label(4), "4 tries");
    }
}
