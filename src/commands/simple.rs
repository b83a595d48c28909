//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is typed into the current row
//! and submitted: letters are pressed in order, `-` clears the previous
//! letter, and the end of the line presses Enter.

use crate::config::ShareLabels;
use crate::game::{DailyGame, Key, KeyEffect};
use crate::history::HistoryStore;
use crate::output::{print_grid, print_result, print_share, print_stats};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What one input line did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    ShowStats,
    /// The row was submitted (or the game was already over)
    Submitted(KeyEffect),
    /// Enter was refused because the row is not full
    Incomplete,
}

/// Apply one line of input to the game
pub fn apply_line<S: HistoryStore>(game: &mut DailyGame<S>, line: &str) -> LineAction {
    match line.trim() {
        ":q" | ":quit" => return LineAction::Quit,
        ":stats" => return LineAction::ShowStats,
        _ => {}
    }

    for c in line.trim().chars() {
        let key = if c == '-' { Key::Clear } else { Key::Letter(c) };
        game.press(key);
    }

    match game.press(Key::Enter) {
        KeyEffect::Ignored if !game.status().is_finished() => LineAction::Incomplete,
        effect => LineAction::Submitted(effect),
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: HistoryStore>(
    game: &mut DailyGame<S>,
    labels: &ShareLabels,
) -> Result<(), String> {
    let stdin = io::stdin();
    play_lines(game, labels, stdin.lock())
}

/// Play from any line source until the game ends, the input ends, or `:q`
///
/// # Errors
///
/// Returns an error if reading a line fails.
pub fn play_lines<S: HistoryStore, R: BufRead>(
    game: &mut DailyGame<S>,
    labels: &ShareLabels,
    input: R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║{:^50}║", format!("{} #{}", labels.title, game.context().day().ordinal()));
    println!("╚══════════════════════════════════════════════════╝\n");

    if game.status().is_finished() {
        finish(game, labels);
        return Ok(());
    }

    println!(
        "Guess the {}-letter word in {} tries.",
        game.context().secret().len(),
        game.context().tries()
    );
    println!("Type a word and press Enter. '-' erases a letter.");
    println!("Commands: ':stats' for statistics, ':q' to quit\n");
    print_grid(game.context(), game.session());

    let mut lines = input.lines();
    loop {
        print!("{} ", "›".bright_cyan().bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;

        match apply_line(game, &line) {
            LineAction::Quit => {
                println!("\n👋 Progress saved. See you later!\n");
                return Ok(());
            }
            LineAction::ShowStats => match game.stats() {
                Ok(stats) => print_stats(&stats),
                Err(e) => println!("{} {e}", "Statistics unavailable:".red()),
            },
            LineAction::Incomplete => {
                println!("{}", "Not enough letters".yellow());
                print_grid(game.context(), game.session());
            }
            LineAction::Submitted(effect) => {
                print_grid(game.context(), game.session());
                if effect.finished_game() || game.status().is_finished() {
                    finish(game, labels);
                    return Ok(());
                }
            }
        }
    }
}

fn finish<S: HistoryStore>(game: &DailyGame<S>, labels: &ShareLabels) {
    print_result(game.context(), game.session());
    match game.stats() {
        Ok(stats) => print_stats(&stats),
        Err(e) => println!("{} {e}", "Statistics unavailable:".red()),
    }
    print_share(&game.share_text(labels));
}
