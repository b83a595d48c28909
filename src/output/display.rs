//! Display functions for the line-mode front end and the stats/share commands

use super::formatters::{create_progress_bar, feedback_letter, tries_label};
use crate::game::{GameStatus, Session, SessionContext};
use crate::stats::Stats;
use colored::Colorize;

/// Print the grid with feedback colors, one row per line
pub fn print_grid(context: &SessionContext, session: &Session) {
    println!();
    for row in 0..session.grid().tries() {
        let cells: String = (0..session.grid().width())
            .map(|col| {
                feedback_letter(
                    session.grid().cell(row, col),
                    session.feedback(context.secret(), row, col),
                )
                .to_string()
            })
            .collect::<Vec<_>>()
            .join(" ");
        let marker = if row == session.cursor().row && !session.status().is_finished() {
            "›".bright_cyan().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {cells}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_result(context: &SessionContext, session: &Session) {
    println!("{}", "═".repeat(50).bright_cyan());
    match session.status() {
        GameStatus::Won => println!(
            "  {} Solved in {}",
            "🎉".bright_green(),
            tries_label(session.tries_used() as usize).bright_yellow().bold()
        ),
        GameStatus::Lost => println!(
            "  {} The word was {}",
            "✗".red().bold(),
            context.secret().text().to_uppercase().bright_yellow().bold()
        ),
        GameStatus::Playing => println!("  Game in progress"),
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print statistics with a distribution bar per try
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        stats.win_rate.to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak.to_string().green());
    println!("   Max streak:      {}", stats.max_streak.to_string().green());

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(most.max(1)), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
    println!();
}

/// Print the share text framed for copying
pub fn print_share(text: &str) {
    println!("\n{}", "─".repeat(50).bright_black());
    println!("{text}");
    println!("{}\n", "─".repeat(50).bright_black());
}
