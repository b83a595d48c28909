//! TUI rendering with ratatui
//!
//! Grid, tinted on-screen keyboard, statistics panel and status bar.

use super::app::{App, MessageStyle};
use crate::calendar::until_next_day;
use crate::core::CellFeedback;
use crate::game::Key;
use crate::history::HistoryStore;
use crate::stats::Stats;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use rustc_hash::FxHashMap;

/// On-screen keyboard rows, matching the keys the game accepts
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["ENTER", "z", "x", "c", "v", "b", "n", "m", "CLEAR"],
];

/// Main UI rendering function
pub fn ui<S: HistoryStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    if app.show_stats {
        render_stats_panel(f, app, main_chunks[1]);
    } else {
        render_keyboard(f, app, main_chunks[1]);
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!(
        "🧑\u{200d}💻 {} #{}",
        app.labels.title.to_uppercase(),
        app.game.context().day().ordinal()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Colors for a grid cell or keyboard key
#[must_use]
pub const fn feedback_style(feedback: CellFeedback) -> Style {
    match feedback {
        CellFeedback::Correct => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellFeedback::Present => Style::new()
            .fg(Color::Black)
            .bg(Color::Rgb(255, 140, 0))
            .add_modifier(Modifier::BOLD),
        CellFeedback::Absent => Style::new().fg(Color::Gray).bg(Color::DarkGray),
        CellFeedback::Unrevealed => Style::new().fg(Color::White),
    }
}

fn render_grid<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.game.session();
    let cursor = session.cursor();
    let playing = !session.status().is_finished();

    let lines: Vec<Line> = (0..session.grid().tries())
        .map(|row| {
            let mut spans = Vec::with_capacity(session.grid().width() * 2);
            for col in 0..session.grid().width() {
                let letter = session
                    .grid()
                    .cell(row, col)
                    .map_or('·', |b| char::from(b).to_ascii_uppercase());
                let mut style = feedback_style(app.game.feedback(row, col));
                if playing && row == cursor.row && col == cursor.col {
                    style = style.add_modifier(Modifier::UNDERLINED | Modifier::SLOW_BLINK);
                }
                spans.push(Span::styled(format!(" {letter} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Guesses {}/{} ",
                session.completed_rows(),
                session.grid().tries()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// Style each keyboard label from the hints collected so far
#[must_use]
pub fn keyboard_lines(hints: &FxHashMap<char, CellFeedback>) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|label| {
                    let feedback = match Key::from_label(label) {
                        Some(Key::Letter(c)) => {
                            hints.get(&c).copied().unwrap_or(CellFeedback::Unrevealed)
                        }
                        _ => CellFeedback::Unrevealed,
                    };
                    [
                        Span::styled(format!(" {} ", label.to_uppercase()), feedback_style(feedback)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = vec![Line::from("")];
    for line in keyboard_lines(&app.game.keyboard_hints()) {
        lines.push(line);
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

/// Text lines for the statistics panel
#[must_use]
pub fn stats_lines(stats: &Stats) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:>4}", stats.played),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" played   "),
            Span::styled(
                format!("{:>3}", stats.win_rate),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("% won"),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{:>4}", stats.current_streak),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" streak   "),
            Span::styled(
                format!("{:>3}", stats.max_streak),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" best"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let most = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let width = (count * 20 / most) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(width.max(1)), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }
    lines
}

fn render_stats_panel<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = app
        .stats
        .as_ref()
        .map_or_else(|| vec![Line::from("No statistics yet")], stats_lines);

    if app.game.status().is_finished() {
        lines.push(Line::from(""));
        lines.extend(app.share_text().lines().map(|l| Line::from(l.to_string())));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Statistics | TAB: keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(panel, area);
}

fn render_messages<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// `HH:MM:SS` countdown text
#[must_use]
pub fn countdown_text(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn render_status<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status = Paragraph::new(format!("Status: {}", app.game.status()))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let remaining = until_next_day(&Local::now()).num_seconds();
    let countdown = Paragraph::new(format!("Next word in {}", countdown_text(remaining)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(countdown, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit | Bksp: Clear | TAB: Stats")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_labels_map_to_game_keys() {
        for row in KEYBOARD_ROWS {
            for label in row {
                assert!(Key::from_label(label).is_some(), "{label}");
            }
        }
    }

    #[test]
    fn keyboard_tints_only_hinted_letters() {
        let mut hints = FxHashMap::default();
        hints.insert('q', CellFeedback::Correct);
        hints.insert('e', CellFeedback::Absent);

        let lines = keyboard_lines(&hints);
        assert_eq!(lines.len(), 3);

        let first = &lines[0].spans;
        assert_eq!(first[0].content, " Q ");
        assert_eq!(first[0].style, feedback_style(CellFeedback::Correct));
        assert_eq!(first[4].style, feedback_style(CellFeedback::Absent));
        assert_eq!(first[2].style, feedback_style(CellFeedback::Unrevealed));

        // ENTER is never tinted by the 'e' hint
        assert_eq!(lines[2].spans[0].content, " ENTER ");
        assert_eq!(lines[2].spans[0].style, feedback_style(CellFeedback::Unrevealed));
    }

    #[test]
    fn stats_lines_have_one_bar_per_try() {
        let stats = Stats {
            played: 4,
            wins: 3,
            win_rate: 75,
            current_streak: 2,
            max_streak: 3,
            distribution: vec![0, 2, 1, 0, 0, 0],
        };
        let lines = stats_lines(&stats);
        assert_eq!(lines.len(), 4 + 6);
        assert_eq!(lines[5].spans[1].content.chars().count(), 20);
    }

    #[test]
    fn countdown_formats_hours_minutes_seconds() {
        assert_eq!(countdown_text(0), "00:00:00");
        assert_eq!(countdown_text(3661), "01:01:01");
        assert_eq!(countdown_text(86_399), "23:59:59");
        assert_eq!(countdown_text(-5), "00:00:00");
    }
}
