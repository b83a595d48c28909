//! TUI application state and logic

use crate::config::ShareLabels;
use crate::game::{DailyGame, Key, KeyEffect};
use crate::history::HistoryStore;
use crate::stats::Stats;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::warn;

/// Number of messages kept for the message panel
const MAX_MESSAGES: usize = 5;

/// Longest wait for input before the screen is redrawn
pub const REDRAW_INTERVAL: Duration = Duration::from_secs(1);

/// Application state
pub struct App<S: HistoryStore> {
    pub game: DailyGame<S>,
    pub labels: ShareLabels,
    pub messages: Vec<Message>,
    pub stats: Option<Stats>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: HistoryStore> App<S> {
    #[must_use]
    pub fn new(game: DailyGame<S>, labels: ShareLabels) -> Self {
        let mut app = Self {
            game,
            labels,
            messages: Vec::new(),
            stats: None,
            show_stats: false,
            should_quit: false,
        };

        if app.game.status().is_finished() {
            app.add_message(
                "Today's word is done. Come back tomorrow!",
                MessageStyle::Info,
            );
            app.refresh_stats();
            app.show_stats = true;
        } else {
            app.add_message(
                &format!(
                    "Guess the {}-letter word in {} tries.",
                    app.game.context().secret().len(),
                    app.game.context().tries()
                ),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Handle one terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.show_stats = !self.show_stats;
                if self.show_stats {
                    self.refresh_stats();
                }
            }
            KeyCode::Char(c) => self.press(Key::Letter(c)),
            KeyCode::Backspace => self.press(Key::Clear),
            KeyCode::Enter => self.press(Key::Enter),
            _ => {}
        }
    }

    /// Apply a game key and report what happened
    pub fn press(&mut self, key: Key) {
        let effect = self.game.press(key);
        match effect {
            KeyEffect::Ignored => {
                if key == Key::Enter && !self.game.status().is_finished() {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            KeyEffect::Updated => {}
            KeyEffect::Won => {
                let celebration = match self.game.session().tries_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two tries!",
                    3 => "✨ SPLENDID! Three tries!",
                    4 => "👏 GREAT JOB! Four tries!",
                    5 => "🎉 NICE WORK! Five tries!",
                    _ => "😅 PHEW! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish();
            }
            KeyEffect::Lost => {
                let text = format!(
                    "The word was {}",
                    self.game.context().secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.refresh_stats();
        self.show_stats = true;
        self.add_message("Share text is shown below the statistics.", MessageStyle::Info);
    }

    pub fn refresh_stats(&mut self) {
        match self.game.stats() {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => {
                warn!(error = %e, "could not compute statistics");
                self.add_message("Statistics unavailable", MessageStyle::Error);
            }
        }
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.game.share_text(&self.labels)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: HistoryStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, terminal_event);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if app.game.status().is_finished() {
        println!("{}", app.share_text());
    }

    Ok(())
}

/// Wait up to `timeout` for the next terminal event
fn terminal_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn run_app<B, S, E>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
    mut next_event: E,
) -> Result<App<S>>
where
    B: ratatui::backend::Backend,
    S: HistoryStore,
    E: FnMut(Duration) -> io::Result<Option<Event>>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // A timeout still redraws, so the countdown keeps ticking
        if let Some(Event::Key(key)) = next_event(REDRAW_INTERVAL)? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
