//! Progle
//!
//! A daily word-guessing game: one secret word per calendar day, a grid of
//! guesses with per-cell feedback, persisted history, streak statistics and
//! emoji share text.
//!
//! # Quick Start
//!
//! ```rust
//! use progle::calendar::DayKey;
//! use progle::core::SecretWord;
//! use progle::game::{DailyGame, Key, KeyEffect, SessionContext};
//! use progle::history::MemoryStore;
//!
//! let context = SessionContext::new(DayKey::new(2026, 1), SecretWord::new("crane").unwrap(), 6);
//! let mut game = DailyGame::resume(context, MemoryStore::new());
//!
//! for c in "crane".chars() {
//!     game.press(Key::Letter(c));
//! }
//! assert_eq!(game.press(Key::Enter), KeyEffect::Won);
//! assert_eq!(game.stats().unwrap().current_streak, 1);
//! ```

// Calendar days and the day-of-year ordinal
pub mod calendar;

// Game settings
pub mod config;

// Core domain types
pub mod core;

// Session state machine and daily driver
pub mod game;

// Persisted history
pub mod history;

// Statistics aggregation
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
