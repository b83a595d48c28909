//! Command implementations

pub mod share;
pub mod simple;
pub mod stats;

pub use share::todays_share;
pub use simple::{LineAction, apply_line, play_lines, run_simple};
pub use stats::history_stats;
