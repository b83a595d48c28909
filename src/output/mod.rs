//! Terminal output formatting
//!
//! Colored printing for the line-mode game, statistics and share text.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_result, print_share, print_stats};
