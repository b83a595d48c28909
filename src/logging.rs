//! Log output setup
//!
//! Logs go to stderr through `tracing-subscriber`. `RUST_LOG` overrides the
//! level chosen from the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
///
/// `base` is used when no `-v` is given (the TUI passes `off` so nothing is
/// written over the alternate screen).
#[must_use]
pub fn directive(base: &'static str, verbosity: u8) -> &'static str {
    match verbosity {
        0 => base,
        1 => "progle=info",
        2 => "progle=debug",
        _ => "progle=trace",
    }
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(base: &'static str, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(base, verbosity)));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}
