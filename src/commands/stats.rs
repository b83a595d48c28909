//! One-shot statistics over the stored history

use crate::history::{HistoryStore, StoreError};
use crate::stats::{Stats, compute_stats};

/// Load every record and summarize it for `tries` rows
///
/// # Errors
///
/// Returns `StoreError` if the history cannot be read.
pub fn history_stats<S: HistoryStore>(store: &S, tries: usize) -> Result<Stats, StoreError> {
    let records = store.load_all()?;
    Ok(compute_stats(&records, tries))
}
