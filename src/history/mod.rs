//! Game history: one record per calendar day
//!
//! Records are written after every accepted key and never deleted, so the
//! store doubles as the history the statistics are computed from.

mod store;

pub use store::{HistoryStore, JsonFileStore, MemoryStore, StoreError};

use crate::calendar::DayKey;
use crate::game::{GameStatus, Session};

/// One day's persisted game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySessionRecord {
    pub day: DayKey,
    pub session: Session,
}

impl DailySessionRecord {
    #[must_use]
    pub const fn new(day: DayKey, session: Session) -> Self {
        Self { day, session }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.session.status()
    }

    #[inline]
    #[must_use]
    pub const fn tries_used(&self) -> u32 {
        self.session.tries_used()
    }
}
