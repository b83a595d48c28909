//! Today's game bound to a history store
//!
//! Loads the stored session for the day (or starts a fresh one), applies keys,
//! and writes the record back after every accepted key. A failed write is
//! logged and play continues with the in-memory session.

use super::{GameStatus, Key, Session, SessionContext, share_text};
use crate::config::ShareLabels;
use crate::core::{CellFeedback, keyboard_hints};
use crate::history::{DailySessionRecord, HistoryStore, StoreError};
use crate::stats::{Stats, compute_stats};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// What a key press did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEffect {
    /// Key was not accepted; nothing changed
    Ignored,
    /// Session changed and the game goes on
    Updated,
    Won,
    Lost,
}

impl KeyEffect {
    #[must_use]
    pub const fn finished_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One day's game with its store
pub struct DailyGame<S: HistoryStore> {
    context: SessionContext,
    session: Session,
    store: S,
}

impl<S: HistoryStore> DailyGame<S> {
    /// Resume today's game from `store`
    ///
    /// Starts a fresh session when nothing is stored for the day, when the
    /// stored grid has a different shape than the context, or when the store
    /// cannot be read.
    #[must_use]
    pub fn resume(context: SessionContext, store: S) -> Self {
        let fresh = || Session::new(context.tries(), context.secret().len());

        let session = match store.load(context.day()) {
            Ok(Some(record)) if record.session.fits(context.tries(), context.secret().len()) => {
                debug!(day = %context.day(), status = %record.status(), "resumed stored session");
                record.session
            }
            Ok(Some(record)) => {
                warn!(
                    day = %context.day(),
                    tries = record.session.grid().tries(),
                    width = record.session.grid().width(),
                    "stored session does not fit today's grid, starting fresh"
                );
                fresh()
            }
            Ok(None) => {
                info!(day = %context.day(), "starting new session");
                fresh()
            }
            Err(e) => {
                warn!(day = %context.day(), error = %e, "could not read history, starting fresh");
                fresh()
            }
        };

        Self {
            context,
            session,
            store,
        }
    }

    #[inline]
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Apply a key and persist the result if the session changed
    pub fn press(&mut self, key: Key) -> KeyEffect {
        let before = self.session.status();
        if !self
            .session
            .press(key, self.context.secret())
            .apply(&mut self.session)
        {
            return KeyEffect::Ignored;
        }

        if key == Key::Enter {
            let submitted = self.session.completed_rows().saturating_sub(1);
            debug!(
                row = submitted,
                guess = %self.session.grid().row_text(submitted),
                "row submitted"
            );
        }

        if let Err(e) = self.persist() {
            warn!(day = %self.context.day(), error = %e, "failed to save session");
        }

        match self.session.status() {
            GameStatus::Won if before != GameStatus::Won => {
                info!(day = %self.context.day(), tries = self.session.tries_used(), "game won");
                KeyEffect::Won
            }
            GameStatus::Lost if before != GameStatus::Lost => {
                info!(day = %self.context.day(), "game lost");
                KeyEffect::Lost
            }
            _ => KeyEffect::Updated,
        }
    }

    /// Write the current session to the store
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be written.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let record = DailySessionRecord::new(self.context.day(), self.session.clone());
        self.store.save(&record)
    }

    /// Statistics over the whole history, today included
    ///
    /// # Errors
    /// Returns `StoreError` if the history cannot be read.
    pub fn stats(&self) -> Result<Stats, StoreError> {
        let records = self.store.load_all()?;
        Ok(compute_stats(&records, self.context.tries()))
    }

    #[must_use]
    pub fn share_text(&self, labels: &ShareLabels) -> String {
        share_text(&self.context, &self.session, labels)
    }

    /// Strongest feedback seen so far for each letter
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<char, CellFeedback> {
        keyboard_hints(
            self.session.grid(),
            self.session.cursor().row,
            self.context.secret(),
        )
    }

    #[must_use]
    pub fn feedback(&self, row: usize, col: usize) -> CellFeedback {
        self.session.feedback(self.context.secret(), row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayKey;
    use crate::core::SecretWord;
    use crate::history::MemoryStore;

    fn context(ordinal: u32) -> SessionContext {
        SessionContext::new(DayKey::new(2026, ordinal), SecretWord::new("hello").unwrap(), 6)
    }

    fn type_line<S: HistoryStore>(game: &mut DailyGame<S>, line: &str) -> KeyEffect {
        for c in line.chars() {
            game.press(Key::Letter(c));
        }
        game.press(Key::Enter)
    }

    #[test]
    fn fresh_store_starts_empty_session() {
        let game = DailyGame::resume(context(10), MemoryStore::new());
        assert_eq!(game.session(), &Session::new(6, 5));
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.store().is_empty());
    }

    #[test]
    fn every_accepted_key_is_saved() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        assert_eq!(game.press(Key::Letter('h')), KeyEffect::Updated);

        let stored = game.store().load(DayKey::new(2026, 10)).unwrap().unwrap();
        assert_eq!(&stored.session, game.session());
    }

    #[test]
    fn ignored_key_does_not_touch_store() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        assert_eq!(game.press(Key::Clear), KeyEffect::Ignored);
        assert_eq!(game.press(Key::Enter), KeyEffect::Ignored);
        assert!(game.store().is_empty());
    }

    #[test]
    fn resumes_stored_session() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        type_line(&mut game, "world");
        game.press(Key::Letter('c'));
        let session = game.session().clone();

        let store = game.store;
        let resumed = DailyGame::resume(context(10), store);
        assert_eq!(resumed.session(), &session);
        assert_eq!(resumed.session().cursor().row, 1);
    }

    #[test]
    fn other_day_starts_fresh() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        type_line(&mut game, "world");

        let tomorrow = DailyGame::resume(context(11), game.store);
        assert_eq!(tomorrow.session(), &Session::new(6, 5));
    }

    #[test]
    fn mismatched_grid_starts_fresh() {
        let mut store = MemoryStore::new();
        let mut old = Session::new(4, 5);
        old.press(Key::Letter('a'), &SecretWord::new("hello").unwrap())
            .apply(&mut old);
        store
            .save(&DailySessionRecord::new(DayKey::new(2026, 10), old))
            .unwrap();

        let game = DailyGame::resume(context(10), store);
        assert!(game.session().fits(6, 5));
        assert_eq!(game.session().cursor().col, 0);
    }

    #[test]
    fn reports_win_once() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        assert_eq!(type_line(&mut game, "world"), KeyEffect::Updated);
        assert_eq!(type_line(&mut game, "hello"), KeyEffect::Won);
        assert!(KeyEffect::Won.finished_game());

        assert_eq!(game.press(Key::Letter('a')), KeyEffect::Ignored);
        assert_eq!(game.session().tries_used(), 2);
    }

    #[test]
    fn reports_loss_on_last_row() {
        let context = SessionContext::new(
            DayKey::new(2026, 10),
            SecretWord::new("hello").unwrap(),
            2,
        );
        let mut game = DailyGame::resume(context, MemoryStore::new());
        type_line(&mut game, "world");
        assert_eq!(type_line(&mut game, "crane"), KeyEffect::Lost);

        let text = game.share_text(&ShareLabels::default());
        assert!(text.starts_with("Progle 10 2/2 \n"));
    }

    #[test]
    fn stats_include_today() {
        let mut store = MemoryStore::new();
        let mut yesterday = DailyGame::resume(context(9), MemoryStore::new());
        type_line(&mut yesterday, "hello");
        store
            .save(&DailySessionRecord::new(
                DayKey::new(2026, 9),
                yesterday.session().clone(),
            ))
            .unwrap();

        let mut game = DailyGame::resume(context(10), store);
        type_line(&mut game, "crane");
        type_line(&mut game, "hello");

        let stats = game.stats().unwrap();
        assert_eq!(stats.played, 2);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.distribution, vec![1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn keyboard_hints_follow_submitted_rows() {
        let mut game = DailyGame::resume(context(10), MemoryStore::new());
        type_line(&mut game, "world");
        game.press(Key::Letter('z'));

        let hints = game.keyboard_hints();
        assert_eq!(hints.get(&'l'), Some(&CellFeedback::Correct));
        assert_eq!(hints.get(&'o'), Some(&CellFeedback::Present));
        assert_eq!(hints.get(&'w'), Some(&CellFeedback::Absent));
        assert_eq!(hints.get(&'z'), None);
        assert_eq!(game.feedback(0, 3), CellFeedback::Correct);
    }

    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn load_all(&self) -> Result<Vec<DailySessionRecord>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn save(&mut self, _record: &DailySessionRecord) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn store_failures_do_not_stop_play() {
        let mut game = DailyGame::resume(context(10), FailingStore);
        assert_eq!(game.session(), &Session::new(6, 5));

        type_line(&mut game, "world");
        assert_eq!(type_line(&mut game, "hello"), KeyEffect::Won);
        assert!(game.persist().is_err());
        assert!(game.stats().is_err());
    }
}
