//! Share text for today's game

use crate::config::ShareLabels;
use crate::game::DailyGame;
use crate::history::HistoryStore;

/// Today's share text, or `None` while the game is still being played
#[must_use]
pub fn todays_share<S: HistoryStore>(game: &DailyGame<S>, labels: &ShareLabels) -> Option<String> {
    game.status()
        .is_finished()
        .then(|| game.share_text(labels))
}
