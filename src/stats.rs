//! Statistics over the game history
//!
//! Played count, win rate, current and best streak, and the distribution of
//! winning tries. Pure: the caller loads the records.

use crate::game::GameStatus;
use crate::history::DailySessionRecord;
use tracing::warn;

/// Aggregate statistics for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    /// Percentage of played games won, rounded down
    pub win_rate: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// `distribution[t - 1]` counts games won on try `t`
    pub distribution: Vec<u32>,
}

impl Stats {
    /// All-zero statistics for `tries` buckets
    #[must_use]
    pub fn empty(tries: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            win_rate: 0,
            current_streak: 0,
            max_streak: 0,
            distribution: vec![0; tries],
        }
    }

    /// Number of games won on try `tries` (1-based)
    #[must_use]
    pub fn won_on(&self, tries: usize) -> u32 {
        tries
            .checked_sub(1)
            .and_then(|i| self.distribution.get(i))
            .copied()
            .unwrap_or(0)
    }
}

/// Compute statistics over every record
///
/// Records may come in any order; streaks follow calendar order. A game still
/// in progress counts as played but neither extends nor breaks a streak.
/// Won games whose try count is outside `1..=tries` are left out of the
/// distribution.
///
/// # Examples
/// ```
/// use progle::stats::compute_stats;
///
/// let stats = compute_stats(&[], 6);
/// assert_eq!(stats.played, 0);
/// assert_eq!(stats.win_rate, 0);
/// assert_eq!(stats.distribution, vec![0; 6]);
/// ```
#[must_use]
pub fn compute_stats(records: &[DailySessionRecord], tries: usize) -> Stats {
    let mut stats = Stats::empty(tries);
    if records.is_empty() {
        return stats;
    }

    let mut ordered: Vec<&DailySessionRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.day);

    stats.played = u32::try_from(ordered.len()).unwrap_or(u32::MAX);

    let mut streak = 0u32;
    let mut previous: Option<&DailySessionRecord> = None;

    for record in ordered {
        match record.status() {
            GameStatus::Playing => continue,
            GameStatus::Won => {
                stats.wins += 1;
                record_tries(&mut stats.distribution, record);

                let extends = previous.is_none_or(|prev| {
                    prev.status() == GameStatus::Won && prev.day.is_followed_by(record.day)
                });
                streak = if extends { streak + 1 } else { 1 };
            }
            GameStatus::Lost => streak = 0,
        }

        stats.max_streak = stats.max_streak.max(streak);
        previous = Some(record);
    }

    stats.current_streak = streak;
    stats.win_rate = stats.wins * 100 / stats.played;
    stats
}

fn record_tries(distribution: &mut [u32], record: &DailySessionRecord) {
    let tries = record.tries_used() as usize;
    match tries.checked_sub(1).and_then(|i| distribution.get_mut(i)) {
        Some(bucket) => *bucket += 1,
        None => warn!(
            day = %record.day,
            tries,
            max = distribution.len(),
            "won game has out-of-range try count, left out of distribution"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayKey;
    use crate::core::SecretWord;
    use crate::game::{Key, Session};

    const SECRET: &str = "hello";

    fn session(guesses: &[&str], typed: &str) -> Session {
        let secret = SecretWord::new(SECRET).unwrap();
        let mut session = Session::new(6, 5);
        for guess in guesses {
            for c in guess.chars() {
                session.press(Key::Letter(c), &secret).apply(&mut session);
            }
            session.press(Key::Enter, &secret).apply(&mut session);
        }
        for c in typed.chars() {
            session.press(Key::Letter(c), &secret).apply(&mut session);
        }
        session
    }

    fn won(year: i32, ordinal: u32, tries: usize) -> DailySessionRecord {
        let mut guesses = vec!["world"; tries - 1];
        guesses.push(SECRET);
        DailySessionRecord::new(DayKey::new(year, ordinal), session(&guesses, ""))
    }

    fn lost(year: i32, ordinal: u32) -> DailySessionRecord {
        DailySessionRecord::new(DayKey::new(year, ordinal), session(&["world"; 6], ""))
    }

    fn playing(year: i32, ordinal: u32) -> DailySessionRecord {
        DailySessionRecord::new(DayKey::new(year, ordinal), session(&["world"], "he"))
    }

    #[test]
    fn empty_history_is_all_zero() {
        let stats = compute_stats(&[], 6);
        assert_eq!(
            stats,
            Stats {
                played: 0,
                wins: 0,
                win_rate: 0,
                current_streak: 0,
                max_streak: 0,
                distribution: vec![0, 0, 0, 0, 0, 0],
            }
        );
    }

    #[test]
    fn gap_and_loss_break_the_streak() {
        let history = vec![won(2026, 1, 3), won(2026, 2, 2), lost(2026, 4)];
        let stats = compute_stats(&history, 6);

        assert_eq!(stats.played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.win_rate, 66);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.distribution, vec![0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn missed_day_restarts_streak_at_one() {
        let history = vec![won(2026, 1, 1), won(2026, 2, 1), won(2026, 5, 4)];
        let stats = compute_stats(&history, 6);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.won_on(1), 2);
        assert_eq!(stats.won_on(4), 1);
    }

    #[test]
    fn win_after_loss_starts_new_streak() {
        let history = vec![won(2026, 1, 2), lost(2026, 2), won(2026, 3, 2), won(2026, 4, 5)];
        let stats = compute_stats(&history, 6);

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.win_rate, 75);
    }

    #[test]
    fn max_streak_tracks_the_running_value() {
        let history = vec![won(2026, 10, 1), won(2026, 11, 1), won(2026, 12, 1)];
        let stats = compute_stats(&history, 6);

        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn order_of_records_does_not_matter() {
        let history = vec![won(2026, 10, 1), won(2026, 9, 1), won(2026, 11, 1)];
        let stats = compute_stats(&history, 6);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn streak_continues_across_new_year() {
        let history = vec![won(2025, 364, 2), won(2025, 365, 2), won(2026, 1, 2)];
        let stats = compute_stats(&history, 6);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn game_in_progress_keeps_yesterdays_streak() {
        let history = vec![won(2026, 1, 2), won(2026, 2, 2), playing(2026, 3)];
        let stats = compute_stats(&history, 6);

        assert_eq!(stats.played, 3);
        assert_eq!(stats.win_rate, 66);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn abandoned_day_counts_as_a_gap() {
        let history = vec![won(2026, 1, 2), playing(2026, 2), won(2026, 3, 2)];
        let stats = compute_stats(&history, 6);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn out_of_range_tries_are_excluded() {
        // Won on row 8 of a longer grid, summarized for six tries
        let secret = SecretWord::new(SECRET).unwrap();
        let mut long = Session::new(8, 5);
        for guess in ["world"; 7].iter().chain(&[SECRET]) {
            for c in guess.chars() {
                long.press(Key::Letter(c), &secret).apply(&mut long);
            }
            long.press(Key::Enter, &secret).apply(&mut long);
        }
        assert_eq!(long.tries_used(), 8);

        let history = vec![
            won(2026, 1, 3),
            DailySessionRecord::new(DayKey::new(2026, 2), long),
        ];
        let stats = compute_stats(&history, 6);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.distribution, vec![0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn legacy_win_counts_in_distribution() {
        let legacy: Session = serde_json::from_value(serde_json::json!({
            "rows": [
                ["w", "o", "r", "l", "d"], ["h", "e", "l", "l", "o"],
                ["", "", "", "", ""], ["", "", "", "", ""],
                ["", "", "", "", ""], ["", "", "", "", ""]
            ],
            "curRow": 2, "curCol": 0, "gameState": "won", "numberTries": -1
        }))
        .unwrap();

        let stats = compute_stats(&[DailySessionRecord::new(DayKey::new(2026, 1), legacy)], 6);
        assert_eq!(stats.distribution, vec![0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn won_on_outside_range_is_zero() {
        let stats = compute_stats(&[won(2026, 1, 1)], 6);
        assert_eq!(stats.won_on(0), 0);
        assert_eq!(stats.won_on(7), 0);
        assert_eq!(stats.won_on(1), 1);
    }
}
