use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::word_board::MAX_TRIES;

/// How a completed session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Cumulative player statistics, persisted across sessions as one record.
///
/// `last_played` doubles as the double-count guard: a session outcome is
/// folded in at most once per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub guess_distribution: [u32; MAX_TRIES],
    pub last_played: Option<NaiveDate>,
}

impl GameStats {
    /// Fold a completed game into the stats, returning the new record.
    ///
    /// Identity when `today` has already been recorded. A win extends the
    /// streak only when the previous recorded day is yesterday; a gap
    /// restarts the streak at 1, a loss zeroes it.
    pub fn recorded(&self, outcome: GameOutcome, guesses_used: usize, today: NaiveDate) -> Self {
        if self.last_played == Some(today) {
            return self.clone();
        }

        let mut stats = self.clone();
        stats.games_played += 1;
        stats.last_played = Some(today);
        match outcome {
            GameOutcome::Won => {
                stats.games_won += 1;
                stats.current_streak = if self.played_yesterday(today) {
                    self.current_streak + 1
                } else {
                    1
                };
                stats.best_streak = stats.best_streak.max(stats.current_streak);
                if guesses_used >= 1 && guesses_used <= MAX_TRIES {
                    stats.guess_distribution[guesses_used - 1] += 1;
                }
            }
            GameOutcome::Lost => {
                stats.current_streak = 0;
            }
        }
        stats
    }

    /// Share of all played games won in `slot + 1` guesses, rounded to one
    /// decimal place. Zero when nothing has been played yet.
    pub fn distribution_percent(&self, slot: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let share = f64::from(self.guess_distribution[slot]) / f64::from(self.games_played);
        (share * 1000.0).round() / 10.0
    }

    fn played_yesterday(&self, today: NaiveDate) -> bool {
        match (self.last_played, today.pred_opt()) {
            (Some(last), Some(yesterday)) => last == yesterday,
            _ => false,
        }
    }
}
