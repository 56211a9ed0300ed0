use std::rc::Rc;

use chrono::NaiveDate;
use log::warn;

use crate::error::GameError;
use crate::model::{GameOutcome, GameStats};
use crate::storage::KeyValueStore;

pub const STATS_KEY: &str = "game_stats";

/// Owns the cumulative stats record behind the persistence gateway:
/// load-once at construction, read-modify-write on every recorded game.
pub struct StatsManager {
    store: Rc<dyn KeyValueStore>,
    stats: GameStats,
}

impl StatsManager {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let stats = Self::load(store.as_ref());
        Self { store, stats }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Fold a completed game in and persist the result. Recording the same
    /// day twice leaves the stats untouched.
    pub fn record_game(
        &mut self,
        outcome: GameOutcome,
        guesses_used: usize,
        today: NaiveDate,
    ) -> GameStats {
        self.stats = self.stats.recorded(outcome, guesses_used, today);
        self.save();
        self.stats.clone()
    }

    fn load(store: &dyn KeyValueStore) -> GameStats {
        let Some(contents) = store.get(STATS_KEY) else {
            return GameStats::default();
        };
        match serde_json::from_str::<GameStats>(&contents) {
            Ok(stats) => stats,
            Err(source) => {
                let err = GameError::MalformedPersistedState {
                    key: STATS_KEY.to_string(),
                    source,
                };
                warn!(target: "stats", "Starting from fresh stats: {}", err);
                GameStats::default()
            }
        }
    }

    fn save(&self) {
        let contents = match serde_json::to_string(&self.stats) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(target: "stats", "Could not serialize stats: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(STATS_KEY, &contents) {
            warn!(target: "stats", "Could not save stats: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, n).unwrap()
    }

    #[test]
    fn recorded_games_survive_a_reload() {
        let store = Rc::new(MemoryStore::new());

        let mut manager = StatsManager::new(Rc::clone(&store) as Rc<dyn KeyValueStore>);
        manager.record_game(GameOutcome::Won, 3, day(1));
        manager.record_game(GameOutcome::Lost, 6, day(2));

        let reloaded = StatsManager::new(store as Rc<dyn KeyValueStore>);
        assert_eq!(reloaded.stats().games_played, 2);
        assert_eq!(reloaded.stats().games_won, 1);
        assert_eq!(reloaded.stats().current_streak, 0);
        assert_eq!(reloaded.stats().guess_distribution[2], 1);
    }

    #[test]
    fn recording_twice_on_one_day_counts_once() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
        let mut manager = StatsManager::new(store);

        manager.record_game(GameOutcome::Won, 2, day(1));
        manager.record_game(GameOutcome::Won, 2, day(1));

        assert_eq!(manager.stats().games_played, 1);
        assert_eq!(manager.stats().guess_distribution[1], 1);
    }

    #[test]
    fn malformed_stored_stats_start_fresh() {
        let store = Rc::new(MemoryStore::new());
        store.set(STATS_KEY, "not json at all").unwrap();

        let manager = StatsManager::new(store as Rc<dyn KeyValueStore>);
        assert_eq!(manager.stats(), &GameStats::default());
    }
}
