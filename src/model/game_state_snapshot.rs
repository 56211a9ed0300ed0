use log::warn;

use crate::error::GameError;
use crate::storage::KeyValueStore;

use super::{GameStatus, Puzzle, WordBoard};

/// Storage key for the in-progress session record.
pub const SNAPSHOT_KEY: &str = "game_state";

/// Everything needed to put a session back on screen: the board as typed,
/// the status, and the puzzle it was typed against. Saved whole after every
/// change; a snapshot for a previous day is discarded at startup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct GameStateSnapshot {
    pub board: WordBoard,
    pub status: GameStatus,
    pub puzzle: Puzzle,
}

impl GameStateSnapshot {
    pub fn new(board: WordBoard, status: GameStatus, puzzle: Puzzle) -> Self {
        Self {
            board,
            status,
            puzzle,
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> bool {
        let contents = match serde_json::to_string(self) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(target: "storage", "Could not serialize session snapshot: {}", err);
                return false;
            }
        };
        match store.set(SNAPSHOT_KEY, &contents) {
            Ok(()) => true,
            Err(err) => {
                warn!(target: "storage", "Could not save session snapshot: {}", err);
                false
            }
        }
    }

    /// Load the stored snapshot. A malformed record is reported as
    /// recovered-from and dropped, never propagated.
    pub fn load(store: &dyn KeyValueStore) -> Option<GameStateSnapshot> {
        let contents = store.get(SNAPSHOT_KEY)?;
        match serde_json::from_str::<GameStateSnapshot>(&contents) {
            Ok(snapshot) => Some(snapshot),
            Err(source) => {
                let err = GameError::MalformedPersistedState {
                    key: SNAPSHOT_KEY.to_string(),
                    source,
                };
                warn!(target: "storage", "Discarding snapshot: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let snapshot = GameStateSnapshot::new(
            WordBoard::parse("CRANE\nSO"),
            GameStatus::Playing,
            Puzzle::new("SOLID", 42),
        );

        assert!(snapshot.save(&store));
        assert_eq!(GameStateSnapshot::load(&store), Some(snapshot));
    }

    #[test]
    fn missing_snapshot_loads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(GameStateSnapshot::load(&store), None);
    }

    #[test]
    fn malformed_snapshot_is_discarded() {
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "{not json").unwrap();
        assert_eq!(GameStateSnapshot::load(&store), None);
    }
}
