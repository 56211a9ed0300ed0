use serde::{Deserialize, Serialize};

/// Session status. `Won` and `Lost` are terminal: nothing transitions out of
/// them within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Playing
    }
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}
