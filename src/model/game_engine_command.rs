use chrono::NaiveDate;

use super::{GameStateSnapshot, KeyInput};

/// Everything the engine can be asked to do.
#[derive(Debug, Clone)]
pub enum GameEngineCommand {
    KeyPressed(KeyInput),
    /// Start (or restore) the session for a date; `None` means today.
    NewGame(Option<NaiveDate>),
    LoadState(GameStateSnapshot),
    InitDisplay,
    Quit,
}
