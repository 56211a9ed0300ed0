use std::collections::HashMap;

use super::word_board::WORD_LENGTH;
use super::{GameStats, LetterVerdict, WordBoard};

/// How a session ended, with what the summary screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCompletionState {
    Won { guesses_used: usize },
    Lost { target: String },
}

/// Everything the engine tells the outside world. The presentation layer
/// interprets these; the engine never touches a screen.
#[derive(Debug, Clone)]
pub enum GameEngineEvent {
    SessionStarted {
        day_index: u32,
        resumed: bool,
    },
    BoardUpdated(WordBoard),
    RowSubmitted {
        row: usize,
        word: String,
        verdicts: [LetterVerdict; WORD_LENGTH],
    },
    /// The submitted word was rejected (or the lookup failed); the row has
    /// been cleared for another try.
    InvalidWord(String),
    /// Best verdict seen so far for each guessed letter, for keyboard hints.
    LetterHintsChanged(HashMap<char, LetterVerdict>),
    GameCompleted(GameCompletionState),
    StatsUpdated(GameStats),
}
