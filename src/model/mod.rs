mod game_engine_command;
mod game_engine_event;
mod game_state_snapshot;
mod game_stats;
mod game_status;
mod key_input;
mod letter_verdict;
mod puzzle;
mod word_board;

pub use game_engine_command::GameEngineCommand;
pub use game_engine_event::{GameCompletionState, GameEngineEvent};
pub use game_state_snapshot::{GameStateSnapshot, SNAPSHOT_KEY};
pub use game_stats::{GameOutcome, GameStats};
pub use game_status::GameStatus;
pub use key_input::KeyInput;
pub use letter_verdict::LetterVerdict;
pub use puzzle::Puzzle;
pub use word_board::{WordBoard, MAX_TRIES, WORD_LENGTH};
