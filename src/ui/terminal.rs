use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use chrono::Local;
use log::trace;

use crate::events::{EventEmitter, EventHandler, EventObserver};
use crate::game::word_catalog::time_until_next_puzzle;
use crate::model::{
    GameCompletionState, GameEngineCommand, GameEngineEvent, GameStats, KeyInput, LetterVerdict,
    WordBoard, WORD_LENGTH,
};

use super::board_view;

/// The line-based front-end: accumulates what the engine announces and
/// renders it between prompts. All rules live on the other side of the
/// channel; this type only prints.
pub struct TerminalUi {
    board: WordBoard,
    verdict_rows: Vec<[LetterVerdict; WORD_LENGTH]>,
    hints: HashMap<char, LetterVerdict>,
    stats: GameStats,
    completion: Option<GameCompletionState>,
    day_index: u32,
}

impl TerminalUi {
    /// Build the UI and subscribe it to the engine's events.
    pub fn attach(event_observer: &EventObserver<GameEngineEvent>) -> Rc<RefCell<Self>> {
        let ui = Rc::new(RefCell::new(Self {
            board: WordBoard::default(),
            verdict_rows: Vec::new(),
            hints: HashMap::new(),
            stats: GameStats::default(),
            completion: None,
            day_index: 0,
        }));
        let handler = Rc::clone(&ui);
        event_observer.subscribe(move |event| handler.borrow_mut().handle_event(event));
        ui
    }

    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            board_view::render_board(&self.board, &self.verdict_rows),
            board_view::render_keyboard(&self.hints)
        )
    }

    pub fn stats_screen(&self) -> String {
        let countdown = time_until_next_puzzle(Local::now().naive_local());
        format!(
            "{}\n\nNext word in: {}",
            board_view::stats_text(&self.stats),
            board_view::countdown_text(countdown)
        )
    }

    pub fn share_screen(&self) -> String {
        board_view::share_text(self.day_index, Local::now().date_naive(), &self.verdict_rows)
    }

    fn announce_completion(&self, state: &GameCompletionState) {
        match state {
            GameCompletionState::Won { guesses_used } => {
                println!("\nCongrats! Solved in {} of 6.", guesses_used);
            }
            GameCompletionState::Lost { target } => {
                println!("\nBummer! The word was: {}", target);
            }
        }
        println!("\n{}\n", self.share_screen());
    }
}

impl EventHandler<GameEngineEvent> for TerminalUi {
    fn handle_event(&mut self, event: &GameEngineEvent) {
        trace!(target: "ui", "Displaying event: {:?}", event);
        match event {
            GameEngineEvent::SessionStarted { day_index, resumed } => {
                self.day_index = *day_index;
                self.verdict_rows.clear();
                self.hints.clear();
                self.completion = None;
                println!(
                    "Word Whirl, puzzle #{}{}",
                    day_index,
                    if *resumed { " (resumed)" } else { "" }
                );
            }
            GameEngineEvent::BoardUpdated(board) => {
                self.board = board.clone();
            }
            GameEngineEvent::RowSubmitted { row, verdicts, .. } => {
                self.verdict_rows.truncate(*row);
                self.verdict_rows.push(*verdicts);
            }
            GameEngineEvent::InvalidWord(word) => {
                println!("{}: not in word list!", word);
            }
            GameEngineEvent::LetterHintsChanged(hints) => {
                self.hints = hints.clone();
            }
            GameEngineEvent::GameCompleted(state) => {
                self.completion = Some(state.clone());
                self.announce_completion(state);
            }
            GameEngineEvent::StatsUpdated(stats) => {
                self.stats = stats.clone();
            }
        }
    }
}

/// Drive the game from stdin: one word per line, `:stats` for the summary
/// screen, `:q` to leave. The engine is reached only through commands.
pub fn run(
    commands: EventEmitter<GameEngineCommand>,
    ui: Rc<RefCell<TerminalUi>>,
) -> io::Result<()> {
    println!("Type a five-letter word and press enter. :stats for scores, :q to quit.\n");
    println!("{}", ui.borrow().render());

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        if ui.borrow().is_finished() {
            println!("{}", ui.borrow().stats_screen());
            break;
        }

        print!("guess> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim();
        match line {
            ":q" | ":quit" => {
                commands.emit(&GameEngineCommand::Quit);
                break;
            }
            ":stats" => {
                println!("{}", ui.borrow().stats_screen());
            }
            "" => (),
            word => {
                submit_word(&commands, word);
                println!("{}", ui.borrow().render());
            }
        }
    }
    Ok(())
}

fn submit_word(commands: &EventEmitter<GameEngineCommand>, word: &str) {
    // Line mode retypes the row from scratch each time; the clears are
    // no-ops on an already-empty row.
    for _ in 0..WORD_LENGTH {
        commands.emit(&GameEngineCommand::KeyPressed(KeyInput::Clear));
    }
    for letter in word.chars() {
        commands.emit(&GameEngineCommand::KeyPressed(KeyInput::Letter(letter)));
    }
    commands.emit(&GameEngineCommand::KeyPressed(KeyInput::Enter));
}
