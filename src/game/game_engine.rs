use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{info, trace, warn};

use crate::events::{EventEmitter, EventObserver, SubscriptionId};
use crate::model::{
    GameCompletionState, GameEngineCommand, GameEngineEvent, GameOutcome, GameStateSnapshot,
    GameStatus, KeyInput, LetterVerdict, Puzzle, WordBoard, MAX_TRIES,
};
use crate::storage::KeyValueStore;

use super::dictionary::WordValidator;
use super::guess_evaluator::{evaluate, is_winning};
use super::stats_manager::StatsManager;
use super::word_catalog::WordCatalog;

/// The session orchestrator. Consumes `GameEngineCommand`s, owns the board,
/// the puzzle and the status, talks to the dictionary and the store, and
/// tells the world what happened through `GameEngineEvent`s. It never
/// touches a screen.
pub struct GameEngine {
    catalog: WordCatalog,
    puzzle: Puzzle,
    session_date: NaiveDate,
    current_board: WordBoard,
    status: GameStatus,
    /// Guards against a second Enter while a dictionary lookup for the
    /// same row is outstanding.
    submission_in_flight: bool,
    validator: Box<dyn WordValidator>,
    store: Rc<dyn KeyValueStore>,
    stats_manager: StatsManager,
    event_emitter: EventEmitter<GameEngineEvent>,
    command_observer: EventObserver<GameEngineCommand>,
    subscription_id: Option<SubscriptionId>,
}

impl GameEngine {
    pub fn new(
        command_observer: EventObserver<GameEngineCommand>,
        event_emitter: EventEmitter<GameEngineEvent>,
        catalog: WordCatalog,
        validator: Box<dyn WordValidator>,
        store: Rc<dyn KeyValueStore>,
    ) -> Rc<RefCell<Self>> {
        let stats_manager = StatsManager::new(Rc::clone(&store));
        let today = Local::now().date_naive();
        let engine = Self {
            puzzle: catalog.puzzle_for(today),
            catalog,
            session_date: today,
            current_board: WordBoard::default(),
            status: GameStatus::Playing,
            submission_in_flight: false,
            validator,
            store,
            stats_manager,
            event_emitter,
            command_observer,
            subscription_id: None,
        };
        let refcell = Rc::new(RefCell::new(engine));
        GameEngine::wire_subscription(refcell.clone());
        refcell
    }

    fn wire_subscription(engine: Rc<RefCell<Self>>) {
        let observer = engine.borrow().command_observer.clone();
        let handler = engine.clone();
        let subscription_id = observer.subscribe(move |command| {
            let mut engine = handler.borrow_mut();
            engine.handle_command(command.clone());
        });
        engine.borrow_mut().subscription_id = Some(subscription_id);
    }

    /// Stop listening for commands, e.g. when the session is torn down.
    pub fn detach(&mut self) {
        if let Some(subscription_id) = self.subscription_id.take() {
            self.command_observer.unsubscribe(subscription_id);
        }
    }

    pub fn handle_command(&mut self, command: GameEngineCommand) {
        trace!(target: "engine", "Handling command: {:?}", command);
        match command {
            GameEngineCommand::KeyPressed(key) => self.handle_key(key),
            GameEngineCommand::NewGame(date) => {
                self.start_session(date.unwrap_or_else(|| Local::now().date_naive()))
            }
            GameEngineCommand::LoadState(snapshot) => self.install_session(snapshot, true),
            GameEngineCommand::InitDisplay => {
                self.event_emitter
                    .emit(&GameEngineEvent::BoardUpdated(self.current_board.clone()));
                self.event_emitter
                    .emit(&GameEngineEvent::StatsUpdated(
                        self.stats_manager.stats().clone(),
                    ));
            }
            GameEngineCommand::Quit => (),
        }
    }

    /// Begin (or pick up) the session for a calendar day. A stored snapshot
    /// is resumed when it belongs to the same puzzle day; anything else
    /// (older day, missing, unreadable) means a fresh board.
    fn start_session(&mut self, date: NaiveDate) {
        let puzzle = self.catalog.puzzle_for(date);
        let stored = GameStateSnapshot::load(self.store.as_ref())
            .filter(|snapshot| snapshot.puzzle.day_index() == puzzle.day_index());

        self.session_date = date;
        match stored {
            Some(snapshot) => self.install_session(snapshot, true),
            None => {
                let fresh =
                    GameStateSnapshot::new(WordBoard::default(), GameStatus::Playing, puzzle);
                self.install_session(fresh, false);
            }
        }
        // Replace whatever snapshot was stored; a stale day is gone now.
        self.save_snapshot();
    }

    fn install_session(&mut self, snapshot: GameStateSnapshot, resumed: bool) {
        info!(
            target: "engine",
            "Session for day {} ({})",
            snapshot.puzzle.day_index(),
            if resumed { "resumed" } else { "fresh" }
        );
        self.puzzle = snapshot.puzzle;
        self.status = snapshot.status;
        self.current_board = snapshot.board;
        self.submission_in_flight = false;

        self.event_emitter.emit(&GameEngineEvent::SessionStarted {
            day_index: self.puzzle.day_index(),
            resumed,
        });
        self.event_emitter
            .emit(&GameEngineEvent::BoardUpdated(self.current_board.clone()));

        // Replay the submitted rows so observers can rebuild their verdict
        // history without knowing the target.
        for row in 0..self.current_board.current_row() {
            if let Some(word) = self.current_board.row_word(row) {
                let verdicts = evaluate(&word, self.puzzle.target());
                self.event_emitter.emit(&GameEngineEvent::RowSubmitted {
                    row,
                    word,
                    verdicts,
                });
            }
        }
        self.event_emitter
            .emit(&GameEngineEvent::LetterHintsChanged(self.letter_hints()));

        if self.status.is_terminal() {
            let state = match self.status {
                GameStatus::Won => GameCompletionState::Won {
                    guesses_used: self.current_board.current_row(),
                },
                _ => GameCompletionState::Lost {
                    target: self.puzzle.target().to_string(),
                },
            };
            self.event_emitter
                .emit(&GameEngineEvent::GameCompleted(state));
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if self.status.is_terminal() {
            trace!(target: "engine", "Ignoring {:?} after game end", key);
            return;
        }
        match key {
            KeyInput::Enter => self.submit_row(),
            key => {
                let board = self.current_board.with_key(key);
                if board != self.current_board {
                    self.current_board = board;
                    self.save_snapshot();
                    self.event_emitter
                        .emit(&GameEngineEvent::BoardUpdated(self.current_board.clone()));
                }
            }
        }
    }

    fn submit_row(&mut self) {
        let Some(word) = self.begin_submission() else {
            return;
        };
        // The lookup is the one suspension point of a session. A failure is
        // resolved exactly like an unknown word so connectivity can never
        // lock the board.
        let valid = match self.validator.is_valid_word(&word) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(target: "engine", "Resolving {:?} as invalid: {}", word, err);
                false
            }
        };
        self.resolve_submission(&word, valid);
    }

    /// First half of a submission: claim the in-flight slot and take the
    /// word to validate. Yields `None`, changing nothing, when a submission
    /// is already outstanding or the row is not full yet.
    fn begin_submission(&mut self) -> Option<String> {
        if self.submission_in_flight {
            trace!(target: "engine", "Submission already in flight, ignoring Enter");
            return None;
        }
        let word = self.current_board.current_word()?;
        self.submission_in_flight = true;
        Some(word)
    }

    /// Second half: apply the validation result to the claimed row.
    fn resolve_submission(&mut self, word: &str, valid: bool) {
        self.submission_in_flight = false;

        if !valid {
            // Retry-same-row: blank it, keep the cursor on it, move on.
            self.current_board = self.current_board.with_row_cleared();
            self.save_snapshot();
            self.event_emitter
                .emit(&GameEngineEvent::BoardUpdated(self.current_board.clone()));
            self.event_emitter
                .emit(&GameEngineEvent::InvalidWord(word.to_string()));
            return;
        }

        let row = self.current_board.current_row();
        let verdicts = evaluate(word, self.puzzle.target());
        self.current_board = self.current_board.with_next_row();

        if is_winning(&verdicts) {
            self.status = GameStatus::Won;
        } else if row + 1 == MAX_TRIES {
            self.status = GameStatus::Lost;
        }
        self.save_snapshot();

        self.event_emitter
            .emit(&GameEngineEvent::BoardUpdated(self.current_board.clone()));
        self.event_emitter.emit(&GameEngineEvent::RowSubmitted {
            row,
            word: word.to_string(),
            verdicts,
        });
        self.event_emitter
            .emit(&GameEngineEvent::LetterHintsChanged(self.letter_hints()));

        match self.status {
            GameStatus::Won => self.complete(GameOutcome::Won, row + 1),
            GameStatus::Lost => self.complete(GameOutcome::Lost, row + 1),
            GameStatus::Playing => (),
        }
    }

    fn complete(&mut self, outcome: GameOutcome, guesses_used: usize) {
        info!(
            target: "engine",
            "Day {} over: {:?} after {} guesses",
            self.puzzle.day_index(),
            outcome,
            guesses_used
        );
        let stats = self
            .stats_manager
            .record_game(outcome, guesses_used, self.session_date);

        let state = match outcome {
            GameOutcome::Won => GameCompletionState::Won { guesses_used },
            GameOutcome::Lost => GameCompletionState::Lost {
                target: self.puzzle.target().to_string(),
            },
        };
        self.event_emitter
            .emit(&GameEngineEvent::GameCompleted(state));
        self.event_emitter
            .emit(&GameEngineEvent::StatsUpdated(stats));
    }

    /// Best verdict seen so far per guessed letter, for keyboard coloring.
    fn letter_hints(&self) -> HashMap<char, LetterVerdict> {
        let mut hints = HashMap::new();
        for row in 0..self.current_board.current_row() {
            let Some(word) = self.current_board.row_word(row) else {
                continue;
            };
            for (letter, verdict) in word.chars().zip(evaluate(&word, self.puzzle.target())) {
                let entry = hints.entry(letter).or_insert(verdict);
                if verdict.outranks(*entry) {
                    *entry = verdict;
                }
            }
        }
        hints
    }

    fn save_snapshot(&self) {
        let snapshot = GameStateSnapshot::new(
            self.current_board.clone(),
            self.status,
            self.puzzle.clone(),
        );
        snapshot.save(self.store.as_ref());
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &WordBoard {
        &self.current_board
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn stats(&self) -> &crate::model::GameStats {
        self.stats_manager.stats()
    }
}
