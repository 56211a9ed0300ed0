use super::KeyInput;

pub const WORD_LENGTH: usize = 5;
pub const MAX_TRIES: usize = 6;

/// The grid of guesses plus the cursor position within it.
///
/// Value semantics throughout: every mutation returns a new board, because
/// the current board is shared with the persisted-state snapshot. Cells at
/// or below `current_row` that have not been typed into stay `None`.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordBoard {
    cells: [[Option<char>; WORD_LENGTH]; MAX_TRIES],
    current_row: usize,
    current_col: usize,
}

impl std::fmt::Debug for WordBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');

        for row in 0..MAX_TRIES {
            output.push('|');
            for col in 0..WORD_LENGTH {
                let marker = if row == self.current_row && col == self.current_col {
                    '*'
                } else {
                    ' '
                };
                match self.cells[row][col] {
                    Some(letter) => output.push_str(&format!("{}{}|", letter, marker)),
                    None => output.push_str(&format!(".{}|", marker)),
                }
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl Default for WordBoard {
    fn default() -> Self {
        Self {
            cells: [[None; WORD_LENGTH]; MAX_TRIES],
            current_row: 0,
            current_col: 0,
        }
    }
}

impl WordBoard {
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn current_col(&self) -> usize {
        self.current_col
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row][col]
    }

    /// The current row holds a full word and is ready to submit.
    pub fn is_row_full(&self) -> bool {
        self.current_col == WORD_LENGTH
    }

    /// All rows consumed; no further guesses possible.
    pub fn is_exhausted(&self) -> bool {
        self.current_row == MAX_TRIES
    }

    /// Apply a keystroke, returning the resulting board. No-ops (letter on
    /// a full row, clear at column zero, enter) return an identical board
    /// rather than an error.
    pub fn with_key(&self, key: KeyInput) -> WordBoard {
        let mut board = self.clone();
        match key {
            KeyInput::Clear => board.clear_one(),
            KeyInput::Letter(letter) => board.put_letter(letter),
            // Submission is the engine's job; the cursor does not move.
            KeyInput::Enter => (),
        }
        board
    }

    /// Blank the current row and rewind the column: the invalid-word retry.
    pub fn with_row_cleared(&self) -> WordBoard {
        let mut board = self.clone();
        board.cells[board.current_row] = [None; WORD_LENGTH];
        board.current_col = 0;
        board
    }

    /// Advance the cursor past a submitted row. Only meaningful when the
    /// row is full; the engine calls this after a valid submission.
    pub fn with_next_row(&self) -> WordBoard {
        let mut board = self.clone();
        board.current_row += 1;
        board.current_col = 0;
        board
    }

    /// The word sitting in the current row, if the row is complete.
    pub fn current_word(&self) -> Option<String> {
        if !self.is_row_full() {
            return None;
        }
        self.row_word(self.current_row)
    }

    /// The word in a given row, if every cell of that row is filled.
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.cells[row].iter().copied().collect()
    }

    fn clear_one(&mut self) {
        if self.current_col > 0 {
            self.current_col -= 1;
            self.cells[self.current_row][self.current_col] = None;
        }
    }

    fn put_letter(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() {
            return;
        }
        if self.current_row < MAX_TRIES && self.current_col < WORD_LENGTH {
            self.cells[self.current_row][self.current_col] = Some(letter.to_ascii_uppercase());
            self.current_col += 1;
        }
    }

    /// Build a board from rows of letters, e.g. `"CRANE\nSO"`. Full rows are
    /// treated as submitted; the cursor lands on the first partial or empty
    /// row.
    #[cfg(test)]
    pub fn parse(input: &str) -> Self {
        let mut board = WordBoard::default();
        for line in input.lines() {
            for letter in line.chars() {
                board.put_letter(letter);
            }
            if board.is_row_full() {
                board = board.with_next_row();
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_fill_left_to_right() {
        let board = WordBoard::default()
            .with_key(KeyInput::Letter('c'))
            .with_key(KeyInput::Letter('R'));

        assert_eq!(board.letter(0, 0), Some('C'));
        assert_eq!(board.letter(0, 1), Some('R'));
        assert_eq!(board.current_col(), 2);
        assert_eq!(board.current_row(), 0);
    }

    #[test]
    fn letter_on_full_row_is_identity() {
        let mut board = WordBoard::default();
        for letter in "CRANE".chars() {
            board = board.with_key(KeyInput::Letter(letter));
        }
        assert!(board.is_row_full());
        assert_eq!(board.with_key(KeyInput::Letter('X')), board);
    }

    #[test]
    fn clear_removes_last_letter() {
        let mut board = WordBoard::default();
        for letter in "CRA".chars() {
            board = board.with_key(KeyInput::Letter(letter));
        }
        let cleared = board.with_key(KeyInput::Clear);

        assert_eq!(cleared.current_col(), 2);
        assert_eq!(cleared.letter(0, 2), None);
        assert_eq!(cleared.letter(0, 1), Some('R'));
    }

    #[test]
    fn clear_at_column_zero_is_identity() {
        let board = WordBoard::default();
        assert_eq!(board.with_key(KeyInput::Clear), board);
        // And stays an identity however often it is repeated.
        assert_eq!(
            board.with_key(KeyInput::Clear).with_key(KeyInput::Clear),
            board
        );
    }

    #[test]
    fn enter_does_not_move_the_cursor() {
        let mut board = WordBoard::default();
        for letter in "CRANE".chars() {
            board = board.with_key(KeyInput::Letter(letter));
        }
        assert_eq!(board.with_key(KeyInput::Enter), board);
    }

    #[test]
    fn non_alphabetic_input_is_ignored() {
        let board = WordBoard::default()
            .with_key(KeyInput::Letter('3'))
            .with_key(KeyInput::Letter('!'));
        assert_eq!(board, WordBoard::default());
    }

    #[test]
    fn row_cleared_resets_only_the_current_row() {
        let board = WordBoard::parse("CRANE\nSOL");
        let cleared = board.with_row_cleared();

        assert_eq!(cleared.row_word(0).as_deref(), Some("CRANE"));
        assert_eq!(cleared.current_row(), 1);
        assert_eq!(cleared.current_col(), 0);
        assert_eq!(cleared.letter(1, 0), None);
    }

    #[test]
    fn current_word_requires_a_full_row() {
        assert_eq!(WordBoard::parse("SOL").current_word(), None);

        let mut board = WordBoard::default();
        for letter in "SOLID".chars() {
            board = board.with_key(KeyInput::Letter(letter));
        }
        assert_eq!(board.current_word().as_deref(), Some("SOLID"));
    }

    #[test]
    fn exhausted_after_six_submitted_rows() {
        let board = WordBoard::parse("CRANE\nSOLID\nPLUMB\nTHICK\nGRAVY\nFJORD");
        assert!(board.is_exhausted());
    }

    #[test]
    fn serde_round_trip() {
        let board = WordBoard::parse("CRANE\nSO");
        let json = serde_json::to_string(&board).unwrap();
        let restored: WordBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
