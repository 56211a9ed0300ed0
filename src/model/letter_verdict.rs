use serde::{Deserialize, Serialize};

/// Per-letter classification of a submitted guess.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Right letter, right position.
    Correct,
    /// Letter occurs in the target, wrong position.
    Present,
    /// Letter does not occur (or all its occurrences are spoken for).
    Absent,
    /// Cell not yet evaluated (row at or below the cursor).
    Unknown,
}

impl LetterVerdict {
    /// Precedence for keyboard hints: once a letter has been seen green it
    /// stays green even if a later guess places it wrong.
    pub fn outranks(self, other: LetterVerdict) -> bool {
        self.rank() > other.rank()
    }

    fn rank(self) -> u8 {
        match self {
            LetterVerdict::Correct => 3,
            LetterVerdict::Present => 2,
            LetterVerdict::Absent => 1,
            LetterVerdict::Unknown => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_outranks_everything_else() {
        assert!(LetterVerdict::Correct.outranks(LetterVerdict::Present));
        assert!(LetterVerdict::Correct.outranks(LetterVerdict::Absent));
        assert!(LetterVerdict::Correct.outranks(LetterVerdict::Unknown));
        assert!(!LetterVerdict::Correct.outranks(LetterVerdict::Correct));
    }

    #[test]
    fn present_outranks_absent_but_not_correct() {
        assert!(LetterVerdict::Present.outranks(LetterVerdict::Absent));
        assert!(!LetterVerdict::Present.outranks(LetterVerdict::Correct));
    }
}
