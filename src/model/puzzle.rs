use serde::{Deserialize, Serialize};

/// The secret a session plays against: today's word plus the day index it
/// was selected for. Immutable once selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    target: String,
    day_index: u32,
}

impl Puzzle {
    pub fn new(target: impl Into<String>, day_index: u32) -> Self {
        Self {
            target: target.into().to_ascii_uppercase(),
            day_index,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn day_index(&self) -> u32 {
        self.day_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_uppercase_normalized() {
        let puzzle = Puzzle::new("crane", 12);
        assert_eq!(puzzle.target(), "CRANE");
        assert_eq!(puzzle.day_index(), 12);
    }
}
