use crate::model::{LetterVerdict, WORD_LENGTH};

/// Classify each letter of `guess` against `target`.
///
/// Two passes keep duplicate letters honest: the exact-position pass
/// consumes target letters first, then the presence pass hands out
/// `Present` only while unconsumed occurrences remain. A letter appearing
/// once in the target and twice in the guess is credited at most once; the
/// extra copy reads `Absent`.
///
/// Both words must be `WORD_LENGTH` uppercase ASCII letters; the board and
/// catalog guarantee that for every caller.
pub fn evaluate(guess: &str, target: &str) -> [LetterVerdict; WORD_LENGTH] {
    let guess = letters_of(guess);
    let target = letters_of(target);

    let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];
    for &letter in &target {
        remaining[slot(letter)] += 1;
    }

    // Exact positions first; each hit consumes an occurrence.
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            verdicts[i] = LetterVerdict::Correct;
            remaining[slot(guess[i])] -= 1;
        }
    }

    // Then presence, from whatever the first pass left over.
    for i in 0..WORD_LENGTH {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        let slot = slot(guess[i]);
        if remaining[slot] > 0 {
            verdicts[i] = LetterVerdict::Present;
            remaining[slot] -= 1;
        }
    }

    verdicts
}

/// A guess wins when every position is exact.
pub fn is_winning(verdicts: &[LetterVerdict; WORD_LENGTH]) -> bool {
    verdicts.iter().all(|&v| v == LetterVerdict::Correct)
}

fn letters_of(word: &str) -> [char; WORD_LENGTH] {
    let mut letters = ['A'; WORD_LENGTH];
    debug_assert_eq!(word.chars().count(), WORD_LENGTH, "word {:?}", word);
    for (i, letter) in word.chars().take(WORD_LENGTH).enumerate() {
        debug_assert!(letter.is_ascii_uppercase(), "letter {:?}", letter);
        letters[i] = letter;
    }
    letters
}

fn slot(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present};

    #[test]
    fn guessing_the_target_is_all_correct() {
        for word in ["CRANE", "ALLOY", "QUEUE", "MAMMA"] {
            assert!(is_winning(&evaluate(word, word)), "{}", word);
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(
            evaluate("CRANE", "SPILT"),
            [Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn exact_and_misplaced_letters_mix() {
        // C and R miss, A and E sit exactly, N misses (SLATE has none).
        assert_eq!(
            evaluate("CRANE", "SLATE"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_guess_letters_credit_at_most_the_target_count() {
        // ALLOY holds two Ls: the exact one at index 2 consumes one, the
        // leading L takes the second, the L at index 3 gets nothing.
        assert_eq!(
            evaluate("LOLLY", "ALLOY"),
            [Present, Present, Correct, Absent, Correct]
        );
    }

    #[test]
    fn exact_match_wins_the_occurrence_over_an_earlier_misplacement() {
        // FLOOR has two Os; ROBOT's first O is misplaced, second exact.
        assert_eq!(
            evaluate("ROBOT", "FLOOR"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn single_target_letter_guessed_twice_is_credited_once() {
        // ERASE has one S; SPEED's lone S is misplaced, and only two of the
        // three Es in the target can back SPEED's two Es.
        assert_eq!(
            evaluate("SPEED", "ERASE"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn correct_count_equals_matching_positions() {
        let pairs = [
            ("CRANE", "CRANE"),
            ("CRANE", "SLATE"),
            ("LOLLY", "ALLOY"),
            ("SPEED", "ERASE"),
            ("AAAAA", "ABABA"),
        ];
        for (guess, target) in pairs {
            let verdicts = evaluate(guess, target);
            let exact = guess
                .chars()
                .zip(target.chars())
                .filter(|(g, t)| g == t)
                .count();
            let correct = verdicts
                .iter()
                .filter(|&&v| v == LetterVerdict::Correct)
                .count();
            assert_eq!(correct, exact, "{} vs {}", guess, target);
        }
    }

    #[test]
    fn credited_letters_never_exceed_target_occurrences() {
        let pairs = [
            ("LOLLY", "ALLOY"),
            ("SPEED", "ERASE"),
            ("AAAAA", "ABABA"),
            ("ABABA", "AAAAA"),
            ("MAMMA", "DRAMA"),
        ];
        for (guess, target) in pairs {
            let verdicts = evaluate(guess, target);
            for letter in 'A'..='Z' {
                let credited = guess
                    .chars()
                    .zip(verdicts.iter())
                    .filter(|&(g, &v)| g == letter && v != LetterVerdict::Absent)
                    .count();
                let available = target.chars().filter(|&t| t == letter).count();
                assert!(
                    credited <= available,
                    "{} credited {} times in {} vs {}",
                    letter,
                    credited,
                    guess,
                    target
                );
            }
        }
    }
}
