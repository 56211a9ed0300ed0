use chrono::{NaiveDate, NaiveDateTime};
use log::warn;

use crate::error::GameError;
use crate::model::{Puzzle, WORD_LENGTH};

/// The first puzzle day. Day index 0 selects the first catalog entry.
const EPOCH_YEAR: i32 = 2022;
const EPOCH_MONTH: u32 = 6;
const EPOCH_DAY: u32 = 19;

const EMBEDDED_WORDS: &str = include_str!("words.txt");

/// The fixed, ordered list of candidate answers. Every calendar day maps
/// deterministically to exactly one entry; the sequence cycles after
/// `len()` days.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog, dropping entries that are not exactly five ASCII
    /// letters. An empty (or entirely unusable) list is refused; there is
    /// no fallback word.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic()) {
                    Some(word.to_ascii_uppercase())
                } else {
                    if !word.is_empty() {
                        warn!(target: "catalog", "Dropping unusable catalog entry {:?}", word);
                    }
                    None
                }
            })
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { words })
    }

    /// The compiled-in answer list.
    pub fn embedded() -> Self {
        Self::new(EMBEDDED_WORDS.lines()).expect("embedded word list is non-empty")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whole days between the puzzle epoch and `date`. Negative spans wrap
    /// with a euclidean remainder so selection stays total.
    pub fn day_index(&self, date: NaiveDate) -> u32 {
        let days = date.signed_duration_since(Self::epoch()).num_days();
        days.rem_euclid(self.words.len() as i64) as u32
    }

    /// The puzzle for a calendar day. Same date, same catalog, same word.
    pub fn puzzle_for(&self, date: NaiveDate) -> Puzzle {
        let day_index = self.day_index(date);
        Puzzle::new(self.words[day_index as usize].clone(), day_index)
    }

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY)
            .expect("epoch is a valid calendar date")
    }
}

/// Time remaining until the next puzzle unlocks (local midnight), for the
/// countdown on the stats screen.
pub fn time_until_next_puzzle(now: NaiveDateTime) -> chrono::Duration {
    let Some(tomorrow) = now.date().succ_opt() else {
        return chrono::Duration::zero();
    };
    match tomorrow.and_hms_opt(0, 0, 0) {
        Some(midnight) => midnight - now,
        None => chrono::Duration::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = WordCatalog::embedded();
        let day = date(2024, 11, 2);
        assert_eq!(catalog.puzzle_for(day), catalog.puzzle_for(day));
    }

    #[test]
    fn consecutive_days_walk_the_catalog_in_order() {
        let catalog = WordCatalog::new(["CRANE", "SOLID", "PLUMB"]).unwrap();
        assert_eq!(catalog.puzzle_for(date(2022, 6, 19)).target(), "CRANE");
        assert_eq!(catalog.puzzle_for(date(2022, 6, 20)).target(), "SOLID");
        assert_eq!(catalog.puzzle_for(date(2022, 6, 21)).target(), "PLUMB");
    }

    #[test]
    fn selection_wraps_after_the_catalog_ends() {
        let catalog = WordCatalog::new(["CRANE", "SOLID"]).unwrap();
        // Day 0 and day 2 land on the same word.
        assert_eq!(catalog.puzzle_for(date(2022, 6, 19)).target(), "CRANE");
        assert_eq!(catalog.puzzle_for(date(2022, 6, 21)).target(), "CRANE");
        assert_eq!(catalog.puzzle_for(date(2022, 6, 22)).target(), "SOLID");
    }

    #[test]
    fn dates_before_the_epoch_still_select_a_word() {
        let catalog = WordCatalog::new(["CRANE", "SOLID", "PLUMB"]).unwrap();
        // One day before the epoch is the last catalog entry, not a panic.
        assert_eq!(catalog.puzzle_for(date(2022, 6, 18)).target(), "PLUMB");
    }

    #[test]
    fn empty_catalog_is_refused() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            WordCatalog::new(empty),
            Err(GameError::EmptyCatalog)
        ));
    }

    #[test]
    fn unusable_entries_are_dropped() {
        let catalog = WordCatalog::new(["crane", "TOO LONG", "HI", "W0RDS", "solid"]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.puzzle_for(date(2022, 6, 19)).target(), "CRANE");
    }

    #[test]
    fn all_invalid_entries_is_still_an_empty_catalog() {
        assert!(matches!(
            WordCatalog::new(["toolong", "x"]),
            Err(GameError::EmptyCatalog)
        ));
    }

    #[test]
    fn embedded_catalog_is_well_formed() {
        let catalog = WordCatalog::embedded();
        assert!(catalog.len() > 300);
        // Raw entries survive validation untouched, i.e. they were already
        // five uppercase letters each.
        assert_eq!(catalog.len(), EMBEDDED_WORDS.lines().count());
    }

    #[test]
    fn countdown_reaches_zero_at_midnight() {
        let evening = date(2024, 11, 2).and_hms_opt(23, 59, 30).unwrap();
        assert_eq!(time_until_next_puzzle(evening).num_seconds(), 30);

        let midnight = date(2024, 11, 2).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(time_until_next_puzzle(midnight).num_hours(), 24);
    }
}
