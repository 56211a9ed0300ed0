use std::collections::HashMap;

use chrono::NaiveDate;
use colored::Colorize;
use itertools::Itertools;

use crate::model::{GameStats, LetterVerdict, WordBoard, MAX_TRIES, WORD_LENGTH};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render the grid with each evaluated row colored by its verdicts and
/// unevaluated rows left plain.
pub fn render_board(board: &WordBoard, verdict_rows: &[[LetterVerdict; WORD_LENGTH]]) -> String {
    let mut output = String::new();
    for row in 0..MAX_TRIES {
        output.push(' ');
        for col in 0..WORD_LENGTH {
            let letter = board.letter(row, col).unwrap_or('·');
            let verdict = verdict_rows
                .get(row)
                .map(|verdicts| verdicts[col])
                .unwrap_or(LetterVerdict::Unknown);
            output.push_str(&paint_cell(letter, verdict));
            output.push(' ');
        }
        output.push('\n');
    }
    output
}

/// The on-screen keyboard, colored by the best verdict seen per letter.
pub fn render_keyboard(hints: &HashMap<char, LetterVerdict>) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .chars()
                .map(|letter| {
                    let verdict = hints.get(&letter).copied().unwrap_or(LetterVerdict::Unknown);
                    paint_cell(letter, verdict)
                })
                .join(" ");
            format!("{}{}", " ".repeat(i + 1), keys)
        })
        .join("\n")
}

fn paint_cell(letter: char, verdict: LetterVerdict) -> String {
    let cell = format!(" {} ", letter);
    let painted = match verdict {
        LetterVerdict::Correct => cell.as_str().black().on_green().bold(),
        LetterVerdict::Present => cell.as_str().black().on_yellow().bold(),
        LetterVerdict::Absent => cell.as_str().white().on_bright_black(),
        LetterVerdict::Unknown => return cell,
    };
    painted.to_string()
}

/// The spoiler-free result grid players paste to friends.
pub fn share_text(
    day_index: u32,
    date: NaiveDate,
    verdict_rows: &[[LetterVerdict; WORD_LENGTH]],
) -> String {
    let grid = verdict_rows
        .iter()
        .map(|verdicts| verdicts.iter().map(|&v| verdict_emoji(v)).collect::<String>())
        .join("\n");
    format!(
        "Word Whirl #{} - {}\n{}",
        day_index,
        date.format("%m/%d/%Y"),
        grid
    )
}

fn verdict_emoji(verdict: LetterVerdict) -> char {
    match verdict {
        LetterVerdict::Correct => '🟩',
        LetterVerdict::Present => '🟨',
        LetterVerdict::Absent => '⬛',
        LetterVerdict::Unknown => '⬜',
    }
}

/// The cumulative stats block shown on request and after each game.
pub fn stats_text(stats: &GameStats) -> String {
    let distribution = (0..MAX_TRIES)
        .map(|slot| {
            format!(
                "{}: {:>3} ({}%)",
                slot + 1,
                stats.guess_distribution[slot],
                stats.distribution_percent(slot)
            )
        })
        .join("\n");
    format!(
        "Games played: {}\nGames won: {}\nStreak: {}\nBest streak: {}\n\nGuess distribution:\n{}",
        stats.games_played,
        stats.games_won,
        stats.current_streak,
        stats.best_streak,
        distribution
    )
}

/// `HH:MM:SS` until the next puzzle unlocks.
pub fn countdown_text(remaining: chrono::Duration) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        remaining.num_hours(),
        remaining.num_minutes() % 60,
        remaining.num_seconds() % 60
    )
}
