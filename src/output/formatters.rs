//! Formatting utilities for terminal output

use crate::core::LetterVerdict;
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Render one tile as a colored, padded uppercase letter
#[must_use]
pub fn colored_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a whole attempt as a row of colored tiles
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    attempt
        .tiles()
        .map(|(letter, verdict)| colored_tile(letter, verdict).to_string())
        .collect()
}

/// Plain `WORD 🟩🟨⬜..` line for an attempt
#[must_use]
pub fn attempt_line(attempt: &Attempt) -> String {
    format!(
        "{} {}",
        attempt.word().text().to_uppercase(),
        attempt.feedback().to_emoji()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
