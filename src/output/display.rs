//! Display functions for command results

use super::formatters::{attempt_line, colored_row, create_progress_bar};
use crate::commands::CheckResult;
use crate::game::{GameStatus, ScoreSnapshot, format_clock};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of a check run
pub fn print_check_result(result: &CheckResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, attempt) in result.attempts.iter().enumerate() {
        if verbose {
            println!("{}. {}  {}", i + 1, colored_row(attempt), attempt.feedback());
        } else {
            println!("{}. {}", i + 1, attempt_line(attempt));
        }
    }

    for rejected in &result.rejected {
        println!(
            "{} {}: {}",
            "skipped".bright_black(),
            rejected.guess.to_uppercase(),
            rejected.reason
        );
    }

    if !result.unused.is_empty() {
        println!(
            "{} {}",
            "not played (round over):".bright_black(),
            result.unused.join(", ").to_uppercase()
        );
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.attempts.len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.attempts.len())
                .red()
                .bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!("… Still open after {} guesses", result.attempts.len()).yellow()
        ),
    }
}

/// Write best time, win rate and guess distribution
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_score_summary<W: Write>(out: &mut W, snapshot: &ScoreSnapshot) -> io::Result<()> {
    if snapshot.games_played == 0 {
        return Ok(());
    }

    writeln!(out, "\n📊 {}", "Session stats:".bright_cyan().bold())?;
    writeln!(out, "   Games played:  {}", snapshot.games_played)?;
    writeln!(
        out,
        "   Win rate:      {}",
        format!("{:.0}%", snapshot.win_rate()).bright_yellow()
    )?;
    if let Some(best) = snapshot.best_time {
        writeln!(out, "   Best time:     {}", format_clock(best).green())?;
    }

    let max = snapshot.guess_distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Ok(());
    }

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for (guesses, &count) in snapshot.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn summary_empty_when_nothing_played() {
        let mut out = Vec::new();
        print_score_summary(&mut out, &ScoreSnapshot::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn summary_lists_best_time_and_distribution() {
        colored::control::set_override(false);
        let snapshot = ScoreSnapshot {
            best_time: Some(Duration::from_secs(75)),
            games_played: 2,
            games_won: 1,
            guess_distribution: vec![0, 0, 0, 1],
        };

        let mut out = Vec::new();
        print_score_summary(&mut out, &snapshot).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("01:15"));
        assert!(text.contains("50%"));
        assert!(text.contains("3: "));
    }
}
