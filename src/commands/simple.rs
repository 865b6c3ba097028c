//! Simple line-based play mode
//!
//! Text-based game without the TUI: one guess per line, colored tiles back.

use super::enter_word;
use crate::game::{GameSession, GameStatus, SessionError, format_clock};
use crate::output::formatters::colored_row;
use crate::output::print_score_summary;
use crate::wordlists::TargetPicker;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the line-based game until `/quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, W, G>(
    session: &mut GameSession,
    picker: &TargetPicker,
    rng: &mut G,
    mut reader: R,
    mut out: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    print_banner(&mut out, session)?;

    loop {
        let Some(input) = prompt(&mut reader, &mut out, session)? else {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(());
        };

        match input.as_str() {
            "" => {}
            "/quit" | "/q" | "/exit" => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                print_score_summary(&mut out, &session.scoreboard().snapshot())?;
                return Ok(());
            }
            "/new" | "/n" => {
                session.reset(picker.pick(rng))?;
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            "/retry" | "/r" => match session.retry() {
                Ok(()) => {
                    writeln!(out, "\n🔁 Board cleared, same word. The clock keeps running.\n")?;
                }
                Err(err) => writeln!(out, "{} {err}", "❌".red())?,
            },
            "/giveup" | "/g" => match session.give_up() {
                Ok(target) => {
                    let reveal = format!("The word was {}", target.text().to_uppercase());
                    writeln!(out, "{}", reveal.bright_red().bold())?;
                    writeln!(out, "Type /new for another word.")?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            "/help" | "/h" => print_help(&mut out)?,
            guess => play_guess(session, guess, &mut out)?,
        }
    }
}

fn play_guess<W: Write>(session: &mut GameSession, guess: &str, out: &mut W) -> Result<()> {
    match enter_word(session, guess) {
        Ok(outcome) => {
            if let Some(attempt) = session.attempts().last() {
                writeln!(out, "  {}", colored_row(attempt))?;
            }

            match outcome.status {
                GameStatus::Won => {
                    let plural = if outcome.attempt_number == 1 { "guess" } else { "guesses" };
                    let banner = format!(
                        "🎉 Solved in {} {plural}! Time {}",
                        outcome.attempt_number,
                        format_clock(session.elapsed())
                    );
                    writeln!(out, "\n{}", banner.bright_green().bold())?;
                    if outcome.new_best {
                        writeln!(out, "{}", "⭐ New best time!".bright_yellow().bold())?;
                    }
                    writeln!(out, "Type /new for another word or /quit to exit.")?;
                }
                GameStatus::Lost => {
                    let reveal = format!(
                        "Out of attempts. The word was {}",
                        session.target().text().to_uppercase()
                    );
                    writeln!(out, "\n{}", reveal.bright_red().bold())?;
                    writeln!(out, "Type /new for another word or /retry to try again.")?;
                }
                GameStatus::InProgress => {}
            }
        }
        Err(SessionError::SessionTerminated) => {
            writeln!(out, "The round is over. Type /new for another word.")?;
        }
        Err(err) => {
            writeln!(out, "{} {err}", "❌".red())?;
        }
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    session: &GameSession,
) -> Result<Option<String>> {
    if session.status().is_terminal() {
        write!(out, "> ")?;
    } else {
        let (row, _) = session.cursor();
        write!(
            out,
            "Guess {}/{}: ",
            row + 1,
            session.config().max_attempts()
        )?;
    }
    out.flush().context("Failed to flush output")?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}

fn print_banner<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Guess - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        session.config().word_length(),
        session.config().max_attempts()
    )?;
    print_help(out)
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "  - Green: right letter, right spot")?;
    writeln!(out, "  - Yellow: in the word, wrong spot")?;
    writeln!(out, "  - Gray: not in the word")?;
    writeln!(out, "Commands: /new, /retry, /giveup, /help, /quit\n")?;
    Ok(())
}
