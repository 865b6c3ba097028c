//! TUI application state and logic

use crate::game::{GameSession, GameStatus, SessionError, format_clock};
use crate::wordlists::TargetPicker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval so the clock keeps ticking without input
const TICK: Duration = Duration::from_millis(200);

/// Application state
pub struct App {
    pub session: GameSession,
    pub picker: TargetPicker,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub show_instructions: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, picker: TargetPicker, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            picker,
            rng,
            messages: Vec::new(),
            show_instructions: false,
            should_quit: false,
        };
        app.add_message(
            "Type a word and press Enter. Tab shows the rules.",
            MessageStyle::Info,
        );
        app
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.retry(),
            KeyCode::Char('g') if ctrl => self.give_up(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_instructions = !self.show_instructions,
            KeyCode::Char(c) if !ctrl => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, c: char) {
        match self.session.append_letter(c) {
            // A full row or a finished round just swallows the key
            Ok(()) | Err(SessionError::BufferFull(_) | SessionError::SessionTerminated) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn backspace(&mut self) {
        // Nothing to delete is not worth a message
        let _ = self.session.remove_letter();
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(outcome) => match outcome.status {
                GameStatus::Won => {
                    let celebration = match outcome.attempt_number {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    let time = format_clock(self.session.elapsed());
                    if outcome.new_best {
                        self.add_message(
                            &format!("⭐ New best time: {time}"),
                            MessageStyle::Success,
                        );
                    } else {
                        self.add_message(&format!("Time: {time}"), MessageStyle::Info);
                    }
                    self.add_message("Ctrl-N for a new word, Esc to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    let text = format!(
                        "Out of attempts! The word was {}",
                        self.session.target().text().to_uppercase()
                    );
                    self.add_message(&text, MessageStyle::Error);
                    self.add_message("Ctrl-R to try again, Ctrl-N for a new word.", MessageStyle::Info);
                }
                GameStatus::InProgress => {}
            },
            Err(SessionError::SessionTerminated) => {
                self.add_message("Round over. Ctrl-N for a new word.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let target = self.picker.pick(&mut self.rng);
        match self.session.reset(target) {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New word chosen. Good luck!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn retry(&mut self) {
        match self.session.retry() {
            Ok(()) => self.add_message("Board cleared, same word.", MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        match self.session.give_up() {
            Ok(target) => {
                let text = format!("The correct word was: {}", target.text().to_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whether the board should show the target word
    #[must_use]
    pub fn target_revealed(&self) -> bool {
        self.session.status() == GameStatus::Lost
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(%err, "TUI exited with an error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, Scoreboard, WordValidator};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use std::sync::Arc;

    const WORDS: &[&str] = &["crane", "slate", "speed", "erase", "allow"];

    fn app(target: &str) -> App {
        let session = GameSession::new(
            GameConfig::default(),
            Arc::new(WordValidator::from_strs(5, WORDS)),
            Arc::new(Scoreboard::new()),
            Word::new(target).unwrap(),
        )
        .unwrap();
        let picker = TargetPicker::new(5, words_from_slice(WORDS)).unwrap();
        App::new(session, picker, StdRng::seed_from_u64(3))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_buffer_and_backspace_removes() {
        let mut app = app("speed");
        type_word(&mut app, "cran");
        assert_eq!(app.session.buffer(), "cran");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.buffer(), "cra");
    }

    #[test]
    fn extra_letters_are_ignored() {
        let mut app = app("speed");
        type_word(&mut app, "cranes");
        assert_eq!(app.session.buffer(), "crane");
    }

    #[test]
    fn enter_submits_and_win_is_celebrated() {
        let mut app = app("speed");
        type_word(&mut app, "speed");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), GameStatus::Won);
        assert!(app.messages.iter().any(|m| m.text.contains("HOLE IN ONE")));
        assert!(app.messages.iter().any(|m| m.text.contains("New best time")));
    }

    #[test]
    fn invalid_word_shows_error_and_keeps_buffer() {
        let mut app = app("speed");
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.buffer(), "zzzzz");
        assert!(app.session.attempts().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn give_up_then_new_game() {
        let mut app = app("allow");
        ctrl(&mut app, 'g');
        assert!(app.target_revealed());
        assert!(app.messages.iter().any(|m| m.text.contains("ALLOW")));

        ctrl(&mut app, 'n');
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert!(app.session.attempts().is_empty());
    }

    #[test]
    fn tab_toggles_instructions_and_esc_quits() {
        let mut app = app("allow");
        press(&mut app, KeyCode::Tab);
        assert!(app.show_instructions);
        press(&mut app, KeyCode::Tab);
        assert!(!app.show_instructions);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn retry_keeps_target() {
        let mut app = app("allow");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'r');

        assert!(app.session.attempts().is_empty());
        assert_eq!(app.session.target().text(), "allow");
    }

    #[test]
    fn retry_after_give_up_is_refused() {
        let mut app = app("allow");
        ctrl(&mut app, 'g');
        ctrl(&mut app, 'r');

        assert!(app.target_revealed());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("given up"));
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("allow");
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
