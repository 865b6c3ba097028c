//! TUI rendering with ratatui
//!
//! Board of letter tiles, an on-screen keyboard with letter hints, the clock and
//! a message log.

use super::app::{App, MessageStyle};
use crate::core::LetterVerdict;
use crate::game::{GameStatus, format_clock};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_instructions {
        render_instructions(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD GUESS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    match verdict {
        LetterVerdict::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Present => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let word_length = session.config().word_length();
    let empty = Style::default().bg(Color::Black).fg(Color::DarkGray);
    let typed = Style::default()
        .bg(Color::Black)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let (cursor_row, _) = session.cursor();
    let mut lines = Vec::with_capacity(session.config().max_attempts() * 2);

    for row in 0..session.config().max_attempts() {
        let spans: Vec<Span<'static>> = if let Some(attempt) = session.attempts().get(row) {
            attempt
                .tiles()
                .flat_map(|(letter, verdict)| tile(letter, verdict_style(verdict)))
                .collect()
        } else if row == cursor_row && session.status() == GameStatus::InProgress {
            let buffer: Vec<char> = session.buffer().chars().collect();
            (0..word_length)
                .flat_map(|col| match buffer.get(col) {
                    Some(&letter) => tile(letter, typed),
                    None => tile('·', empty),
                })
                .collect()
        } else {
            (0..word_length).flat_map(|_| tile(' ', empty)).collect()
        };

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    if app.target_revealed() {
        lines.push(
            Line::from(Span::styled(
                format!(
                    "The correct word was: {}",
                    session.target().text().to_uppercase()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.session.status() {
        GameStatus::InProgress => format!(
            " Board | {} left ",
            app.session.attempts_remaining()
        ),
        GameStatus::Won => " Board | 🎉 Solved! ".to_string(),
        GameStatus::Lost => " Board | Round over ".to_string(),
    };

    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    render_clock(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.scoreboard().snapshot();
    let best = stats
        .best_time
        .map_or_else(|| "--:--".to_string(), format_clock);

    let content = vec![
        Line::from(vec![
            Span::raw("Timer:     "),
            Span::styled(
                format_clock(app.session.elapsed()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Best Time: "),
            Span::styled(best, Style::default().fg(Color::Green)),
        ]),
        Line::from(format!("Games:     {}", stats.games_played)),
        Line::from(format!("Win Rate:  {:.0}%", stats.win_rate())),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Clock ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();
    let unused = Style::default().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let style = hints.get(&letter).map_or(unused, |&v| verdict_style(v));
                    tile(char::from(letter), style)
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.status() == GameStatus::Won {
        "Ctrl-N: New Word | Tab: Rules | Esc: Quit"
    } else if app.session.status().is_terminal() {
        "Ctrl-N: New Word | Ctrl-R: Try Again | Tab: Rules | Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-G: Give Up | Ctrl-N: New Word | Tab: Rules | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);

    let text = vec![
        Line::from("Guess the hidden word. Each guess must be a listed word."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", verdict_style(LetterVerdict::Correct)),
            Span::raw(" right letter, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" A ", verdict_style(LetterVerdict::Present)),
            Span::raw(" in the word, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled(" A ", verdict_style(LetterVerdict::Absent)),
            Span::raw(" not in the word (or no copies left)"),
        ]),
        Line::from(""),
        Line::from("Solve it fast to beat your best time."),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" How to Play | Tab to close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
