//! Interactive TUI mode
//!
//! Terminal board for playing rounds with the keyboard.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::ui;
