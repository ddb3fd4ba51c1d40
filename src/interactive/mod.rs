//! Interactive TUI for browsing a decision tree

mod app;
mod rendering;

pub use app::{App, Branch, InputMode, Message, MessageStyle, Statistics, run_tui};
