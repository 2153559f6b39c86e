//! Command-line surface: argument parsing and the interactive loop.

pub mod repl;

use clap::Parser;

/// Chat with Gemini from the terminal. Bitcoin price and weather questions
/// are answered from Google Search instead of the model.
///
/// Reads GEMINI_API_KEY, SEARCH_API_KEY and SEARCH_ENGINE_ID from the
/// environment or a .env file. Type 'clear' to erase memory, 'exit' to quit.
#[derive(Parser, Debug)]
#[command(name = "gemini-assistant", version)]
pub struct Cli {}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Clear,
    Empty,
    Ask(String),
}

impl Command {
    /// Interpret a raw input line. Control words are matched case-insensitively
    /// after trimming.
    pub fn parse_line(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if trimmed.eq_ignore_ascii_case("exit") {
            Self::Exit
        } else if trimmed.eq_ignore_ascii_case("clear") {
            Self::Clear
        } else {
            Self::Ask(trimmed.to_string())
        }
    }
}
