//! Interactive read-eval-print loop.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::agent::Agent;
use crate::error::{AssistantError, Result};

use super::Command;

pub const BANNER: &str = "\n🤖 Gemini Assistant (with memory + Google Search)\n";
pub const USAGE: &str = "Type 'clear' to erase memory, 'exit' to quit.\n";
pub const PROMPT: &str = "You: ";
pub const CLEARED: &str = "🧹 Memory cleared.";
pub const INVALID_INPUT: &str = "Input was not valid UTF-8, please try again.";

/// Run the loop until `exit` or end of input.
///
/// Model failures and undecodable input lines are reported in-band and the
/// loop keeps going; only other I/O errors on `input` / `output` end it early.
pub async fn run<R, W>(agent: &mut Agent, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    writeln!(output, "{USAGE}")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "input line is not valid UTF-8");
            writeln!(output, "{INVALID_INPUT}\n")?;
            continue;
        };

        match Command::parse_line(line) {
            Command::Exit => break,
            Command::Empty => continue,
            Command::Clear => {
                agent.clear();
                writeln!(output, "{CLEARED}")?;
            }
            Command::Ask(text) => match agent.ask(&text).await {
                Ok(reply) => writeln!(output, "Assistant: {}\n", reply.text)?,
                Err(err) => writeln!(output, "{}\n", render_error(&err))?,
            },
        }
    }

    Ok(())
}

/// Text shown to the user when the model call fails.
pub fn render_error(err: &AssistantError) -> String {
    match err.recovery_suggestion().hint() {
        Some(hint) => format!("Assistant error: {err} ({hint})"),
        None => format!("Assistant error: {err}"),
    }
}
