//! Interactive read-eval-print loop.
//!
//! Generic over [`BufRead`] so tests can drive it from a byte slice.

use std::borrow::Cow;
use std::io::BufRead;

use crate::error::ShellError;
use crate::session::Session;

pub const PROMPT: &str = "> ";

/// Words that end the session. They never reach the engine.
pub fn is_exit_command(line: &str) -> bool {
    matches!(line, "quit" | "exit")
}

/// Run the loop until `quit`, `exit`, or end of input.
///
/// Returns the number of lines evaluated.
pub fn run_repl<R: BufRead>(session: &mut Session, mut input: R) -> Result<usize, ShellError> {
    let out = std::sync::Arc::clone(session.output());
    out.println("=== RPN Calculator ===");
    out.println("Type 'help' for usage");
    out.println("Type 'quit' to exit");
    out.println("");

    let mut evaluated = 0;
    let mut buf = Vec::new();
    loop {
        out.print(PROMPT);
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF: finish the prompt line so the farewell starts clean
            out.println("");
            break;
        }
        // Invalid bytes become U+FFFD, which the engine rejects as an
        // unknown word; the rest of the line still runs.
        let text = String::from_utf8_lossy(&buf);
        if matches!(text, Cow::Owned(_)) {
            tracing::debug!("input line is not valid UTF-8");
        }
        let line = text.trim();
        if is_exit_command(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }
        session.run_line(line);
        evaluated += 1;
    }

    tracing::debug!(evaluated, "repl finished");
    out.println("Goodbye!");
    Ok(evaluated)
}

#[cfg(test)]
mod tests;
