//! Command implementations for the `rpn` binary.
//!
//! Each command builds a [`Session`] from the given config and returns a
//! summary; `main.rs` turns summaries and errors into exit codes.

use std::path::Path;

use crate::config::SessionConfig;
use crate::error::ShellError;
use crate::output::SharedPrintHandler;
use crate::repl::run_repl;
use crate::session::{BatchSummary, Session};

/// Run the interactive loop on stdin.
pub fn repl(config: SessionConfig, out: SharedPrintHandler) -> Result<usize, ShellError> {
    let mut session = Session::new(config, out);
    let stdin = std::io::stdin();
    run_repl(&mut session, stdin.lock())
}

/// Evaluate each argument as one batch entry.
pub fn eval_expressions(
    expressions: &[String],
    config: SessionConfig,
    out: SharedPrintHandler,
) -> BatchSummary {
    Session::new(config, out).run_batch(expressions)
}

/// Evaluate a file of expressions, one per line.
pub fn batch_file(
    path: &Path,
    config: SessionConfig,
    out: SharedPrintHandler,
) -> Result<BatchSummary, ShellError> {
    let content = read_file(path)?;
    let expressions = batch_expressions(&content);
    tracing::debug!(path = %path.display(), count = expressions.len(), "loaded batch file");
    Ok(Session::new(config, out).run_batch(expressions))
}

/// Lines of a batch file worth evaluating.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped.
pub fn batch_expressions(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Read a file, mapping failures to user-facing messages.
pub fn read_file(path: &Path) -> Result<String, ShellError> {
    std::fs::read_to_string(path)
        .map_err(|e| ShellError::reading(&path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let content = "# warm-up\n5 3 +\n\n   \n  # indented comment\n  9 sqrt  \n";
        assert_eq!(batch_expressions(content), vec!["5 3 +", "9 sqrt"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_file(Path::new("/definitely/not/here.rpn"));
        assert!(
            matches!(&result, Err(ShellError::FileNotFound { path }) if path == "/definitely/not/here.rpn")
        );
        if let Err(e) = result {
            assert_eq!(e.to_string(), "cannot find file '/definitely/not/here.rpn'");
        }
    }
}
