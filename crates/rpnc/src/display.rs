//! Display formatting for values, stack snapshots, history and failures.
//!
//! Values are fixed-point with a configurable number of fractional digits
//! (six by default).

use std::fmt::Write;

use rpn_eval::{EvalError, HistoryEntry, Span, Value};

/// Fixed-point rendering of a value.
pub fn format_value(value: Value, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// `Stack: a b c` (bottom to top), or `Stack is empty`.
pub fn format_stack(values: &[Value], precision: usize) -> String {
    if values.is_empty() {
        return "Stack is empty".to_string();
    }
    let rendered: Vec<String> = values.iter().map(|v| format_value(*v, precision)).collect();
    format!("Stack: {}", rendered.join(" "))
}

/// Numbered history, oldest first, or `No history yet`.
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history yet".to_string();
    }
    let mut out = String::from("History:");
    for (i, entry) in entries.iter().enumerate() {
        let _ = write!(out, "\n{}. {entry}", i + 1);
    }
    out
}

/// `Result: <top>`.
pub fn format_result(value: Value, precision: usize) -> String {
    format!("Result: {}", format_value(value, precision))
}

/// Failure report pointing at the offending token:
///
/// ```text
/// error: unknown operator 'foo'
///   5 foo
///     ^^^
/// ```
pub fn format_failure(line: &str, span: Span, error: &EvalError) -> String {
    let before = line.get(..span.start).unwrap_or(line);
    let token = line.get(span.start..span.end).unwrap_or_default();
    // Tabs are echoed so the carets line up however the terminal expands them.
    let pad: String = before
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let width = token.chars().count().max(1);
    format!("error: {error}\n  {line}\n  {pad}{}", "^".repeat(width))
}

#[cfg(test)]
mod tests;
