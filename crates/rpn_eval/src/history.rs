//! History log of completed operations.
//!
//! Entries are appended in evaluation order and never mutated or removed.
//! Only the evaluator appends, and only after an operator succeeds.

use std::fmt;

use rpn_ir::{Operator, Value};

use crate::stack::Operands;

/// Human-readable record of one operator application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    description: String,
}

impl HistoryEntry {
    /// Describe `op` applied to `operands` yielding `result`.
    ///
    /// Binary: `a op b = result`. Unary: `op(a) = result`. Numbers use six
    /// fractional digits.
    pub fn new(op: Operator, operands: Operands, result: Value) -> Self {
        let description = match operands {
            Operands::Binary(a, b) => format!("{a:.6} {op} {b:.6} = {result:.6}"),
            Operands::Unary(a) => format!("{op}({a:.6}) = {result:.6}"),
        };
        Self { description }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Append-only sequence of [`HistoryEntry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
