//! Static help text for the `help` command.

use std::fmt::Write;
use std::sync::OnceLock;

use rpn_ir::{Arity, Command};

use crate::operator_table::OperatorTable;

static HELP: OnceLock<String> = OnceLock::new();

/// The help document, built once from the operator table and command list.
pub fn help_text() -> &'static str {
    HELP.get_or_init(build_help)
}

fn build_help() -> String {
    let table = OperatorTable::new();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "=== RPN Calculator ===");
    let _ = writeln!(out, "Operators (binary, a is pushed before b):");
    for op in table.operators().filter(|op| op.arity() == Arity::Binary) {
        let _ = writeln!(out, "  {:<12}{}", op.as_symbol(), op.description());
    }
    let _ = writeln!(out, "Functions (unary):");
    for op in table.operators().filter(|op| op.arity() == Arity::Unary) {
        let _ = writeln!(out, "  {:<12}{}", op.as_symbol(), op.description());
    }
    let _ = writeln!(out, "Stack commands:");
    for cmd in Command::ALL {
        let _ = writeln!(out, "  {:<12}{}", cmd.as_str(), cmd.description());
    }
    let _ = writeln!(out, "  {:<12}exit the calculator (also: exit)", "quit");
    let _ = writeln!(out, "Examples:");
    let _ = writeln!(out, "  {:<12}-> 8", "5 3 +");
    let _ = writeln!(out, "  {:<12}-> 3", "9 sqrt");
    let _ = write!(out, "  {:<12}-> 5", "5 fib");
    out
}
