//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived matcher for a single word.
//! Whitespace is never skipped: the caller has already split the line.

use logos::Logos;
use rpn_ir::{Operator, Value};

/// Parse the matched slice of a numeric literal.
///
/// The regexes only accept digit runs with at most one `.` and at least one
/// digit, all of which `f64::from_str` understands.
fn parse_number(lex: &mut logos::Lexer<'_, RawToken>) -> Option<Value> {
    lex.slice().parse().ok()
}

fn operator(lex: &mut logos::Lexer<'_, RawToken>) -> Option<Operator> {
    Operator::from_symbol(lex.slice())
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"-?[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"-?\.[0-9]+", parse_number)]
    Number(Value),

    // One symbol table for the whole workspace: the callback resolves the
    // slice through `Operator::from_symbol`.
    #[token("+", operator)]
    #[token("-", operator)]
    #[token("*", operator)]
    #[token("/", operator)]
    #[token("^", operator)]
    #[token("sqrt", operator)]
    #[token("sin", operator)]
    #[token("cos", operator)]
    #[token("tan", operator)]
    #[token("fib", operator)]
    Operator(Operator),

    // Commands
    #[token("clear")]
    Clear,
    #[token("show")]
    Show,
    #[token("history")]
    History,
    #[token("help")]
    Help,
}
