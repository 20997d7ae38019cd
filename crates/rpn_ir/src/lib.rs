//! RPN IR - shared vocabulary for the calculator crates.
//!
//! This crate holds the plain data every other crate agrees on:
//! - `Value` for operands and results
//! - `Operator`, `BinaryOp`, `UnaryOp` and `Arity` for the operator set
//! - `Command` for stack-management commands
//! - `Span` for locating a token inside an input line
//!
//! It has no dependencies so the lexer and the engine can share it freely.

mod command;
mod operators;
mod span;

pub use command::Command;
pub use operators::{Arity, BinaryOp, Operator, UnaryOp};
pub use span::Span;

/// An operand or result. Finite values are the norm; NaN and infinities
/// are not rejected and flow through arithmetic like any IEEE 754 double.
pub type Value = f64;
