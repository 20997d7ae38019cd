//! RPN Eval - the calculator engine.
//!
//! Consumes one token at a time against an explicit [`EngineState`].
//!
//! # Architecture
//!
//! - `OperandStack`: last-in-first-out operands, underflow checked before any pop
//! - `HistoryLog`: append-only record of every successful operator application
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `OperatorTable`: arity and operand-to-function routing
//! - `Evaluator`: token routing plus the [`FailurePolicy`] for operands
//!   consumed by a failed computation
//!
//! There is no global state. Every session owns its own `EngineState` and
//! passes it to the evaluator by `&mut`.

pub mod errors;
mod evaluator;
mod help;
mod history;
mod operator_table;
mod operators;
mod stack;
mod state;
mod unary_operators;

pub use errors::{EvalError, EvalResult};
pub use evaluator::{Evaluator, EvaluatorBuilder, FailurePolicy, Outcome};
pub use help::help_text;
pub use history::{HistoryEntry, HistoryLog};
pub use operator_table::OperatorTable;
pub use operators::evaluate_binary;
pub use stack::{OperandStack, Operands};
pub use state::EngineState;
pub use unary_operators::{evaluate_unary, fibonacci};

// Re-export the shared vocabulary so shells need a single dependency
pub use rpn_ir::{Arity, BinaryOp, Command, Operator, Span, UnaryOp, Value};

#[cfg(test)]
mod tests;
