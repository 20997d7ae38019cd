//! Token evaluation.
//!
//! The engine has a single state: each token is processed atomically
//! against the current stack. Literals push, commands act on the stack or
//! read it, operators pop their operands, compute, push the result and
//! append a history entry.

use rpn_ir::{Command, Operator, Value};
use rpn_lexer::{classify, Token};

use crate::errors::{unknown_operator, EvalResult};
use crate::help::help_text;
use crate::history::HistoryEntry;
use crate::operator_table::OperatorTable;
use crate::state::EngineState;

/// What happens to operands when the operator function itself fails
/// (division by zero, negative `sqrt`, invalid `fib` input).
///
/// Underflow and unknown tokens never remove anything, so the policy does
/// not apply to them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The popped operands are lost. `4 0 /` leaves the stack empty.
    #[default]
    Discard,
    /// The popped operands are pushed back in their original order.
    Restore,
}

/// Successful result of one token.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A literal was pushed.
    Pushed(Value),
    /// An operator was applied; `value` is the new top of stack.
    Applied { value: Value, entry: HistoryEntry },
    /// `clear` emptied the stack.
    Cleared,
    /// `show`: stack contents, bottom to top.
    Show(Vec<Value>),
    /// `history`: copy of the log in application order.
    History(Vec<HistoryEntry>),
    /// `help`: static documentation.
    Help(&'static str),
}

/// Processes tokens against an [`EngineState`].
///
/// The evaluator itself is immutable configuration; all mutable state lives
/// in the `EngineState` passed to [`Evaluator::process_token`].
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    table: OperatorTable,
    policy: FailurePolicy,
}

impl Evaluator {
    /// An evaluator that discards operands on computation failure.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Classify and process one token.
    #[tracing::instrument(level = "trace", skip(self, state))]
    pub fn process_token(&self, state: &mut EngineState, token: &str) -> EvalResult<Outcome> {
        let classified = classify(token);
        tracing::trace!(kind = classified.kind_name(), "classified token");
        match classified {
            Token::Number(value) => {
                state.stack.push(value);
                Ok(Outcome::Pushed(value))
            }
            Token::Command(command) => Ok(Self::run_command(state, command)),
            Token::Operator(op) => self.apply_operator(state, op),
            Token::Unrecognized(word) => Err(unknown_operator(word)),
        }
    }

    fn run_command(state: &mut EngineState, command: Command) -> Outcome {
        if !command.is_read_only() {
            tracing::debug!(%command, depth = state.stack.len(), "mutating command");
        }
        match command {
            Command::Clear => {
                state.stack.clear();
                Outcome::Cleared
            }
            Command::Show => Outcome::Show(state.stack.as_slice().to_vec()),
            Command::History => Outcome::History(state.history.entries().to_vec()),
            Command::Help => Outcome::Help(help_text()),
        }
    }

    fn apply_operator(&self, state: &mut EngineState, op: Operator) -> EvalResult<Outcome> {
        let operands = state.stack.pop_operands(self.table.arity(op))?;
        match self.table.apply(op, operands) {
            Ok(value) => {
                state.stack.push(value);
                let entry = HistoryEntry::new(op, operands, value);
                tracing::debug!(%entry, "applied operator");
                state.history.record(entry.clone());
                Ok(Outcome::Applied { value, entry })
            }
            Err(error) => {
                match self.policy {
                    FailurePolicy::Discard => {
                        tracing::debug!(%op, ?operands, %error, "operands discarded");
                    }
                    FailurePolicy::Restore => {
                        state.stack.restore(operands);
                        tracing::debug!(%op, ?operands, %error, "operands restored");
                    }
                }
                Err(error)
            }
        }
    }
}

/// Builder for [`Evaluator`].
#[derive(Clone, Debug, Default)]
pub struct EvaluatorBuilder {
    policy: FailurePolicy,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operand policy for computation failures.
    #[must_use]
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `true` restores operands on computation failure, `false` discards them.
    #[must_use]
    pub fn restore_on_failure(self, restore: bool) -> Self {
        self.failure_policy(if restore {
            FailurePolicy::Restore
        } else {
            FailurePolicy::Discard
        })
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            table: OperatorTable::new(),
            policy: self.policy,
        }
    }
}
