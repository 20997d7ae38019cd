//! Per-session engine state.

use rpn_ir::Value;

use crate::history::HistoryLog;
use crate::stack::OperandStack;

/// The operand stack and history log of one session.
///
/// Created at session start and handed to the [`Evaluator`](crate::Evaluator)
/// by `&mut` for every token. Sessions never share state, so any number of
/// them can coexist.
#[derive(Clone, Debug, Default)]
pub struct EngineState {
    pub(crate) stack: OperandStack,
    pub(crate) history: HistoryLog,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Current top of stack.
    pub fn top(&self) -> Option<Value> {
        self.stack.peek()
    }
}
