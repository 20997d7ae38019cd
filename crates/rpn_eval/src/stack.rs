//! Operand stack.
//!
//! Plain last-in-first-out storage of values. Operators take their operands
//! through [`OperandStack::pop_operands`], which checks the depth first so an
//! underflow never removes anything.

use rpn_ir::{Arity, Value};

use crate::errors::{stack_underflow, EvalResult};

/// Operands removed from the stack for one operator application.
///
/// `Binary(a, b)`: `a` was pushed first (deeper), `b` was on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operands {
    Unary(Value),
    Binary(Value, Value),
}

impl Operands {
    /// Number of operands held.
    pub fn count(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(..) => 2,
        }
    }
}

/// The calculator operand stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperandStack {
    items: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Top of stack without removing it.
    pub fn peek(&self) -> Option<Value> {
        self.items.last().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All values, bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Pop the operands for an operator of the given arity.
    ///
    /// Fails with `StackUnderflow` and leaves the stack untouched when fewer
    /// than `arity.operand_count()` values are present.
    pub fn pop_operands(&mut self, arity: Arity) -> EvalResult<Operands> {
        let required = arity.operand_count();
        let available = self.items.len();
        if available < required {
            return Err(stack_underflow(required, available));
        }
        let operands = match arity {
            Arity::Unary => self.items.pop().map(Operands::Unary),
            Arity::Binary => {
                let b = self.items.pop();
                let a = self.items.pop();
                a.zip(b).map(|(a, b)| Operands::Binary(a, b))
            }
        };
        operands.ok_or_else(|| stack_underflow(required, available))
    }

    /// Put operands back in the order they were originally pushed.
    pub fn restore(&mut self, operands: Operands) {
        match operands {
            Operands::Unary(a) => self.items.push(a),
            Operands::Binary(a, b) => self.items.extend([a, b]),
        }
    }
}

impl FromIterator<Value> for OperandStack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
