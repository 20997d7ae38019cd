//! Operator table.
//!
//! Knows each operator's arity and routes popped operands to the matching
//! evaluation function. Symbols are resolved earlier, during classification. The table is static: the operator set is closed, so
//! routing is a `match` over `(Operator, Operands)`.

use rpn_ir::{Arity, Operator, Value};

use crate::errors::{stack_underflow, EvalResult};
use crate::operators::evaluate_binary;
use crate::stack::Operands;
use crate::unary_operators::evaluate_unary;

#[derive(Clone, Copy, Debug, Default)]
pub struct OperatorTable;

impl OperatorTable {
    pub const fn new() -> Self {
        OperatorTable
    }

    /// How many operands `op` pops.
    pub fn arity(&self, op: Operator) -> Arity {
        op.arity()
    }

    /// Every operator in the table, binary first.
    pub fn operators(&self) -> impl Iterator<Item = Operator> {
        Operator::ALL.into_iter()
    }

    /// Apply `op` to operands already popped from the stack.
    ///
    /// The operands must match the operator's arity, which
    /// [`OperandStack::pop_operands`](crate::OperandStack::pop_operands)
    /// guarantees. A mismatch is reported as an underflow.
    pub fn apply(&self, op: Operator, operands: Operands) -> EvalResult<Value> {
        match (op, operands) {
            (Operator::Binary(op), Operands::Binary(a, b)) => evaluate_binary(a, b, op),
            (Operator::Unary(op), Operands::Unary(a)) => evaluate_unary(a, op),
            (op, operands) => Err(stack_underflow(
                op.arity().operand_count(),
                operands.count(),
            )),
        }
    }
}
