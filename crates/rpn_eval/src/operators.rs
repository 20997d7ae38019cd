//! Binary operator implementations.
//!
//! Direct enum-based dispatch. The operator set is fixed, so a `match` is
//! used rather than a table of function pointers.

use rpn_ir::{BinaryOp, Value};

use crate::errors::{EvalError, EvalResult};

/// Evaluate `a op b`, where `a` is the deeper operand.
pub fn evaluate_binary(a: Value, b: Value, op: BinaryOp) -> EvalResult<Value> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => checked_div(a, b),
        BinaryOp::Pow => Ok(a.powf(b)),
    }
}

/// Division with zero guard. `-0.0` counts as zero.
#[inline]
fn checked_div(a: Value, b: Value) -> EvalResult<Value> {
    if b == 0.0 {
        Err(EvalError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}
