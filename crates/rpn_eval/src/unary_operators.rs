//! Unary function implementations.
//!
//! Trigonometric functions take their argument in degrees. `fib` walks the
//! recurrence iteratively, so its cost is linear in `n` and its stack use is
//! constant.

use rpn_ir::{UnaryOp, Value};

use crate::errors::{EvalError, EvalResult};

/// Evaluate a unary function using direct pattern matching.
pub fn evaluate_unary(a: Value, op: UnaryOp) -> EvalResult<Value> {
    match op {
        UnaryOp::Sqrt => checked_sqrt(a),
        UnaryOp::Sin => Ok(a.to_radians().sin()),
        UnaryOp::Cos => Ok(a.to_radians().cos()),
        UnaryOp::Tan => Ok(a.to_radians().tan()),
        UnaryOp::Fib => fibonacci(a),
    }
}

#[inline]
fn checked_sqrt(a: Value) -> EvalResult<Value> {
    if a < 0.0 {
        Err(EvalError::NegativeOperand)
    } else {
        Ok(a.sqrt())
    }
}

/// The `n`-th Fibonacci number: `fib(0) = 0`, `fib(1) = 1`,
/// `fib(n) = fib(n - 1) + fib(n - 2)`.
///
/// `n` must be a non-negative integral value. NaN and infinities are not
/// integral. Past `fib(1476)` the result no longer fits in an `f64` and is
/// `inf`; the loop stops there instead of counting up to `n`.
pub fn fibonacci(n: Value) -> EvalResult<Value> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(EvalError::InvalidFibonacciInput);
    }

    let (mut current, mut next) = (0.0_f64, 1.0_f64);
    let mut remaining = n;
    while remaining > 0.0 && current.is_finite() {
        (current, next) = (next, current + next);
        remaining -= 1.0;
    }
    Ok(current)
}

#[cfg(test)]
mod tests;
