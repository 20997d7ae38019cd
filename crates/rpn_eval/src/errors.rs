//! Error types for token evaluation.
//!
//! Every failure the engine can produce is one [`EvalError`] variant. The
//! shell matches on the variant instead of parsing messages. Factory
//! functions exist for the variants that carry data.

/// Result of evaluating a token or applying an operator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed failure of a single token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The token is not a literal, a command, or a known operator symbol.
    #[error("unknown operator '{token}'")]
    UnknownOperator { token: String },

    /// `/` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `sqrt` of a negative number.
    #[error("cannot take the square root of a negative number")]
    NegativeOperand,

    /// `fib` of a negative or non-integral number.
    #[error("fibonacci requires a non-negative integer")]
    InvalidFibonacciInput,

    /// Fewer operands on the stack than the operator consumes.
    #[error("stack underflow: need {required} {}, have {available}", operand_word(.required))]
    StackUnderflow { required: usize, available: usize },
}

impl EvalError {
    /// Whether the error was raised by the operator function itself, after
    /// its operands were popped. Underflow and unknown tokens fail before the
    /// stack is touched.
    pub fn is_computation(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::NegativeOperand | Self::InvalidFibonacciInput
        )
    }
}

fn operand_word(count: &usize) -> &'static str {
    if *count == 1 {
        "operand"
    } else {
        "operands"
    }
}

/// Create an error for a token nothing recognizes.
#[cold]
pub fn unknown_operator(token: &str) -> EvalError {
    EvalError::UnknownOperator {
        token: token.to_string(),
    }
}

/// Create a stack underflow error.
#[cold]
pub fn stack_underflow(required: usize, available: usize) -> EvalError {
    EvalError::StackUnderflow {
        required,
        available,
    }
}
