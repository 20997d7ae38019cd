//! Operators
//!
//! The full operator set of the calculator, split by arity. Every operator
//! is identified by its source-level symbol.

/// How many operands an operator pops from the stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Number of operands consumed.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "addition (a + b)",
            Self::Sub => "subtraction (a - b)",
            Self::Mul => "multiplication (a * b)",
            Self::Div => "division (a / b)",
            Self::Pow => "power (a ^ b)",
        }
    }
}

/// Unary functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Fib,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 5] = [Self::Sqrt, Self::Sin, Self::Cos, Self::Tan, Self::Fib];

    /// Returns the source-level symbol for this function.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Fib => "fib",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sqrt => "square root",
            Self::Sin => "sine, argument in degrees",
            Self::Cos => "cosine, argument in degrees",
            Self::Tan => "tangent, argument in degrees",
            Self::Fib => "n-th Fibonacci number (fib n)",
        }
    }
}

/// Any operator the calculator knows.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operator {
    /// Every operator, binary first, in help-text order.
    pub const ALL: [Operator; 10] = [
        Self::Binary(BinaryOp::Add),
        Self::Binary(BinaryOp::Sub),
        Self::Binary(BinaryOp::Mul),
        Self::Binary(BinaryOp::Div),
        Self::Binary(BinaryOp::Pow),
        Self::Unary(UnaryOp::Sqrt),
        Self::Unary(UnaryOp::Sin),
        Self::Unary(UnaryOp::Cos),
        Self::Unary(UnaryOp::Tan),
        Self::Unary(UnaryOp::Fib),
    ];

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.as_symbol(),
            Self::Unary(op) => op.as_symbol(),
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }

    pub const fn arity(self) -> Arity {
        match self {
            Self::Binary(_) => Arity::Binary,
            Self::Unary(_) => Arity::Unary,
        }
    }

    /// One-line description for the help text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Binary(op) => op.description(),
            Self::Unary(op) => op.description(),
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_symbol())
    }
}
