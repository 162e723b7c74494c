use crate::rpneval::EvalError;
use std::fmt;
use std::str::FromStr;

/// Operators understood by a postfix calculator. Each one is recognized in the
/// input by its token, and rendered back to text with the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
    Power,
    /// Remainder of truncated division, the sign follows the dividend.
    Modulo,
}

impl Operator {
    /// Every operator in declaration order.
    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::SquareRoot,
        Operator::Power,
        Operator::Modulo,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::SquareRoot => "sqrt",
            Operator::Power => "^",
            Operator::Modulo => "%",
        }
    }

    /// Number of operands popped from the stack.
    pub fn arity(self) -> usize {
        match self {
            Operator::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Whether the token must be escaped before it goes into a regex alternation.
    /// Only the alphabetic `sqrt` can be embedded verbatim.
    pub fn needs_escape(self) -> bool {
        self != Operator::SquareRoot
    }

    /// Exact, case-sensitive match against the canonical tokens.
    pub fn lookup(token: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.token() == token)
    }

    /// Operands come in left-to-right order. Division and modulo by zero, or the
    /// root of a negative number, give the float result (inf / NaN) instead of failing.
    /// Returns None if the number of operands doesn't match the arity.
    pub fn compute(self, operands: &[f64]) -> Option<f64> {
        let result = match (self, operands) {
            (Operator::SquareRoot, &[x]) => x.sqrt(),
            (Operator::Add, &[l, r]) => l + r,
            (Operator::Subtract, &[l, r]) => l - r,
            (Operator::Multiply, &[l, r]) => l * r,
            (Operator::Divide, &[l, r]) => l / r,
            (Operator::Power, &[l, r]) => l.powf(r),
            (Operator::Modulo, &[l, r]) => l % r,
            _ => return None,
        };
        Some(result)
    }
}

pub fn token_of(op: Operator) -> &'static str {
    op.token()
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Operator::lookup(token).ok_or_else(|| EvalError::UnknownOperator(token.to_string()))
    }
}
