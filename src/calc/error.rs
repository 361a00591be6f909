#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// An enum to represent possible errors while converting or evaluating an
/// expression
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    /// A character that is neither a digit, a decimal point, a parenthesis nor
    /// an operator.
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),
    /// A binary operator reached with fewer than two values on the stack.
    #[error("Not enough operands for operation {0}")]
    NotEnoughOperands(char),
    /// Evaluation finished with anything other than exactly one value.
    #[error("Invalid expression")]
    InvalidExpression,
    /// Right-hand side of `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// An RPN token that is neither a number nor an operator.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

impl CalcError {
    /// Returns true for errors raised by arithmetic itself rather than by a
    /// malformed expression.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }
}
