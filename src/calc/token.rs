#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Serialize, Serializer};

use super::operator::Operator;

/// A lexical unit of an infix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfixToken {
    /// Digits and decimal points exactly as written
    Number(String),
    /// A binary operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Anything else; rejected during conversion
    Invalid(char),
}

/// A single entry of an RPN sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnToken {
    /// An operand, kept as its source text
    Number(String),
    /// An operator applied to the two values below it
    Operator(Operator),
}

impl RpnToken {
    /// Classifies a raw token: single operator symbols become operators,
    /// everything else is treated as an operand.
    pub fn classify(raw: &str) -> Self {
        match Operator::from_token(raw) {
            Some(op) => RpnToken::Operator(op),
            None => RpnToken::Number(raw.to_string()),
        }
    }

    /// Returns true if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, RpnToken::Operator(_))
    }
}

impl AsRef<str> for RpnToken {
    fn as_ref(&self) -> &str {
        match self {
            RpnToken::Number(n) => n.as_str(),
            RpnToken::Operator(op) => op.as_str(),
        }
    }
}

impl Display for RpnToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Serialize for RpnToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}
