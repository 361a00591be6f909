#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Serialize, Serializer};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use super::error::CalcError;
use crate::constants::{ADDITIVE_PRECEDENCE, EXPONENT_PRECEDENCE, MULTIPLICATIVE_PRECEDENCE};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl Operator {
    /// Every supported operator, lowest precedence first.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Returns the operator written as `symbol`, if there is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Returns the operator for a one-character token such as `"+"`.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }

    /// The operator as it is written, e.g. `"+"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    /// The character this operator is written as.
    pub fn symbol(self) -> char {
        // every spelling is a single ASCII byte
        char::from(self.as_str().as_bytes()[0])
    }

    /// A human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
            Operator::Power => "exponentiation",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => ADDITIVE_PRECEDENCE,
            Operator::Multiply | Operator::Divide => MULTIPLICATIVE_PRECEDENCE,
            Operator::Power => EXPONENT_PRECEDENCE,
        }
    }

    /// Whether `self`, already on the operator stack, must be emitted before
    /// `incoming` is pushed.
    ///
    /// Equal precedence pops, so every operator (`^` included) groups to the
    /// left.
    pub fn binds_before(self, incoming: Operator) -> bool {
        self.precedence() >= incoming.precedence()
    }

    /// Computes `a <op> b`.
    ///
    /// * `a`: the left operand (pushed first)
    /// * `b`: the right operand (top of the stack)
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Operator::Power => a.powf(b),
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the operator reference table.
#[derive(Tabled)]
pub struct OperatorRow {
    /// * `symbol`: the operator character
    #[tabled(rename = "Symbol")]
    symbol:        char,
    /// * `name`: what the operator computes
    #[tabled(rename = "Name")]
    name:          &'static str,
    /// * `precedence`: higher binds tighter
    #[tabled(rename = "Precedence")]
    precedence:    u8,
    /// * `associativity`: grouping of equal-precedence chains
    #[tabled(rename = "Associativity")]
    associativity: &'static str,
}

impl From<Operator> for OperatorRow {
    fn from(op: Operator) -> Self {
        Self {
            symbol:        op.symbol(),
            name:          op.name(),
            precedence:    op.precedence(),
            associativity: "left",
        }
    }
}

/// Renders every operator as a reference table.
pub fn operator_table() -> String {
    let rows: Vec<OperatorRow> = Operator::ALL.into_iter().map(OperatorRow::from).collect();

    Table::new(&rows)
        .with(Panel::header("Supported operators"))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
