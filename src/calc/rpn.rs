#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::Serialize;

use super::{error::CalcError, eval::evaluate_rpn, parsers::rpn, token::RpnToken};
use crate::constants::RPN_SEPARATOR;

/// An expression in Reverse Polish Notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rpn(Vec<RpnToken>);

impl Rpn {
    /// The tokens in evaluation order.
    pub fn tokens(&self) -> &[RpnToken] {
        &self.0
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tokens in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RpnToken> {
        self.0.iter()
    }

    /// Returns each token as its text.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// Evaluates the sequence. See [fn@crate::calc::eval::evaluate_rpn].
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        evaluate_rpn(self.tokens())
    }

    /// Appends a token.
    pub(crate) fn push(&mut self, token: RpnToken) {
        self.0.push(token);
    }
}

impl Display for Rpn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(RPN_SEPARATOR))
    }
}

impl FromStr for Rpn {
    type Err = CalcError;

    /// Splits on whitespace; operands are not validated until evaluation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = rpn::rpn_tokens(s).map_err(|_| CalcError::InvalidExpression)?;
        Ok(raw.iter().map(|t| RpnToken::classify(t)).collect())
    }
}

impl FromIterator<RpnToken> for Rpn {
    fn from_iter<I: IntoIterator<Item = RpnToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Rpn {
    type IntoIter = std::slice::Iter<'a, RpnToken>;
    type Item = &'a RpnToken;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
