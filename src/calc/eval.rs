#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use super::{convert::infix_to_rpn, error::CalcError, operator::Operator, rpn::Rpn};
use crate::format::format_number;

/// Parses an operand written with digits, signs, a decimal point and an
/// exponent. Spelled-out values such as `inf` or `nan` are not operands.
fn parse_operand(token: &str) -> Option<f64> {
    if !token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    token.parse().ok()
}

/// Evaluates a sequence of RPN tokens with a value stack.
///
/// Number tokens are decimal literals `f64` parses (`2.5`, `-3`, `1e3`), but
/// not `inf`, `nan` or `infinity`; operator tokens are the single characters
/// `+ - * / ^`. Exactly one value must remain at the end.
///
/// * `tokens`: the RPN tokens in evaluation order
pub fn evaluate_rpn<S: AsRef<str>>(tokens: &[S]) -> Result<f64, CalcError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();

        if let Some(value) = parse_operand(token) {
            stack.push(value);
            continue;
        }

        let op = Operator::from_token(token)
            .ok_or_else(|| CalcError::InvalidToken(token.to_string()))?;

        let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
            return Err(CalcError::NotEnoughOperands(op.symbol()));
        };

        let value = op.apply(a, b)?;
        tracing::trace!("{a} {op} {b} = {value}");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => {
            tracing::debug!("evaluation left {} values on the stack", stack.len());
            Err(CalcError::InvalidExpression)
        }
    }
}

/// The outcome of converting and evaluating one infix expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// * `expression`: the input as given
    pub expression: String,
    /// * `rpn`: the converted form
    pub rpn:        Rpn,
    /// * `result`: the computed value
    pub result:     f64,
}

impl Evaluation {
    /// The result in display form, e.g. `5.0`.
    pub fn formatted_result(&self) -> String {
        format_number(self.result)
    }
}

/// Converts `expression` to RPN and evaluates it.
pub fn evaluate(expression: &str) -> Result<Evaluation, CalcError> {
    let rpn = infix_to_rpn(expression)?;
    let result = rpn.evaluate()?;

    Ok(Evaluation {
        expression: expression.to_string(),
        rpn,
        result,
    })
}
