#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    error::CalcError,
    operator::Operator,
    parsers::lexer,
    rpn::Rpn,
    token::{InfixToken, RpnToken},
};

/// An entry on the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An open parenthesis waiting for its match
    Paren,
    /// An operator waiting for its right operand
    Op(Operator),
}

/// Converts an infix expression to Reverse Polish Notation.
///
/// All whitespace is removed before tokenizing, so `"2 3"` reads as `23`.
/// Operand counts are not checked here; `"2+"` converts to `2 +` and fails
/// during evaluation.
///
/// * `expression`: the infix expression, e.g. `(2 + 3) * 4`
pub fn infix_to_rpn(expression: &str) -> Result<Rpn, CalcError> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens = lexer::infix_tokens(&compact).map_err(|e| {
        tracing::debug!("lexer rejected `{compact}`: {e}");
        CalcError::InvalidExpression
    })?;

    let mut output = Rpn::default();
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            InfixToken::Number(n) => output.push(RpnToken::Number(n)),
            InfixToken::LeftParen => pending.push(Pending::Paren),
            InfixToken::RightParen => loop {
                match pending.pop() {
                    Some(Pending::Op(op)) => output.push(RpnToken::Operator(op)),
                    Some(Pending::Paren) => break,
                    None => return Err(CalcError::MismatchedParentheses),
                }
            },
            InfixToken::Operator(incoming) => {
                while let Some(&Pending::Op(top)) = pending.last() {
                    if !top.binds_before(incoming) {
                        break;
                    }
                    pending.pop();
                    output.push(RpnToken::Operator(top));
                }
                pending.push(Pending::Op(incoming));
            }
            InfixToken::Invalid(c) => return Err(CalcError::InvalidCharacter(c)),
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op) => output.push(RpnToken::Operator(op)),
            Pending::Paren => return Err(CalcError::MismatchedParentheses),
        }
    }

    tracing::debug!("converted `{expression}` to `{output}`");
    Ok(output)
}
