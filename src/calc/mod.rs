#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Infix to RPN conversion (shunting-yard).
pub mod convert;
/// Errors raised while converting or evaluating.
pub mod error;
/// Stack evaluation of RPN sequences.
pub mod eval;
/// Binary operators and their precedence.
pub mod operator;
/// Grammars for infix and RPN input.
pub mod parsers;
/// The RPN sequence type.
pub mod rpn;
/// Token types shared by the lexer, converter and evaluator.
pub mod token;

pub use convert::infix_to_rpn;
pub use error::CalcError;
pub use eval::{Evaluation, evaluate, evaluate_rpn};
pub use operator::{Operator, operator_table};
pub use rpn::Rpn;
pub use token::{InfixToken, RpnToken};
