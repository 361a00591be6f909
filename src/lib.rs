//! # rpncalc
//!
//! An infix calculator that converts expressions to Reverse Polish Notation
//! with the shunting-yard algorithm and evaluates them on a value stack.
//!
//! ```
//! let evaluation = rpncalc::calc::evaluate("(2 + 3) * 4").unwrap();
//! assert_eq!(evaluation.rpn.to_string(), "2 3 + 4 *");
//! assert_eq!(evaluation.result, 20.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Conversion and evaluation of arithmetic expressions
pub mod calc;
/// Environment-driven runtime configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Display formatting for results
pub mod format;
/// Static description of how the binary was built
pub mod info;
/// Interactive line-oriented sessions
pub mod repl;

pub use calc::{CalcError, Evaluation, Rpn, evaluate, evaluate_rpn, infix_to_rpn};
pub use repl::{Repl, SessionStats};
