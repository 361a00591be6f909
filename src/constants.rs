#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Precedence of `+` and `-`
pub const ADDITIVE_PRECEDENCE: u8 = 1;

/// Precedence of `*` and `/`
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 2;

/// Precedence of `^`
pub const EXPONENT_PRECEDENCE: u8 = 3;

/// Separator placed between tokens when an RPN sequence is displayed
pub const RPN_SEPARATOR: &str = " ";

/// Sample expression shown when an interactive session starts
pub const EXAMPLE_EXPRESSION: &str = "(2 + 3) * 4 - 5 / 2";

/// Prompt printed before each line is read
pub const DEFAULT_PROMPT: &str = "Enter expression: ";

/// Word that ends an interactive session, compared case-insensitively
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Tracing level used when `RPNCALC_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the prompt
pub const PROMPT_ENV: &str = "RPNCALC_PROMPT";

/// Environment variable overriding the exit command
pub const EXIT_COMMAND_ENV: &str = "RPNCALC_EXIT_COMMAND";

/// Environment variable toggling the `RPN:` line
pub const SHOW_RPN_ENV: &str = "RPNCALC_SHOW_RPN";

/// Environment variable holding the tracing level filter
pub const LOG_ENV: &str = "RPNCALC_LOG";

/// Rust edition the crate is compiled with
pub const EDITION: &str = "2024";

/// Path, relative to the manifest, of the lint configuration
pub const LINT_CONFIG: &str = "clippy.toml";
