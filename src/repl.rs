#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bon::Builder;

use crate::{
    calc::infix_to_rpn,
    config::ConfigState,
    constants::{DEFAULT_EXIT_COMMAND, DEFAULT_PROMPT, EXAMPLE_EXPRESSION},
    format::format_number,
};

/// Counters for one interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that produced a result
    pub evaluated: usize,
    /// Lines that produced an error
    pub failed:    usize,
}

#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
/// A line-oriented calculator session.
pub struct Repl {
    /// * `prompt`: printed before each line is read
    #[builder(default = DEFAULT_PROMPT.to_string())]
    prompt:       String,
    /// * `exit_command`: ends the session, compared case-insensitively
    #[builder(default = DEFAULT_EXIT_COMMAND.to_string())]
    exit_command: String,
    /// * `show_rpn`: print the converted form before the result
    #[builder(default = true)]
    show_rpn:     bool,
}

impl Default for Repl {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&ConfigState> for Repl {
    fn from(cfg: &ConfigState) -> Self {
        Self::builder()
            .prompt(cfg.prompt())
            .exit_command(cfg.exit_command())
            .show_rpn(cfg.show_rpn())
            .build()
    }
}

impl Repl {
    /// Runs the session until `input` is exhausted or the exit command is
    /// entered.
    ///
    /// * `input`: source of expressions, one per line
    /// * `output`: where prompts, results and errors are written
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<SessionStats> {
        let mut stats = SessionStats::default();

        writeln!(output, "Example: {EXAMPLE_EXPRESSION}").context("Failed to write banner")?;
        writeln!(output, "Type '{}' to quit", self.exit_command)
            .context("Failed to write banner")?;

        let mut line = String::new();
        loop {
            write!(output, "\n{}", self.prompt).context("Failed to write prompt")?;
            output.flush().context("Failed to flush prompt")?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read expression")?;
            if read == 0 {
                writeln!(output).context("Failed to write output")?;
                break;
            }

            let expression = line.trim();
            if expression.eq_ignore_ascii_case(&self.exit_command) {
                break;
            }
            if expression.is_empty() {
                continue;
            }

            if self.evaluate_line(expression, &mut output)? {
                stats.evaluated += 1;
            } else {
                stats.failed += 1;
            }
        }

        tracing::debug!(
            "session finished: {} evaluated, {} failed",
            stats.evaluated,
            stats.failed
        );
        Ok(stats)
    }

    /// Converts and evaluates one expression, writing the outcome. Returns
    /// whether a result was produced.
    fn evaluate_line<W: Write>(&self, expression: &str, output: &mut W) -> Result<bool> {
        let rpn = match infix_to_rpn(expression) {
            Ok(rpn) => rpn,
            Err(e) => {
                writeln!(output, "Error: {e}").context("Failed to write output")?;
                return Ok(false);
            }
        };

        if self.show_rpn {
            writeln!(output, "RPN: {rpn}").context("Failed to write output")?;
        }

        match rpn.evaluate() {
            Ok(value) => {
                writeln!(output, "Result: {}", format_number(value))
                    .context("Failed to write output")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(output, "Error: {e}").context("Failed to write output")?;
                Ok(false)
            }
        }
    }
}
