#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # rpncalc
//! ## Introduction
//!
//! Converts infix arithmetic to Reverse Polish Notation and evaluates it,
//! either interactively or one expression at a time.
//!
//! ## Installation
//!
//! Type `cargo install --path .` in a checkout and it should compile and
//! install `rpncalc` on your system.

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use rpncalc::{
    CalcError, Repl, Rpn,
    calc::{evaluate, infix_to_rpn, operator_table},
    config,
    format::format_number,
    info::BuildInfo,
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Start an interactive session
    Repl,
    /// Convert and evaluate one expression
    Eval {
        /// print JSON instead of text
        json:       bool,
        /// the infix expression
        expression: String,
    },
    /// Convert one expression without evaluating it
    Convert(String),
    /// Evaluate RPN tokens directly
    Rpn(Vec<String>),
    /// Print the operator reference table
    Operators,
    /// Print a JSON description of the build
    Info,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses an infix expression
    fn e() -> impl Parser<String> {
        positional("EXPRESSION").help("Infix expression, e.g. \"(2 + 3) * 4\"")
    }

    let repl = pure(Cmd::Repl)
        .to_options()
        .command("repl")
        .help("Start an interactive session (the default)");

    let json = long("json")
        .help("Print the evaluation as JSON")
        .switch();
    let expression = e();
    let eval = construct!(Cmd::Eval { json, expression })
        .to_options()
        .command("eval")
        .help("Convert an expression to RPN and evaluate it");

    let convert = construct!(Cmd::Convert(e()))
        .to_options()
        .command("convert")
        .help("Convert an expression to RPN");

    let tokens = positional::<String>("TOKEN")
        .help("RPN tokens, e.g. 2 3 + 4 *")
        .some("expected at least one RPN token");
    let rpn = construct!(Cmd::Rpn(tokens))
        .to_options()
        .command("rpn")
        .help("Evaluate an expression already written in RPN");

    let operators = pure(Cmd::Operators)
        .to_options()
        .command("operators")
        .help("List supported operators and their precedence");

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Prints a JSON description of how this binary was built");

    let cmd = construct!([repl, eval, convert, rpn, operators, info]).fallback(Cmd::Repl);

    cmd.to_options()
        .descr("Infix to Reverse Polish Notation calculator")
        .run()
}

/// Reports a calculation error on stderr and returns a failing exit code.
fn report(e: CalcError) -> ExitCode {
    eprintln!("{} {e}", "Error:".red().bold());
    ExitCode::FAILURE
}

fn main() -> Result<ExitCode> {
    dotenv().ok();

    let cfg = config::ensure_initialized().context("Failed to load configuration")?;

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(fmt)
        .with(cfg.log_level())
        .init();
    cfg.report_fallbacks();

    let cmd = options();
    tracing::debug!("running {cmd:?}");

    let code = match cmd {
        Cmd::Repl => {
            let stdin = io::stdin();
            Repl::from(&*cfg).run(stdin.lock(), io::stdout().lock())?;
            ExitCode::SUCCESS
        }
        Cmd::Eval { json, expression } => match evaluate(&expression) {
            Ok(evaluation) if json => {
                let out = serde_json::to_string_pretty(&evaluation)
                    .context("Failed to serialize evaluation")?;
                println!("{out}");
                ExitCode::SUCCESS
            }
            Ok(evaluation) => {
                if cfg.show_rpn() {
                    println!("RPN: {}", evaluation.rpn);
                }
                println!("Result: {}", evaluation.formatted_result());
                ExitCode::SUCCESS
            }
            Err(e) => report(e),
        },
        Cmd::Convert(expression) => match infix_to_rpn(&expression) {
            Ok(rpn) => {
                println!("{rpn}");
                ExitCode::SUCCESS
            }
            Err(e) => report(e),
        },
        Cmd::Rpn(tokens) => {
            match tokens.join(" ").parse::<Rpn>().and_then(|rpn| rpn.evaluate()) {
                Ok(value) => {
                    println!("{}", format_number(value));
                    ExitCode::SUCCESS
                }
                Err(e) => report(e),
            }
        }
        Cmd::Operators => {
            println!("{}", operator_table());
            ExitCode::SUCCESS
        }
        Cmd::Info => {
            println!("{}", BuildInfo::current().to_json()?);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
