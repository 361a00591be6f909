use std::io::Cursor;

use rpncalc::{Repl, SessionStats, config::ConfigState};

fn run_session(repl: &Repl, input: &str) -> (String, SessionStats) {
    let mut out = Vec::new();
    let stats = repl
        .run(Cursor::new(input.to_string()), &mut out)
        .expect("run session");
    (String::from_utf8(out).expect("utf8 output"), stats)
}

#[test]
fn prints_banner_and_results() {
    let (out, stats) = run_session(&Repl::default(), "(2 + 3) * 4 - 5 / 2\nexit\n");

    assert!(out.starts_with("Example: (2 + 3) * 4 - 5 / 2\nType 'exit' to quit\n"));
    assert!(out.contains("\nEnter expression: RPN: 2 3 + 4 * 5 2 / -\nResult: 17.5\n"));
    assert_eq!(
        stats,
        SessionStats {
            evaluated: 1,
            failed:    0,
        }
    );
}

#[test]
fn exit_is_case_insensitive_and_stops_reading() {
    let (out, stats) = run_session(&Repl::default(), "  EXIT  \n2+2\n");
    assert!(!out.contains("Result"));
    assert_eq!(stats, SessionStats::default());
}

#[test]
fn blank_lines_are_skipped() {
    let (out, stats) = run_session(&Repl::default(), "\n   \n1+1\n");
    assert_eq!(out.matches("Enter expression: ").count(), 4);
    assert!(out.contains("Result: 2.0"));
    assert_eq!(stats.evaluated, 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let (out, stats) = run_session(&Repl::default(), "3*4");
    assert!(out.contains("RPN: 3 4 *\nResult: 12.0\n"));
    assert_eq!(stats.evaluated, 1);
}

#[test]
fn conversion_errors_skip_the_rpn_line() {
    let (out, stats) = run_session(&Repl::default(), "2 + a\n(1+2\nexit\n");
    assert!(out.contains("Enter expression: Error: Invalid character: a\n"));
    assert!(out.contains("Enter expression: Error: Mismatched parentheses\n"));
    assert!(!out.contains("RPN:"));
    assert_eq!(stats.failed, 2);
}

#[test]
fn evaluation_errors_follow_the_rpn_line() {
    let (out, stats) = run_session(&Repl::default(), "5/0\n2+\nexit\n");
    assert!(out.contains("RPN: 5 0 /\nError: Division by zero\n"));
    assert!(out.contains("RPN: 2 +\nError: Not enough operands for operation +\n"));
    assert_eq!(
        stats,
        SessionStats {
            evaluated: 0,
            failed:    2,
        }
    );
}

#[test]
fn builder_overrides_prompt_exit_and_rpn_line() {
    let repl = Repl::builder()
        .prompt("> ")
        .exit_command("quit")
        .show_rpn(false)
        .build();
    let (out, stats) = run_session(&repl, "2^3\nexit\nquit\n");

    assert!(out.contains("Type 'quit' to quit\n"));
    assert!(out.contains("\n> Result: 8.0\n"));
    assert!(out.contains("\n> Error: Invalid character: e\n"));
    assert!(!out.contains("RPN:"));
    assert_eq!(stats.evaluated, 1);
    assert_eq!(stats.failed, 1);
}

#[test]
fn session_follows_configuration() {
    let cfg = ConfigState::from_lookup(|key| match key {
        "RPNCALC_PROMPT" => Some("calc> ".to_string()),
        "RPNCALC_SHOW_RPN" => Some("false".to_string()),
        _ => None,
    });
    let (out, _) = run_session(&Repl::from(&cfg), "1+1\n");
    assert!(out.contains("\ncalc> Result: 2.0\n"));
    assert!(!out.contains("RPN:"));
}
