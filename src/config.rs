#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{Arc, Mutex, OnceLock};

use anyhow::{Result, anyhow};
use tracing::metadata::LevelFilter;

use crate::constants::{
    DEFAULT_EXIT_COMMAND, DEFAULT_LOG_LEVEL, DEFAULT_PROMPT, EXIT_COMMAND_ENV, LOG_ENV, PROMPT_ENV,
    SHOW_RPN_ENV,
};

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Prompt printed before each interactive line.
    prompt:       String,
    /// Word that ends an interactive session.
    exit_command: String,
    /// Whether the converted RPN is printed alongside results.
    show_rpn:     bool,
    /// Maximum tracing level emitted.
    log_level:    LevelFilter,
    /// Values that were ignored, waiting to be logged.
    fallbacks:    Vec<String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ConfigState {
    /// Construct a configuration instance from the process environment.
    fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construct a configuration instance from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults; each fallback is kept
    /// as a note for [`ConfigState::report_fallbacks`], since this usually runs
    /// before logging is set up.
    ///
    /// * `lookup`: returns the raw value for an environment key, if set
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut fallbacks = Vec::new();

        let prompt = lookup(PROMPT_ENV).unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let exit_command = lookup(EXIT_COMMAND_ENV)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_EXIT_COMMAND.to_string());

        let show_rpn = match lookup(SHOW_RPN_ENV) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                fallbacks.push(format!(
                    "Ignoring {SHOW_RPN_ENV}={raw:?}; expected true or false"
                ));
                true
            }),
            None => true,
        };

        let log_level = read_level(lookup(LOG_ENV), &mut fallbacks);

        Self {
            prompt,
            exit_command,
            show_rpn,
            log_level,
            fallbacks,
        }
    }

    /// Returns the interactive prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the word that ends an interactive session.
    pub fn exit_command(&self) -> &str {
        &self.exit_command
    }

    /// Returns whether the RPN form is printed.
    pub fn show_rpn(&self) -> bool {
        self.show_rpn
    }

    /// Returns the configured tracing level filter.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Returns a note for every value that was ignored in favor of its
    /// default.
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Emits each fallback note as a warning. Call once a subscriber is
    /// installed.
    pub fn report_fallbacks(&self) {
        for note in &self.fallbacks {
            tracing::warn!("{note}");
        }
    }
}

/// Parses common spellings of a boolean flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a tracing level filter, falling back to the default level when the
/// value is missing or unrecognised.
fn read_level(raw: Option<String>, fallbacks: &mut Vec<String>) -> LevelFilter {
    let default = DEFAULT_LOG_LEVEL.parse().unwrap_or(LevelFilter::WARN);
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(format!("Ignoring {LOG_ENV}={value:?}; not a log level"));
            default
        }),
        None => default,
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let mut guard = slot()
        .lock()
        .map_err(|_| anyhow!("config slot poisoned"))?;
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = Arc::new(ConfigState::new());
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io::Write,
        sync::{Arc, Mutex},
    };

    use super::*;

    /// Collects everything a test subscriber writes.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ConfigState::default();
        assert_eq!(cfg.prompt(), "Enter expression: ");
        assert_eq!(cfg.exit_command(), "exit");
        assert!(cfg.show_rpn());
        assert_eq!(cfg.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = ConfigState::from_lookup(lookup_from(&[
            (PROMPT_ENV, "> "),
            (EXIT_COMMAND_ENV, " quit "),
            (SHOW_RPN_ENV, "off"),
            (LOG_ENV, "DEBUG"),
        ]));
        assert_eq!(cfg.prompt(), "> ");
        assert_eq!(cfg.exit_command(), "quit");
        assert!(!cfg.show_rpn());
        assert_eq!(cfg.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = ConfigState::from_lookup(lookup_from(&[
            (EXIT_COMMAND_ENV, "   "),
            (SHOW_RPN_ENV, "maybe"),
            (LOG_ENV, "loud"),
        ]));
        assert_eq!(cfg.exit_command(), "exit");
        assert!(cfg.show_rpn());
        assert_eq!(cfg.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn fallbacks_are_recorded_not_logged_early() {
        let cfg = ConfigState::from_lookup(lookup_from(&[
            (SHOW_RPN_ENV, "maybe"),
            (LOG_ENV, "loud"),
        ]));
        assert_eq!(cfg.fallbacks().len(), 2);
        assert!(cfg.fallbacks()[0].contains("RPNCALC_SHOW_RPN=\"maybe\""));
        assert!(cfg.fallbacks()[1].contains("RPNCALC_LOG=\"loud\""));
        assert!(ConfigState::default().fallbacks().is_empty());
    }

    #[test]
    fn fallbacks_are_logged_once_a_subscriber_exists() {
        let cfg = ConfigState::from_lookup(lookup_from(&[
            (SHOW_RPN_ENV, "maybe"),
            (LOG_ENV, "loud"),
        ]));

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(cfg.log_level())
            .finish();
        tracing::subscriber::with_default(subscriber, || cfg.report_fallbacks());

        let out = captured.text();
        assert!(out.contains("WARN"), "{out}");
        assert!(out.contains("Ignoring RPNCALC_SHOW_RPN=\"maybe\"; expected true or false"));
        assert!(out.contains("Ignoring RPNCALC_LOG=\"loud\"; not a log level"));
    }
}
