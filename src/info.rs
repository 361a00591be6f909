#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use serde::Serialize;

use crate::constants::{EDITION, LINT_CONFIG};

/// Minimum and target language level the crate is built for.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageLevel {
    /// Rust edition, e.g. `2024`
    pub edition:      &'static str,
    /// Minimum supported compiler version
    pub rust_version: &'static str,
}

/// A dependency pulled in for a specific purpose.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dependency {
    /// Crate name
    pub name:    &'static str,
    /// Version requirement
    pub version: &'static str,
    /// Where the dependency is used, e.g. `test`
    pub scope:   &'static str,
}

/// Static description of how this binary was built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildInfo {
    /// Package name
    pub name:         &'static str,
    /// Package version
    pub version:      &'static str,
    /// Tools involved in building and checking the crate
    pub tooling:      Vec<&'static str>,
    /// Registries dependencies are fetched from
    pub repositories: Vec<&'static str>,
    /// Test-only dependencies
    pub dependencies: Vec<Dependency>,
    /// Language level
    pub language:     LanguageLevel,
    /// Path to the lint configuration, relative to the manifest
    pub lint_config:  &'static str,
    /// Command that runs the test suite
    pub test_runner:  &'static str,
}

impl BuildInfo {
    /// Returns the build description for the running binary.
    pub fn current() -> Self {
        Self {
            name:         env!("CARGO_PKG_NAME"),
            version:      env!("CARGO_PKG_VERSION"),
            tooling:      vec!["rustc", "clippy", "cargo test"],
            repositories: vec!["crates.io"],
            dependencies: vec![Dependency {
                name:    "proptest",
                version: "1.4",
                scope:   "test",
            }],
            language:     LanguageLevel {
                edition:      EDITION,
                rust_version: env!("CARGO_PKG_RUST_VERSION"),
            },
            lint_config:  LINT_CONFIG,
            test_runner:  "cargo test",
        }
    }

    /// Renders the description as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize build info")
    }
}
