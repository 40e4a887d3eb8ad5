#![deny(missing_docs)]
//! Shared logging setup for the webstash workspace.
//!
//! The engine logs through the `log` facade only; this crate owns the
//! concrete `simplelog` terminal backend so the binary and the test suites
//! initialize it the same way.

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Initializes the terminal logger for the CLI binary.
///
/// `verbose` bumps the filter from `Info` to `Debug`. Returns an error only
/// if a global logger was already installed, which the caller may ignore.
pub fn initialize_for_app(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
}

/// Initializes a terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized, so
/// every test can call it without coordinating.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
