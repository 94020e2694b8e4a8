#![deny(missing_docs)]
//! Logging front-end for pulsemon.
//!
//! Library crates log through the `pulse_*` macros so they never name a
//! backend; the binary picks one at startup. Tests call
//! [`initialize_for_tests`] to see server and drop-target diagnostics.

/// Per-pulse detail, e.g. which peer connected.
#[macro_export]
macro_rules! pulse_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Session and drop internals useful when chasing a lost update.
#[macro_export]
macro_rules! pulse_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Session lifecycle: opened, completed, closed.
#[macro_export]
macro_rules! pulse_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Recoverable trouble such as a lost pulse or a failed accept.
#[macro_export]
macro_rules! pulse_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Failures that end a session early.
#[macro_export]
macro_rules! pulse_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Routes log output to the terminal for test runs.
///
/// Debug builds log at debug level. Later calls leave the first logger in place.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
