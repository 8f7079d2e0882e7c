#![deny(missing_docs)]
//! Logging front end for the job board crates.
//!
//! Parser warnings about skipped records and load summaries go through the
//! `board_*` macros below, so the binary decides in one place where they
//! end up. Tests call [`initialize_for_tests`] to see them.

/// Finest detail; the binary only shows it with `-vvv`.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Diagnostics such as each dispatched message or why a record failed
/// field mapping.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Load progress such as file size and accepted job count.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// A recoverable problem, for example a job entry that was skipped.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// A failure the user has to act on, such as an unreadable job file.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Routes board log output to the test harness terminal.
///
/// Every test may call it; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Skipped-record warnings are the interesting part, debug shows per-load details too.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
