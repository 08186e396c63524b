#![deny(missing_docs)]
//! Shared logging utilities for the dashboard workspace.
//!
//! This crate provides the `dash_*` logging macros used by the core and the
//! app shell, a per-thread frame counter that the macros stamp on every line,
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current UI frame number.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Records the UI frame number for the current thread.
/// The app shell calls this once per repaint.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Returns the UI frame number recorded for the current thread, or 0 when
/// no frame has been recorded.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Logs a trace-level message, prefixed with the current frame number.
#[macro_export]
macro_rules! dash_trace {
    ($($arg:tt)*) => {{
        log::trace!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, prefixed with the current frame number.
#[macro_export]
macro_rules! dash_debug {
    ($($arg:tt)*) => {{
        log::debug!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, prefixed with the current frame number.
#[macro_export]
macro_rules! dash_info {
    ($($arg:tt)*) => {{
        log::info!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, prefixed with the current frame number.
#[macro_export]
macro_rules! dash_warn {
    ($($arg:tt)*) => {{
        log::warn!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, prefixed with the current frame number.
#[macro_export]
macro_rules! dash_error {
    ($($arg:tt)*) => {{
        log::error!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // A logger may already be set by another test in the same binary.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
