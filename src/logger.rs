//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output shown only with `--verbose`
//! - `warn!` macro for non-fatal diagnostics on stderr
//! - `log_error` for fatal diagnostics on stderr
//!
//! # Example
//!
//! ```ignore
//! log!("importmap"; "generated {} ({} routes)", path.display(), count);
//! debug!("load"; "streaming {}", path.display());
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a warning to stderr, keeping stdout clean for `--dry` output
///
/// # Usage
/// ```ignore
/// warn!("routes"; "duplicate path `{}`", path);
/// ```
#[macro_export]
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::warn($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix to stdout.
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stdout);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Log a warning with a highlighted module prefix to stderr.
pub fn warn(module: &str, message: &str) {
    let prefix = paint(&format!("[{module}]"), Style::new().bright_magenta().bold(), Stream::Stderr);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Print an error diagnostic to stderr.
///
/// The full `anyhow` chain is printed, one cause per line.
pub fn log_error(err: &anyhow::Error) {
    let prefix = colorize_prefix("error", Stream::Stderr);
    let caused_by = paint("caused by:", Style::new().dimmed(), Stream::Stderr);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {err}").ok();
    for cause in err.chain().skip(1) {
        writeln!(stderr, "  {caused_by} {cause}").ok();
    }
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, stream: Stream) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "importmap" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    paint(&format!("[{module}]"), style, stream)
}

/// Style `text` if `stream` supports color (honors `--color`).
pub(crate) fn paint(text: &str, style: Style, stream: Stream) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
