//! Convenient macros for application messaging and logging.
//!
//! User-facing output (results, prompts, confirmations) always goes to the
//! console, whatever `RUST_LOG` says. Only diagnostics go through
//! `tracing`, and those are printed to stderr by the subscriber.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when **`ATTRITION_DEBUG`** is set. It enables
//! `msg_debug!` diagnostics and raises the default log level. The check
//! runs once and is cached for the rest of the process.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display on stdout
//! - **`msg_success!`**: Success notifications with ✅ prefix on stdout
//! - **`msg_info!`**: Informational messages with ℹ️ prefix on stdout
//! - **`msg_error!`**: Error messages with ❌ prefix, written to stderr
//! - **`msg_debug!`**: Debug-only diagnostics with 🔍 prefix via `tracing`
//!
//! ## Usage Examples
//!
//! ```rust
//! use attrition::{msg_error, msg_success};
//! use attrition::libs::messages::Message;
//!
//! msg_success!(Message::TerminationRecorded);
//! msg_error!(Message::InvalidChoice);
//! ```

use std::sync::OnceLock;

/// Environment variable that turns debug mode on.
pub const DEBUG_ENV: &str = "ATTRITION_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `ATTRITION_DEBUG` is set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| debug_mode_from(|key| std::env::var(key).ok()))
}

/// Debug mode as seen through `lookup`; `RUST_LOG` plays no part.
#[doc(hidden)]
pub fn debug_mode_from(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(DEBUG_ENV).is_some()
}

/// Prints a general message to stdout.
///
/// Pass `true` as the second argument to surround the message with blank
/// lines, which is how section headers are printed.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg)
    };
    ($msg:expr, true) => {
        println!("\n{}\n", $msg)
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("✅ {}", $msg)
    };
    ($msg:expr, true) => {
        println!("\n✅ {}\n", $msg)
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("❌ {}", $msg)
    };
    ($msg:expr, true) => {
        eprintln!("\n❌ {}\n", $msg)
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        println!("ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        println!("\nℹ️ {}\n", $msg)
    };
}

/// Debug-only diagnostic with 🔍 prefix; silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
