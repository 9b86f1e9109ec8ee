//! Convenient macros for application messaging and logging.
//!
//! The macros switch between two output modes:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix
//! - **Debug mode**: the same text routed through `tracing`, so it is
//!   interleaved with the structured events emitted by the database layer
//!
//! Debug mode is on when either `TASKED_DEBUG` or `RUST_LOG` is set.
//!
//! ```rust
//! use tasked::{msg_info, msg_success};
//! use tasked::libs::messages::Message;
//!
//! msg_success!(Message::TaskUpdated(1));
//! msg_info!(Message::NoChangesProvided);
//! ```

use std::sync::OnceLock;

/// Environment variable enabling debug output.
pub const DEBUG_ENV_VAR: &str = "TASKED_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled. The answer is computed once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message; silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
