//! Convenient macros for application messaging and logging.
//!
//! The macros route every user-facing message through one switch: in debug
//! mode the text becomes a `tracing` event, otherwise it is printed plainly.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`TASKTIME_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check runs once and is cached for the lifetime of the process.
//!
//! ## Output Routing
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │   Debug Mode    │    │   Output        │
//! │   msg_info!()   │───▶│   Detection     │───▶│   Routing       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!           tracing::info!()         println!()/eprintln!()
//! ```
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error!`**: ❌ prefix, stderr
//! - **`msg_debug!`**: 🔍 prefix, debug mode only
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an
//!   `anyhow::Error` carrying the message
//!
//! The time engine itself (`time`, `schedule`, `duration`, `formatter`) never
//! uses these macros; only the database and command layers talk to the user.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKTIME_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Routes one formatted line either to `tracing` or to a standard stream.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $print:ident, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($($arg)+);
        } else {
            $print!($($arg)+);
        }
    };
}

/// Prints a general message; `true` pads it with blank lines.
///
/// ```rust,no_run
/// use tasktime::msg_print;
/// use tasktime::libs::messages::Message;
///
/// msg_print!(Message::HolidaysHeader, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "\n✅ {}\n", $msg)
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "\n❌ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "\n⚠️ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "\nℹ️ {}\n", $msg)
    };
}

/// Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` carrying the message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
