//! Logging for navigation events.
//!
//! The macros in this module forward to a single sink that picks the backend
//! for the current target:
//!
//! | Macro | WASM | Native |
//! |-------|------|--------|
//! | `debug_log!` | `console.debug` (debug builds + `trace-navigation`) | `tracing::debug!` |
//! | `info_log!` | `console.info` (debug builds) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug builds) | `tracing::warn!` |
//! | `error_log!` | `console.error` | `tracing::error!` |
//!
//! Native events are emitted under the `simple_router` target so a subscriber
//! can filter them with `RUST_LOG=simple_router=debug`.
//!
//! ## Example
//!
//! ```ignore
//! use simple_router::{info_log, error_log};
//!
//! info_log!("Mounted {:?} for {}", route, path);
//! error_log!("popstate handling failed: {}", err);
//! ```

use std::fmt;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	/// Step-by-step navigation detail.
	Debug,
	/// A completed navigation.
	Info,
	/// Recoverable oddities, such as a fallback render.
	Warn,
	/// Failures that could not be returned to a caller.
	Error,
}

/// Writes one record to the target's log backend.
///
/// Use the `*_log!` macros instead of calling this directly.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
	let enabled = match level {
		Level::Debug => cfg!(all(debug_assertions, feature = "trace-navigation")),
		Level::Info | Level::Warn => cfg!(debug_assertions),
		Level::Error => true,
	};
	if !enabled {
		return;
	}
	let message = wasm_bindgen::JsValue::from_str(&args.to_string());
	match level {
		Level::Debug => web_sys::console::debug_1(&message),
		Level::Info => web_sys::console::info_1(&message),
		Level::Warn => web_sys::console::warn_1(&message),
		Level::Error => web_sys::console::error_1(&message),
	}
}

/// Writes one record to the target's log backend.
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
	match level {
		Level::Debug => tracing::debug!(target: "simple_router", "{}", args),
		Level::Info => tracing::info!(target: "simple_router", "{}", args),
		Level::Warn => tracing::warn!(target: "simple_router", "{}", args),
		Level::Error => tracing::error!(target: "simple_router", "{}", args),
	}
}

/// Logs a debug message.
#[macro_export]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Debug, format_args!($($arg)*))
	};
}

/// Logs an info message.
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Info, format_args!($($arg)*))
	};
}

/// Logs a warning message.
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Warn, format_args!($($arg)*))
	};
}

/// Logs an error message.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Error, format_args!($($arg)*))
	};
}

#[cfg(test)]
mod tests {
	use super::Level;
	use crate::{debug_log, error_log, info_log, warn_log};
	use rstest::rstest;

	#[rstest]
	fn test_logging_macros_accept_format_args() {
		debug_log!("resolving {}", "/foo");
		info_log!("mounted {:?}", Some("foo"));
		warn_log!("fallback for {}", "/baz");
		error_log!("failed: {}", 42);
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("debug");
		info_log!("info");
		warn_log!("warn");
		error_log!("error");
	}

	#[rstest]
	fn test_level_ordering() {
		assert!(Level::Debug < Level::Info);
		assert!(Level::Warn < Level::Error);
	}
}
