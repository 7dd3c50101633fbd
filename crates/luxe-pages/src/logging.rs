//! Target-independent logging macros.
//!
//! On `wasm32` the macros write to the browser console. Elsewhere they emit
//! `tracing` events, so whichever subscriber the host or a test installs
//! receives them. Release builds compile them to nothing, though the
//! arguments are still type-checked.
//!
//! | Macro | WASM | Native | Extra condition |
//! |-------|------|--------|-----------------|
//! | `debug_log!` | `console.debug` | `tracing::debug!` | `debug-hooks` feature |
//! | `info_log!` | `console.info` | `tracing::info!` | |
//! | `warn_log!` | `console.warn` | `tracing::warn!` | |
//! | `error_log!` | `console.error` | `tracing::error!` | |
//!
//! ```ignore
//! use luxe_pages::{info_log, warn_log};
//!
//! info_log!("Mounted at #{}", view);
//! warn_log!("Ignoring record store settings: {}", error);
//! ```

#[doc(hidden)]
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! __log {
	($level:ident, $console:ident, $($arg:tt)*) => {
		$crate::__private::web_sys::console::$console(&::std::format!($($arg)*).into())
	};
}

#[doc(hidden)]
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! __log {
	($level:ident, $console:ident, $($arg:tt)*) => {
		$crate::__private::tracing::$level!($($arg)*)
	};
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! __log {
	($level:ident, $console:ident, $($arg:tt)*) => {{
		let _ = ::std::format_args!($($arg)*);
	}};
}

/// Debug message; also needs the `debug-hooks` feature.
#[macro_export]
#[cfg(feature = "debug-hooks")]
macro_rules! debug_log {
	($($arg:tt)*) => { $crate::__log!(debug, debug_1, $($arg)*) };
}

/// Debug message; also needs the `debug-hooks` feature.
#[macro_export]
#[cfg(not(feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = ::std::format_args!($($arg)*);
	}};
}

/// Info message.
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => { $crate::__log!(info, info_1, $($arg)*) };
}

/// Warning.
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => { $crate::__log!(warn, warn_1, $($arg)*) };
}

/// Error.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => { $crate::__log!(error, error_1, $($arg)*) };
}
