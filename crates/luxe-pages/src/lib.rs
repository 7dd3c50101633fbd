//! Luxe Pages - WASM frontend primitives
//!
//! The building blocks the Luxe Interiors site is composed from. Everything
//! here compiles for both `wasm32-unknown-unknown` and native targets, so the
//! navigation core can be exercised in ordinary `cargo test` runs.
//!
//! ## Architecture
//!
//! - [`component`]: View tree (`View`, `ElementView`, `IntoView`) and the
//!   [`Component`] trait
//! - [`logging`]: `debug_log!`/`info_log!`/`warn_log!`/`error_log!` macros
//! - [`router`]: Fragment router (`#portfolio` style deep links) with a single
//!   writer of the navigation state
//!
//! ## Example
//!
//! ```ignore
//! use luxe_pages::router::{MemoryAddressBar, Navigator};
//!
//! let navigator: Navigator<ViewId, _> = Navigator::new(MemoryAddressBar::with_fragment("#services"));
//! assert_eq!(navigator.current(), ViewId::Services);
//!
//! let _listener = navigator.listen();
//! navigator.navigate("portfolio");
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod logging;
pub mod router;

pub use component::{Component, ElementView, IntoView, MountError, View};
pub use router::{
	AddressBar, InvalidFragmentPolicy, MemoryAddressBar, NavLink, NavigationListener,
	NavigationState, Navigator, Route, Subscription, ViewRegistry,
};

#[cfg(target_arch = "wasm32")]
pub use router::BrowserAddressBar;

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
