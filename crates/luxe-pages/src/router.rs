//! Client-side fragment router.
//!
//! The active view is serialized verbatim as the URL fragment (`#portfolio`),
//! which makes every view deep-linkable and lets the browser's back/forward
//! buttons move between views.
//!
//! State flows in two one-directional paths:
//!
//! - in-app navigation: [`Navigator::navigate`] writes the fragment first, then
//!   scrolls to the top, then assigns the [`NavigationState`];
//! - browser navigation: the [`NavigationListener`] returned by
//!   [`Navigator::listen`] assigns the state from the new fragment without
//!   writing the URL back.
//!
//! Only the navigator writes the state, so leaf views receive a navigate
//! callback (or render [`NavLink`]s) instead of a mutable handle.

mod address;
mod components;
mod navigator;
mod registry;
mod route;
mod state;

pub use address::{AddressBar, FragmentListener, MemoryAddressBar, Subscription, parse_fragment};
pub use components::{NAVIGATE_ATTR, NavLink, navigate_target};
pub use navigator::{InvalidFragmentPolicy, NavigationListener, Navigator};
pub use registry::{ViewFactory, ViewRegistry};
pub use route::Route;
pub use state::{NavigationState, ObserverId};

#[cfg(target_arch = "wasm32")]
pub use address::BrowserAddressBar;
