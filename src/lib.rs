//! # Luxe Interiors
//!
//! The Luxe Interiors site: five views switched by the URL fragment, a
//! portfolio gallery read from a hosted record store and a consultation
//! booking form that writes back to it.
//!
//! ## Layout
//!
//! - [`view_id`]: the routed views and their fragment identifiers
//! - [`app`]: the root composer, owning navigation and per-view state
//! - [`views`]: one render function per view
//! - [`components`]: navbar and footer
//! - [`gallery`], [`booking`]: view state that outlives a render
//! - [`action`]: UI events encoded in `data-action` attributes
//!
//! On `wasm32` the crate also exports a `#[wasm_bindgen(start)]` entry point
//! that mounts the site into `#app`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use luxe::{App, ViewId};
//! use luxe_pages::MemoryAddressBar;
//! use luxe_store::UnconfiguredStore;
//!
//! let app = App::new(MemoryAddressBar::with_fragment("#services"), Rc::new(UnconfiguredStore));
//! assert_eq!(app.current(), ViewId::Services);
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod booking;
pub mod components;
pub mod gallery;
pub mod view_id;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod client;

pub use action::Action;
pub use app::{App, SiteState};
pub use booking::{Field, ReservationForm, SubmitState};
pub use gallery::{GalleryState, Lightbox, LoadState, ProjectFilter};
pub use view_id::{UnknownView, ViewId};
