//! Component system.
//!
//! Views are plain trees ([`View`]) built with [`ElementView`] and converted
//! from common types through [`IntoView`]. Reusable pieces of UI implement
//! [`Component`].

mod into_view;
mod r#trait;

pub use into_view::{ElementView, Elements, IntoView, MountError, View};
pub use r#trait::Component;
