//! The site's routed views.

use std::fmt;
use std::str::FromStr;

use luxe_pages::Route;
use thiserror::Error;

/// One of the five navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
	/// Landing page.
	Home,
	/// Project gallery.
	Portfolio,
	/// Services and process.
	Services,
	/// Studio story and team.
	About,
	/// Consultation booking form.
	Reservation,
}

impl ViewId {
	/// Label shown in the navbar.
	pub fn label(&self) -> &'static str {
		match self {
			ViewId::Home => "Home",
			ViewId::Portfolio => "Portfolio",
			ViewId::Services => "Services",
			ViewId::About => "About",
			ViewId::Reservation => "Reservation",
		}
	}
}

impl Route for ViewId {
	const ALL: &'static [Self] = &[
		ViewId::Home,
		ViewId::Portfolio,
		ViewId::Services,
		ViewId::About,
		ViewId::Reservation,
	];
	const DEFAULT: Self = ViewId::Home;

	fn id(&self) -> &'static str {
		match self {
			ViewId::Home => "home",
			ViewId::Portfolio => "portfolio",
			ViewId::Services => "services",
			ViewId::About => "about",
			ViewId::Reservation => "reservation",
		}
	}
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// A string that names no view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
	type Err = UnknownView;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| UnknownView(s.to_string()))
	}
}
