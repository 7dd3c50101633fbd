//! Top navigation bar.

use luxe_pages::{Component, ElementView, IntoView, NavLink, Route, View};

use super::action_button;
use crate::action::Action;
use crate::view_id::ViewId;

/// Visual treatment of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTheme {
	/// Transparent over the home hero.
	Overlay,
	/// Dark, once the home page is scrolled.
	Dimmed,
	/// White bar on every other view.
	Solid,
}

impl NavTheme {
	/// Theme for `view`, given whether the page is scrolled past the hero.
	pub fn for_view(view: ViewId, scrolled: bool) -> Self {
		match (view, scrolled) {
			(ViewId::Home, false) => NavTheme::Overlay,
			(ViewId::Home, true) => NavTheme::Dimmed,
			_ => NavTheme::Solid,
		}
	}

	/// CSS modifier.
	pub fn class(&self) -> &'static str {
		match self {
			NavTheme::Overlay => "navbar navbar--overlay",
			NavTheme::Dimmed => "navbar navbar--dimmed",
			NavTheme::Solid => "navbar navbar--solid",
		}
	}
}

/// The navbar. Reads the current view; never changes it.
#[derive(Debug, Clone, Copy)]
pub struct Navbar {
	current: ViewId,
	menu_open: bool,
	scrolled: bool,
}

impl Navbar {
	/// Brand text.
	pub const BRAND: &'static str = "LUXE INTERIORS";

	/// Navbar for `current`.
	pub fn new(current: ViewId) -> Self {
		Self {
			current,
			menu_open: false,
			scrolled: false,
		}
	}

	/// Shows the mobile menu.
	pub fn menu_open(mut self, open: bool) -> Self {
		self.menu_open = open;
		self
	}

	/// Page scrolled past the hero.
	pub fn scrolled(mut self, scrolled: bool) -> Self {
		self.scrolled = scrolled;
		self
	}

	/// Theme in effect.
	pub fn theme(&self) -> NavTheme {
		NavTheme::for_view(self.current, self.scrolled)
	}

	fn links(&self, class: &'static str) -> Vec<NavLink> {
		ViewId::ALL
			.iter()
			.map(|view| {
				NavLink::to(*view, view.label())
					.class(class)
					.active(*view == self.current)
			})
			.collect()
	}
}

impl Component for Navbar {
	fn render(&self) -> View {
		let theme = self.theme();

		let bar = ElementView::new("div")
			.attr("class", "navbar__inner")
			.child(NavLink::to(ViewId::DEFAULT, Self::BRAND).class("navbar__brand"))
			.child(
				ElementView::new("div")
					.attr("class", "navbar__links")
					.children(self.links("navbar__link")),
			)
			.child(
				action_button(Action::ToggleMenu, "navbar__toggle")
					.attr("aria-label", "Toggle menu")
					.attr("aria-expanded", if self.menu_open { "true" } else { "false" })
					.child(if self.menu_open { "✕" } else { "☰" }),
			);

		let mobile = self.menu_open.then(|| {
			ElementView::new("div")
				.attr("class", "navbar__mobile")
				.attr("data-menu", "open")
				.children(self.links("navbar__mobile-link"))
		});

		ElementView::new("nav")
			.attr("class", theme.class())
			.child(bar)
			.child(mobile)
			.into_view()
	}
}
