//! Router components for navigation.

use super::route::Route;
use crate::component::{Component, ElementView, IntoView, View};
use std::borrow::Cow;

/// Attribute marking an element whose click navigates in-app.
pub const NAVIGATE_ATTR: &str = "data-navigate";

/// A link to another view.
///
/// Renders a real `href="#id"` so the link works without scripting; the
/// client intercepts clicks on [`NAVIGATE_ATTR`] and calls the navigator.
///
/// # Example
///
/// ```ignore
/// use luxe_pages::router::NavLink;
///
/// let link = NavLink::to(ViewId::Portfolio, "VIEW ALL PROJECTS").class("cta");
/// ```
#[derive(Debug, Clone)]
pub struct NavLink {
	target: &'static str,
	content: Cow<'static, str>,
	class: Option<Cow<'static, str>>,
	active: bool,
}

impl NavLink {
	/// Creates a link to `route`.
	pub fn to<R: Route>(route: R, content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			target: route.id(),
			content: content.into(),
			class: None,
			active: false,
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Marks the link as pointing at the current view.
	pub fn active(mut self, active: bool) -> Self {
		self.active = active;
		self
	}

	/// Returns the target route identifier.
	pub fn target(&self) -> &'static str {
		self.target
	}

	/// Returns whether the link is marked active.
	pub fn is_active(&self) -> bool {
		self.active
	}
}

impl Component for NavLink {
	fn render(&self) -> View {
		let mut el = ElementView::new("a")
			.attr("href", format!("#{}", self.target))
			.attr(NAVIGATE_ATTR, self.target);

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		el.attr_if(self.active, "aria-current", "page")
			.child(self.content.clone().into_owned())
			.into_view()
	}
}

impl IntoView for NavLink {
	fn into_view(self) -> View {
		self.render()
	}
}

/// Extracts the navigation target from a clicked element's attribute value.
///
/// Returns `None` for absent or blank values; validity of the target is left
/// to the navigator.
pub fn navigate_target(attr: Option<&str>) -> Option<&str> {
	attr.map(str::trim).filter(|target| !target.is_empty())
}
