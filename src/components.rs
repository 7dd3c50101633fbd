//! Persistent chrome around the routed body.

mod footer;
mod navbar;

pub use footer::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, Footer};
pub use navbar::{NavTheme, Navbar};

use luxe_pages::{ElementView, IntoView, View};

use crate::action::{ACTION_ATTR, Action};

/// A `<button type="button">` carrying `action`.
pub(crate) fn action_button(action: Action, class: &'static str) -> ElementView {
	ElementView::new("button")
		.attr("type", "button")
		.attr("class", class)
		.attr(ACTION_ATTR, action.to_string())
}

/// Centered section heading with the gold rule below it.
pub(crate) fn section_heading(title: &'static str, subtitle: Option<&'static str>) -> View {
	ElementView::new("header")
		.attr("class", "section-heading")
		.child(ElementView::new("h2").child(title))
		.child(subtitle.map(|text| ElementView::new("p").child(text)))
		.child(ElementView::new("div").attr("class", "rule"))
		.into_view()
}
