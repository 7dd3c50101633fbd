//! Routed body views.
//!
//! Each view is a plain function of the site state, registered against its
//! [`ViewId`]. Every page root carries `data-view="<id>"`.

pub mod about;
pub mod home;
pub mod portfolio;
pub mod reservation;
pub mod services;

use luxe_pages::{ElementView, Route, ViewRegistry};

use crate::app::SiteState;
use crate::view_id::ViewId;

/// Attribute naming the view a page root belongs to.
pub const VIEW_ATTR: &str = "data-view";

/// The fixed view table.
pub fn registry() -> ViewRegistry<ViewId, SiteState> {
	ViewRegistry::new()
		.register(ViewId::Home, home::render)
		.register(ViewId::Portfolio, portfolio::render)
		.register(ViewId::Services, services::render)
		.register(ViewId::About, about::render)
		.register(ViewId::Reservation, reservation::render)
}

pub(crate) fn page(view: ViewId) -> ElementView {
	ElementView::new("section")
		.attr("class", format!("page page--{}", view.id()))
		.attr(VIEW_ATTR, view.id())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_every_view_registered_and_tagged() {
		let registry = registry();
		let site = SiteState::default();

		assert_eq!(registry.len(), ViewId::ALL.len());
		for view in ViewId::ALL {
			let body = registry.select(*view, &site);
			assert!(
				body.find_by_attr(VIEW_ATTR, view.id()).is_some(),
				"{} page root missing",
				view
			);
		}
	}
}
