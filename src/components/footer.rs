//! Page footer.

use luxe_pages::{Component, ElementView, IntoView, NavLink, View};

use crate::view_id::ViewId;

/// Contact details shown in the footer and on the booking page.
pub const CONTACT_EMAIL: &str = "info@luxeinteriors.com";
/// Studio phone.
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
/// Studio address.
pub const CONTACT_LOCATION: &str = "Dubai Design District, UAE";

const SOCIAL: [(&str, &str); 4] = [
	("Instagram", "https://instagram.com"),
	("Behance", "https://behance.net"),
	("WhatsApp", "https://wa.me/15551234567"),
	("Email", "mailto:info@luxeinteriors.com"),
];

/// Static footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl Component for Footer {
	fn render(&self) -> View {
		let brand = ElementView::new("div")
			.attr("class", "footer__brand")
			.child(NavLink::to(ViewId::Home, "LUXE INTERIORS"))
			.child(ElementView::new("p").child(
				"Creating extraordinary living spaces that reflect your unique style and elevate your lifestyle.",
			));

		let contact = ElementView::new("div")
			.attr("class", "footer__contact")
			.child(ElementView::new("h3").child("CONTACT"))
			.child(
				ElementView::new("a")
					.attr("href", format!("mailto:{}", CONTACT_EMAIL))
					.child(CONTACT_EMAIL),
			)
			.child(ElementView::new("p").child(CONTACT_PHONE))
			.child(ElementView::new("p").child(CONTACT_LOCATION));

		let social = ElementView::new("div")
			.attr("class", "footer__social")
			.child(ElementView::new("h3").child("FOLLOW US"))
			.children(SOCIAL.iter().map(|(label, href)| {
				ElementView::new("a")
					.attr("href", *href)
					.attr("aria-label", *label)
					.attr("rel", "noopener")
					.child(*label)
			}));

		ElementView::new("footer")
			.attr("class", "footer")
			.child(brand)
			.child(contact)
			.child(social)
			.child(
				ElementView::new("p")
					.attr("class", "footer__copyright")
					.child("© 2025 Luxe Interiors. All rights reserved."),
			)
			.into_view()
	}
}
