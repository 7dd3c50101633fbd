//! About page.

use luxe_pages::{ElementView, IntoView, NavLink, View};

use super::page;
use crate::app::SiteState;
use crate::components::section_heading;
use crate::view_id::ViewId;

const STORY: [&str; 3] = [
	"Founded in 2010, Luxe Interiors began with a simple vision: to transform ordinary spaces into extraordinary experiences. What started as a passion project has grown into one of the region's most sought-after interior design firms.",
	"With over 15 years of experience, we've had the privilege of designing hundreds of luxury residences, from intimate apartments to sprawling villas. Each project is an opportunity to push boundaries and create spaces that not only look stunning but feel like home.",
	"Our approach combines timeless elegance with contemporary flair, always tailored to reflect our clients' unique personalities and lifestyles. We believe that great design is invisible: it should enhance your life without demanding attention.",
];

const VALUES: [(&str, &str); 4] = [
	(
		"Passion",
		"We pour our heart into every project, treating each space as if it were our own.",
	),
	(
		"Excellence",
		"Unwavering commitment to quality and attention to detail in every element.",
	),
	(
		"Vision",
		"Understanding your dreams and translating them into stunning reality.",
	),
	(
		"Innovation",
		"Blending timeless elegance with cutting-edge design trends and technology.",
	),
];

const TEAM: [(&str, &str, &str); 3] = [
	(
		"Sarah Williams",
		"Founder & Lead Designer",
		"https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=600",
	),
	(
		"Michael Chen",
		"Senior Interior Architect",
		"https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=600",
	),
	(
		"Emma Rodriguez",
		"Creative Director",
		"https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=600",
	),
];

/// Renders the about page.
pub fn render(_site: &SiteState) -> View {
	let story = ElementView::new("div")
		.attr("class", "story")
		.child(
			ElementView::new("img")
				.attr(
					"src",
					"https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg?auto=compress&cs=tinysrgb&w=800",
				)
				.attr("alt", "Luxury Interior Design"),
		)
		.child(
			ElementView::new("div")
				.child(ElementView::new("h2").child("Our Story"))
				.children(STORY.iter().map(|p| ElementView::new("p").child(*p))),
		);

	let values = VALUES.iter().map(|(title, description)| {
		ElementView::new("article")
			.attr("class", "tile")
			.child(ElementView::new("h3").child(*title))
			.child(ElementView::new("p").child(*description))
	});

	let team = TEAM.iter().map(|(name, role, image)| {
		ElementView::new("figure")
			.attr("class", "member")
			.child(ElementView::new("img").attr("src", *image).attr("alt", *name))
			.child(
				ElementView::new("figcaption")
					.child(ElementView::new("h3").child(*name))
					.child(ElementView::new("p").child(*role)),
			)
	});

	page(ViewId::About)
		.child(
			ElementView::new("header")
				.attr("class", "page-header")
				.child(ElementView::new("h1").child("About Us"))
				.child(ElementView::new("p").child(
					"Crafting exceptional spaces where luxury meets livability.",
				)),
		)
		.child(story)
		.child(section_heading(
			"Our Philosophy",
			Some("At the heart of everything we do are four core principles that guide our work."),
		))
		.child(ElementView::new("div").attr("class", "tile-grid").children(values))
		.child(section_heading(
			"Meet Our Team",
			Some("A collective of talented designers dedicated to bringing your vision to life."),
		))
		.child(ElementView::new("div").attr("class", "team").children(team))
		.child(
			ElementView::new("div")
				.attr("class", "closing")
				.child(ElementView::new("h2").child("Let's Create Something Beautiful Together"))
				.child(ElementView::new("p").child(
					"Whether you're starting from scratch or reimagining an existing space, we're here to make the journey seamless and inspiring.",
				))
				.child(NavLink::to(ViewId::Reservation, "BOOK A CONSULTATION").class("cta")),
		)
		.into_view()
}
