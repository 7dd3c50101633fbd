//! Services page.

use luxe_pages::{ElementView, IntoView, NavLink, View};

use super::page;
use crate::app::SiteState;
use crate::components::section_heading;
use crate::view_id::ViewId;

const SERVICES: [(&str, &str); 8] = [
	(
		"Complete Interior Design",
		"End-to-end design solutions from concept to completion, creating cohesive and luxurious living spaces tailored to your lifestyle.",
	),
	(
		"Space Planning",
		"Expert spatial analysis and layout design to optimize flow, functionality, and aesthetic appeal of every room.",
	),
	(
		"Color Consultation",
		"Professional color palette selection and material specification to create harmonious and sophisticated interiors.",
	),
	(
		"Lighting Design",
		"Strategic lighting plans combining ambient, task, and accent lighting to enhance mood and highlight architectural features.",
	),
	(
		"Furniture Selection",
		"Curated selection of high-end furniture pieces and custom designs that perfectly complement your space and lifestyle.",
	),
	(
		"Project Management",
		"Full project oversight from start to finish, coordinating contractors, vendors, and timelines to ensure seamless execution.",
	),
	(
		"3D Visualization",
		"Photorealistic 3D renderings and virtual walkthroughs to help you visualize the final result before construction begins.",
	),
	(
		"Styling & Accessories",
		"Final styling touches including art curation, accessories, textiles, and decorative elements that complete the look.",
	),
];

const PROCESS: [(&str, &str); 5] = [
	(
		"Consultation",
		"Initial meeting to understand your vision, requirements, and budget.",
	),
	(
		"Concept Design",
		"Development of design concepts, mood boards, and preliminary layouts.",
	),
	(
		"Design Development",
		"Detailed plans, 3D visualizations, and material specifications.",
	),
	(
		"Implementation",
		"Project execution with full coordination and quality control.",
	),
	(
		"Final Reveal",
		"Final styling and handover of your beautifully transformed space.",
	),
];

fn tile(title: &'static str, description: &'static str) -> ElementView {
	ElementView::new("article")
		.attr("class", "tile")
		.child(ElementView::new("h3").child(title))
		.child(ElementView::new("p").child(description))
}

/// Renders the services page.
pub fn render(_site: &SiteState) -> View {
	let steps = PROCESS.iter().enumerate().map(|(i, (title, description))| {
		ElementView::new("li")
			.attr("class", "step")
			.child(
				ElementView::new("span")
					.attr("class", "step__number")
					.child(format!("{:02}", i + 1)),
			)
			.child(ElementView::new("h3").child(*title))
			.child(ElementView::new("p").child(*description))
	});

	page(ViewId::Services)
		.child(
			ElementView::new("header")
				.attr("class", "page-header")
				.child(ElementView::new("h1").child("Our Services"))
				.child(ElementView::new("p").child(
					"Comprehensive interior design solutions tailored to create exceptional living spaces that reflect your unique style.",
				)),
		)
		.child(
			ElementView::new("div")
				.attr("class", "tile-grid")
				.children(SERVICES.iter().map(|(t, d)| tile(*t, *d))),
		)
		.child(section_heading(
			"Our Process",
			Some("A streamlined approach ensuring every project is executed flawlessly from concept to completion."),
		))
		.child(ElementView::new("ol").attr("class", "process").children(steps))
		.child(section_heading("Why Choose Us", None))
		.child(
			ElementView::new("div")
				.attr("class", "tile-grid")
				.child(tile(
					"Bespoke Design",
					"Every project is uniquely crafted to reflect your personal style and needs.",
				))
				.child(tile(
					"Expert Team",
					"Award-winning designers with over 15 years of luxury interior experience.",
				)),
		)
		.child(NavLink::to(ViewId::Reservation, "SCHEDULE A CONSULTATION").class("cta"))
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use luxe_pages::router::NAVIGATE_ATTR;
	use rstest::rstest;

	#[rstest]
	fn test_services_page() {
		let view = render(&SiteState::default());
		let text = view.text_content();

		assert!(text.contains("Space Planning"));
		assert!(text.contains("05Final Reveal"));
		assert_eq!(
			view.find_all_with_attr(NAVIGATE_ATTR)[0].get_attr(NAVIGATE_ATTR),
			Some("reservation")
		);
	}
}
