//! Landing page: hero carousel, studio stats, featured projects.

use luxe_pages::router::NAVIGATE_ATTR;
use luxe_pages::{ElementView, IntoView, NavLink, Route, View};
use luxe_store::{Project, ProjectQuery, StoreError};

use super::page;
use crate::action::Action;
use crate::app::SiteState;
use crate::components::{action_button, section_heading};
use crate::gallery::LoadState;
use crate::view_id::ViewId;

/// Hero backgrounds, cycled every [`SLIDE_INTERVAL_MS`].
pub const HERO_IMAGES: [&str; 4] = [
	"https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=1920",
	"https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg?auto=compress&cs=tinysrgb&w=1920",
	"https://images.pexels.com/photos/2635038/pexels-photo-2635038.jpeg?auto=compress&cs=tinysrgb&w=1920",
	"https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=1920",
];

/// Hero rotation period.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

const STATS: [(&str, &str); 3] = [
	("250+", "Projects Completed"),
	("15+", "Years Experience"),
	("500+", "Happy Clients"),
];

/// Hero position and the featured-project strip.
#[derive(Debug, Clone, Default)]
pub struct Showcase {
	slide: usize,
	load: LoadState,
	featured: Vec<Project>,
}

impl Showcase {
	/// Number of featured projects shown.
	pub const FEATURED_LIMIT: usize = 3;

	/// Query for the featured strip.
	pub fn query() -> ProjectQuery {
		ProjectQuery::new()
			.featured()
			.order_by_display_order()
			.limit(Self::FEATURED_LIMIT)
	}

	/// Current hero slide.
	pub fn slide(&self) -> usize {
		self.slide
	}

	/// Shows slide `index`, wrapping.
	pub fn show_slide(&mut self, index: usize) {
		self.slide = index % HERO_IMAGES.len();
	}

	/// Advances the hero.
	pub fn next_slide(&mut self) {
		self.show_slide(self.slide + 1);
	}

	/// Featured projects, once loaded.
	pub fn featured(&self) -> &[Project] {
		&self.featured
	}

	/// Load progress.
	pub fn load_state(&self) -> &LoadState {
		&self.load
	}

	/// Forgets a failed load of the featured strip.
	pub fn clear_failure(&mut self) {
		self.load.clear_failure();
	}

	/// Marks a load as started. Returns false if one is running or done.
	pub fn begin_load(&mut self) -> bool {
		if !self.load.can_start() {
			return false;
		}
		self.load = LoadState::Loading;
		true
	}

	/// Records the outcome. Failures hide the strip.
	pub fn finish_load(&mut self, result: Result<Vec<Project>, StoreError>) {
		match result {
			Ok(projects) => {
				self.featured = projects
					.into_iter()
					.filter(|p| p.featured)
					.take(Self::FEATURED_LIMIT)
					.collect();
				self.load = LoadState::Loaded;
			}
			Err(e) => {
				self.featured.clear();
				self.load = LoadState::Failed(e.to_string());
			}
		}
	}
}

fn hero(showcase: &Showcase) -> ElementView {
	let slides = HERO_IMAGES.iter().enumerate().map(|(index, image)| {
		ElementView::new("div")
			.attr(
				"class",
				if index == showcase.slide() {
					"hero__slide hero__slide--active"
				} else {
					"hero__slide"
				},
			)
			.attr("style", format!("background-image: url({})", image))
	});

	let dots = HERO_IMAGES.iter().enumerate().map(|(index, _)| {
		action_button(Action::Slide(index), "hero__dot")
			.attr("aria-label", format!("Show slide {}", index + 1))
			.attr_if(index == showcase.slide(), "aria-current", "true")
	});

	ElementView::new("div")
		.attr("class", "hero")
		.children(slides)
		.child(
			ElementView::new("div")
				.attr("class", "hero__content")
				.child(
					ElementView::new("h1")
						.child("Luxury Living ")
						.child(ElementView::new("span").attr("class", "accent").child("Redefined")),
				)
				.child(ElementView::new("p").child(
					"Transform your space into a masterpiece. From vision to reality, we craft bespoke interiors that inspire.",
				))
				.child(NavLink::to(ViewId::Reservation, "BOOK YOUR CONSULTATION").class("cta")),
		)
		.child(ElementView::new("div").attr("class", "hero__dots").children(dots))
}

fn stats() -> ElementView {
	ElementView::new("div")
		.attr("class", "stats")
		.children(STATS.iter().map(|(value, label)| {
			ElementView::new("div")
				.attr("class", "stat")
				.child(ElementView::new("h3").child(*value))
				.child(ElementView::new("p").child(*label))
		}))
}

fn featured_card(project: &Project) -> ElementView {
	ElementView::new("a")
		.attr("class", "project-card")
		.attr("href", format!("#{}", ViewId::Portfolio.id()))
		.attr(NAVIGATE_ATTR, ViewId::Portfolio.id())
		.child(
			ElementView::new("img")
				.attr("src", project.image_url.clone())
				.attr("alt", project.title.clone()),
		)
		.child(
			ElementView::new("p")
				.attr("class", "project-card__type")
				.child(project.project_type.clone()),
		)
		.child(ElementView::new("h3").child(project.title.clone()))
}

fn featured(showcase: &Showcase) -> Option<ElementView> {
	if showcase.featured().is_empty() {
		return None;
	}

	Some(
		ElementView::new("div")
			.attr("class", "featured")
			.child(section_heading("Featured Projects", None))
			.child(
				ElementView::new("div")
					.attr("class", "project-grid")
					.children(showcase.featured().iter().map(featured_card)),
			)
			.child(NavLink::to(ViewId::Portfolio, "VIEW ALL PROJECTS").class("cta cta--outline")),
	)
}

/// Renders the landing page.
pub fn render(site: &SiteState) -> View {
	page(ViewId::Home)
		.child(hero(&site.showcase))
		.child(stats())
		.child(featured(&site.showcase))
		.child(
			ElementView::new("div")
				.attr("class", "closing")
				.child(ElementView::new("h2").child("Ready to Transform Your Space?"))
				.child(ElementView::new("p").child(
					"Let's bring your vision to life with our expert design team.",
				))
				.child(NavLink::to(ViewId::Reservation, "START YOUR PROJECT").class("cta")),
		)
		.into_view()
}
