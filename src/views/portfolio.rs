//! Portfolio gallery page.

use luxe_pages::{ElementView, IntoView, View};
use luxe_store::Project;

use super::page;
use crate::action::Action;
use crate::app::SiteState;
use crate::components::action_button;
use crate::gallery::{GalleryState, Lightbox, LoadState, ProjectFilter};
use crate::view_id::ViewId;

fn filters(gallery: &GalleryState) -> ElementView {
	ElementView::new("div")
		.attr("class", "filters")
		.children(ProjectFilter::ALL.iter().map(|filter| {
			let active = *filter == gallery.filter();
			action_button(
				Action::Filter(*filter),
				if active { "filter filter--active" } else { "filter" },
			)
			.attr_if(active, "aria-pressed", "true")
			.child(filter.label())
		}))
}

fn card(index: usize, project: &Project) -> ElementView {
	let meta = ElementView::new("div")
		.attr("class", "project-card__meta")
		.child(
			ElementView::new("p")
				.attr("class", "project-card__type")
				.child(project.project_type.to_uppercase()),
		)
		.child(ElementView::new("h3").child(project.title.clone()))
		.child(ElementView::new("p").child(project.location.clone()))
		.child(
			project
				.completion_date
				.clone()
				.map(|date| ElementView::new("p").attr("class", "project-card__date").child(date)),
		);

	action_button(Action::Open(index), "project-card")
		.child(
			ElementView::new("img")
				.attr("src", project.image_url.clone())
				.attr("alt", project.title.clone()),
		)
		.child(meta)
}

fn listing(gallery: &GalleryState) -> ElementView {
	let body = match gallery.load_state() {
		LoadState::Idle | LoadState::Loading => ElementView::new("p")
			.attr("class", "status")
			.child("Loading projects..."),
		LoadState::Failed(message) => ElementView::new("p")
			.attr("class", "status status--error")
			.attr("role", "alert")
			.child(message.clone()),
		LoadState::Loaded => {
			let visible = gallery.visible();
			if visible.is_empty() {
				ElementView::new("p")
					.attr("class", "status")
					.attr("data-empty", "true")
					.child(GalleryState::EMPTY_MESSAGE)
			} else {
				ElementView::new("div")
					.attr("class", "project-grid")
					.children(visible.into_iter().enumerate().map(|(i, p)| card(i, p)))
			}
		}
	};

	ElementView::new("div").attr("class", "listing").child(body)
}

fn lightbox(lightbox: &Lightbox) -> ElementView {
	let project = lightbox.project();
	let multiple = lightbox.total() > 1;

	ElementView::new("div")
		.attr("class", "lightbox")
		.attr("role", "dialog")
		.attr("aria-label", project.title.clone())
		.child(
			action_button(Action::Close, "lightbox__close")
				.attr("aria-label", "Close")
				.child("✕"),
		)
		.child(
			multiple.then(|| {
				action_button(Action::Prev, "lightbox__prev")
					.attr("aria-label", "Previous image")
					.child("‹")
			}),
		)
		.child(
			ElementView::new("img")
				.attr("src", lightbox.image().to_string())
				.attr("alt", project.title.clone()),
		)
		.child(
			multiple.then(|| {
				action_button(Action::Next, "lightbox__next")
					.attr("aria-label", "Next image")
					.child("›")
			}),
		)
		.child(
			ElementView::new("div")
				.attr("class", "lightbox__caption")
				.child(ElementView::new("h3").child(project.title.clone()))
				.child(ElementView::new("p").child(project.description.clone()))
				.child(
					ElementView::new("p")
						.attr("class", "lightbox__counter")
						.child(lightbox.caption()),
				),
		)
}

/// Renders the gallery page.
pub fn render(site: &SiteState) -> View {
	let gallery = &site.gallery;

	page(ViewId::Portfolio)
		.child(
			ElementView::new("header")
				.attr("class", "page-header")
				.child(ElementView::new("h1").child("Our Portfolio"))
				.child(ElementView::new("p").child(
					"Explore our collection of luxury residential projects, each one a testament to exceptional design and craftsmanship.",
				)),
		)
		.child(filters(gallery))
		.child(listing(gallery))
		.child(gallery.lightbox().map(lightbox))
		.into_view()
}
