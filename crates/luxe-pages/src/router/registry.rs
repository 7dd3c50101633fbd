//! View registry.

use super::route::Route;
use crate::component::View;
use std::fmt;

/// Builds the body view for a route from the page context `Ctx`.
pub type ViewFactory<Ctx> = Box<dyn Fn(&Ctx) -> View>;

/// Fixed mapping from route to the view rendered for it.
///
/// Selection never fails: a route without a registered view renders the
/// default route's view, and an empty view when that is missing too.
pub struct ViewRegistry<R: Route, Ctx> {
	views: Vec<(R, ViewFactory<Ctx>)>,
}

impl<R: Route, Ctx> fmt::Debug for ViewRegistry<R, Ctx> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewRegistry")
			.field(
				"routes",
				&self.views.iter().map(|(route, _)| route).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl<R: Route, Ctx> Default for ViewRegistry<R, Ctx> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Route, Ctx> ViewRegistry<R, Ctx> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self { views: Vec::new() }
	}

	/// Registers the view for `route`, replacing any previous one.
	pub fn register<F>(mut self, route: R, factory: F) -> Self
	where
		F: Fn(&Ctx) -> View + 'static,
	{
		self.views.retain(|(registered, _)| *registered != route);
		self.views.push((route, Box::new(factory)));
		self
	}

	/// Returns true if `route` has its own view.
	pub fn contains(&self, route: R) -> bool {
		self.factory(route).is_some()
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.views.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.views.is_empty()
	}

	/// Renders the view for `route`.
	pub fn select(&self, route: R, ctx: &Ctx) -> View {
		match self.factory(route).or_else(|| self.factory(R::DEFAULT)) {
			Some(factory) => factory(ctx),
			None => View::Empty,
		}
	}

	fn factory(&self, route: R) -> Option<&ViewFactory<Ctx>> {
		self.views
			.iter()
			.find(|(registered, _)| *registered == route)
			.map(|(_, factory)| factory)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::route::test_routes::Page;
	use rstest::rstest;

	#[rstest]
	fn test_select_registered_view() {
		let registry: ViewRegistry<Page, ()> = ViewRegistry::new()
			.register(Page::Home, |_| View::text("Home"))
			.register(Page::Gallery, |_| View::text("Gallery"));

		assert_eq!(registry.select(Page::Gallery, &()).render_to_string(), "Gallery");
		assert_eq!(registry.len(), 2);
	}

	#[rstest]
	fn test_unmapped_route_falls_back_to_default() {
		let registry: ViewRegistry<Page, ()> =
			ViewRegistry::new().register(Page::Home, |_| View::text("Home"));

		assert!(!registry.contains(Page::Contact));
		assert_eq!(registry.select(Page::Contact, &()).render_to_string(), "Home");
	}

	#[rstest]
	fn test_empty_registry_renders_nothing() {
		let registry: ViewRegistry<Page, ()> = ViewRegistry::new();
		assert!(registry.is_empty());
		assert_eq!(registry.select(Page::Gallery, &()), View::Empty);
	}

	#[rstest]
	fn test_register_replaces_existing() {
		let registry: ViewRegistry<Page, ()> = ViewRegistry::new()
			.register(Page::Home, |_| View::text("Old"))
			.register(Page::Home, |_| View::text("New"));

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.select(Page::Home, &()).render_to_string(), "New");
	}

	#[rstest]
	fn test_factory_reads_context() {
		let registry: ViewRegistry<Page, String> = ViewRegistry::new()
			.register(Page::Gallery, |title: &String| View::text(title.clone()));

		let view = registry.select(Page::Gallery, &"Our Portfolio".to_string());
		assert_eq!(view.render_to_string(), "Our Portfolio");
	}
}
