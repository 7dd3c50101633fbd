//! Integration tests for the fragment router
//!
//! These tests drive the public router API end to end:
//! 1. Seeding the state from the initial fragment
//! 2. In-app navigation and the resulting history
//! 3. Back/forward synchronization through the listener
//! 4. Re-rendering through state observers and the view registry

use luxe_pages::component::View;
use luxe_pages::router::{
	AddressBar, MemoryAddressBar, NavLink, Navigator, Route, ViewRegistry,
};
use luxe_pages::Component;
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
	Overview,
	Pricing,
	Faq,
}

impl Route for Section {
	const ALL: &'static [Self] = &[Section::Overview, Section::Pricing, Section::Faq];
	const DEFAULT: Self = Section::Overview;

	fn id(&self) -> &'static str {
		match self {
			Section::Overview => "overview",
			Section::Pricing => "pricing",
			Section::Faq => "faq",
		}
	}
}

fn registry() -> ViewRegistry<Section, ()> {
	ViewRegistry::new()
		.register(Section::Overview, |_| View::text("Overview"))
		.register(Section::Pricing, |_| View::text("Pricing"))
}

#[rstest]
fn test_navigation_history_and_rendering() {
	let navigator: Navigator<Section, _> =
		Navigator::new(MemoryAddressBar::with_fragment("#overview"));
	let registry = registry();
	let rendered = Rc::new(RefCell::new(Vec::new()));
	navigator.state().observe({
		let rendered = Rc::clone(&rendered);
		let registry = Rc::new(registry);
		move |section| {
			rendered
				.borrow_mut()
				.push(registry.select(section, &()).render_to_string())
		}
	});
	let _listener = navigator.listen();

	navigator.navigate("pricing");
	navigator.navigate("faq");
	navigator.address().run_pending();

	assert_eq!(
		navigator.address().history(),
		vec!["#overview", "#pricing", "#faq"]
	);
	// Faq has no view of its own and renders the default one.
	assert_eq!(*rendered.borrow(), vec!["Pricing", "Overview"]);
}

#[rstest]
fn test_back_forward_round_trip() {
	let navigator: Navigator<Section, _> = Navigator::new(MemoryAddressBar::new());
	let _listener = navigator.listen();

	navigator.navigate_to(Section::Pricing);
	navigator.navigate_to(Section::Faq);
	let writes = navigator.address().write_count();

	assert!(navigator.address().back());
	assert_eq!(navigator.current(), Section::Pricing);
	assert!(navigator.address().back());
	// The initial entry has no fragment; the state stays where it was.
	assert_eq!(navigator.current(), Section::Pricing);
	assert!(navigator.address().forward());
	assert_eq!(navigator.current(), Section::Pricing);
	assert!(navigator.address().forward());
	assert_eq!(navigator.current(), Section::Faq);

	assert_eq!(navigator.address().write_count(), writes);
}

#[rstest]
fn test_links_target_route_ids() {
	let html = NavLink::to(Section::Faq, "FAQ").render().render_to_string();
	assert!(html.contains("href=\"#faq\""));
	assert!(Section::is_valid("faq"));
}

#[rstest]
fn test_pending_echo_after_navigate_changes_nothing() {
	let navigator: Navigator<Section, _> = Navigator::new(MemoryAddressBar::new());
	let notifications = Rc::new(RefCell::new(0));
	navigator.state().observe({
		let notifications = Rc::clone(&notifications);
		move |_| *notifications.borrow_mut() += 1
	});
	let _listener = navigator.listen();

	navigator.navigate("faq");
	assert_eq!(navigator.address().run_pending(), 1);

	assert_eq!(navigator.current(), Section::Faq);
	assert_eq!(navigator.address().fragment(), "faq");
	assert_eq!(*notifications.borrow(), 1);
}
