//! Property tests for site navigation
//!
//! Drives the site's navigator through an in-memory address bar and checks
//! the routing guarantees over generated inputs.

#![cfg(not(target_arch = "wasm32"))]

use luxe::ViewId;
use luxe_pages::{AddressBar, MemoryAddressBar, Navigator, Route};
use proptest::prelude::*;

fn navigator_at(fragment: &str) -> Navigator<ViewId, MemoryAddressBar> {
	Navigator::new(MemoryAddressBar::with_fragment(fragment))
}

fn any_view() -> impl Strategy<Value = ViewId> {
	prop::sample::select(ViewId::ALL.to_vec())
}

fn unknown_id() -> impl Strategy<Value = String> {
	"[a-zA-Z/ ]{0,16}".prop_filter("must not name a view", |s| !ViewId::is_valid(s))
}

proptest! {
	#[test]
	fn unknown_targets_change_nothing(start in any_view(), target in unknown_id()) {
		let navigator = navigator_at(start.id());

		navigator.navigate(&target);

		prop_assert_eq!(navigator.current(), start);
		prop_assert_eq!(navigator.address().fragment(), start.id());
		prop_assert_eq!(navigator.address().write_count(), 0);
		prop_assert_eq!(navigator.address().scroll_count(), 0);
	}

	#[test]
	fn navigate_sets_state_and_fragment(start in any_view(), target in any_view()) {
		let navigator = navigator_at(start.id());

		navigator.navigate(target.id());

		prop_assert_eq!(navigator.current(), target);
		prop_assert_eq!(navigator.address().fragment(), target.id());
		prop_assert_eq!(navigator.address().scroll_count(), 1);
	}

	#[test]
	fn navigate_is_idempotent(start in any_view(), target in any_view()) {
		let once = navigator_at(start.id());
		once.navigate(target.id());

		let twice = navigator_at(start.id());
		twice.navigate(target.id());
		twice.navigate(target.id());

		prop_assert_eq!(twice.current(), once.current());
		prop_assert_eq!(twice.address().history(), once.address().history());
		prop_assert_eq!(twice.address().write_count(), once.address().write_count());
	}

	#[test]
	fn unknown_start_fragment_opens_home(fragment in unknown_id()) {
		prop_assert_eq!(navigator_at(&fragment).current(), ViewId::Home);
	}

	#[test]
	fn external_change_follows_without_writing(
		path in prop::collection::vec(any_view(), 1..6),
		visited in any_view(),
	) {
		let navigator = navigator_at("#home");
		let _listener = navigator.listen();
		for view in &path {
			navigator.navigate_to(*view);
		}
		navigator.address().run_pending();
		let writes = navigator.address().write_count();

		navigator.address().visit(visited.id());
		prop_assert_eq!(navigator.current(), visited);

		if navigator.address().back() {
			let fragment = navigator.address().fragment();
			prop_assert_eq!(navigator.current().id(), fragment.as_str());
		}
		prop_assert_eq!(navigator.address().write_count(), writes);
	}

	#[test]
	fn invalid_external_change_is_ignored(start in any_view(), fragment in unknown_id()) {
		let navigator = navigator_at(start.id());
		let _listener = navigator.listen();

		navigator.address().visit(&fragment);

		prop_assert_eq!(navigator.current(), start);
		prop_assert_eq!(navigator.address().write_count(), 0);
	}
}

#[test]
fn services_fragment_opens_services() {
	assert_eq!(navigator_at("#services").current(), ViewId::Services);
	assert_eq!(navigator_at("#bogus").current(), ViewId::Home);
	assert_eq!(navigator_at("").current(), ViewId::Home);
}
