//! Integration tests for the assembled site
//!
//! These tests drive [`App`] through its public API:
//! 1. Navigating between views and the resulting history
//! 2. Back/forward handling, including the redirect policy
//! 3. Loading the gallery and booking a consultation against an in-memory store

#![cfg(not(target_arch = "wasm32"))]

use std::rc::Rc;

use luxe::views::VIEW_ATTR;
use luxe::views::reservation::FORM_ID;
use luxe::{Action, App, Field, LoadState, ProjectFilter, SubmitState, ViewId};
use luxe_pages::{AddressBar, InvalidFragmentPolicy, MemoryAddressBar, Navigator, View};
use luxe_store::{MemoryRecordStore, Project, RecordStore, StoreError, UnconfiguredStore};
use rstest::{fixture, rstest};
use uuid::Uuid;

fn project(title: &str, kind: &str, order: i32) -> Project {
	Project {
		id: Uuid::new_v4(),
		title: title.to_string(),
		description: String::new(),
		project_type: kind.to_string(),
		location: "Dubai".to_string(),
		image_url: format!("https://img.example/{order}.jpg"),
		gallery_images: Vec::new(),
		completion_date: None,
		featured: order == 1,
		display_order: order,
		created_at: None,
		updated_at: None,
	}
}

#[fixture]
fn store() -> Rc<MemoryRecordStore> {
	Rc::new(MemoryRecordStore::with_projects(vec![
		project("Hillside Villa", "Villa", 2),
		project("Marina Loft", "Apartment", 1),
		project("Canal House", "House", 3),
	]))
}

fn body_view(body: &View) -> Option<String> {
	body.find_all_with_attr(VIEW_ATTR)
		.first()
		.and_then(|el| el.get_attr(VIEW_ATTR))
		.map(str::to_string)
}

#[rstest]
fn test_navigation_end_to_end(store: Rc<MemoryRecordStore>) {
	let app = App::new(MemoryAddressBar::with_fragment("#home"), store);
	assert!(app.mount());
	assert_eq!(app.current(), ViewId::Home);

	app.dispatch(Action::Navigate("reservation".to_string()));
	let body = app.body();
	assert_eq!(body_view(&body).as_deref(), Some("reservation"));
	assert!(body.find_by_attr("data-form", FORM_ID).is_some());

	app.dispatch(Action::Navigate("portfolio".to_string()));
	assert_eq!(body_view(&app.body()).as_deref(), Some("portfolio"));

	let address = app.navigator().address();
	address.run_pending();
	assert_eq!(
		address.history(),
		vec!["#home", "#reservation", "#portfolio"]
	);
	assert_eq!(app.current(), ViewId::Portfolio);
}

#[rstest]
fn test_back_button_restores_previous_view(store: Rc<MemoryRecordStore>) {
	let app = App::new(MemoryAddressBar::with_fragment("#home"), store);
	app.mount();

	app.dispatch(Action::Navigate("about".to_string()));
	app.navigator().address().run_pending();
	let writes = app.navigator().address().write_count();

	assert!(app.navigator().address().back());
	assert_eq!(app.current(), ViewId::Home);
	assert_eq!(body_view(&app.body()).as_deref(), Some("home"));
	assert_eq!(app.navigator().address().write_count(), writes);
}

#[rstest]
#[case(InvalidFragmentPolicy::Ignore, ViewId::Services, "bogus")]
#[case(InvalidFragmentPolicy::RedirectToDefault, ViewId::Home, "home")]
fn test_unknown_fragment_policy(
	store: Rc<MemoryRecordStore>,
	#[case] policy: InvalidFragmentPolicy,
	#[case] expected: ViewId,
	#[case] fragment: &str,
) {
	let navigator =
		Navigator::new(MemoryAddressBar::with_fragment("#services")).with_policy(policy);
	let app = App::with_navigator(navigator, store);
	app.mount();

	app.navigator().address().visit("bogus");

	assert_eq!(app.current(), expected);
	assert_eq!(app.navigator().address().fragment(), fragment);
}

#[rstest]
fn test_unmount_stops_following_history(store: Rc<MemoryRecordStore>) {
	let app = App::new(MemoryAddressBar::with_fragment("#home"), store);
	app.mount();
	app.unmount();

	app.navigator().address().visit("about");

	assert_eq!(app.current(), ViewId::Home);
	assert_eq!(app.navigator().address().listener_count(), 0);
}

#[rstest]
#[tokio::test]
async fn test_gallery_flow(store: Rc<MemoryRecordStore>) {
	let app = App::new(MemoryAddressBar::with_fragment("#portfolio"), store);
	assert!(app.wants_portfolio());
	assert!(app.load_portfolio().await);
	assert!(!app.wants_portfolio());

	{
		let site = app.site();
		assert_eq!(*site.gallery.load_state(), LoadState::Loaded);
		let titles: Vec<_> = site
			.gallery
			.visible()
			.into_iter()
			.map(|p| p.title.clone())
			.collect();
		assert_eq!(titles, ["Marina Loft", "Hillside Villa", "Canal House"]);
	}

	app.dispatch(Action::Filter(ProjectFilter::Villa));
	app.dispatch(Action::Open(0));
	let site = app.site();
	let lightbox = site.gallery.lightbox().unwrap();
	assert_eq!(lightbox.project().title, "Hillside Villa");
}

#[rstest]
#[tokio::test]
async fn test_booking_flow(store: Rc<MemoryRecordStore>) {
	let app = App::new(
		MemoryAddressBar::with_fragment("#reservation"),
		Rc::clone(&store) as Rc<dyn RecordStore>,
	);

	let values = [
		(Field::ClientName, "Layla Haddad"),
		(Field::Email, "layla@example.com"),
		(Field::Phone, "+971 50 000 0000"),
		(Field::ProjectType, "Villa Interior Design"),
		(Field::BudgetRange, "$100,000 - $250,000"),
		(Field::Location, "Palm Jumeirah"),
	];
	for (field, value) in values {
		app.update_field(field.name(), value);
	}

	store.fail_with(StoreError::Network("offline".to_string()));
	assert!(app.submit_reservation().await);
	assert!(matches!(
		app.site().reservation.state(),
		SubmitState::Failed(message) if message == "network error: offline"
	));
	assert_eq!(app.site().reservation.value(Field::ClientName), "Layla Haddad");

	store.clear_failure();
	assert!(app.submit_reservation().await);
	assert_eq!(*app.site().reservation.state(), SubmitState::Succeeded);

	let saved = store.consultations();
	assert_eq!(saved.len(), 1);
	assert_eq!(saved[0].client_name, "Layla Haddad");
	assert_eq!(saved[0].preferred_date, None);

	app.expire_confirmation();
	assert_eq!(*app.site().reservation.state(), SubmitState::Editing);
}

#[rstest]
#[tokio::test]
async fn test_unconfigured_store_keeps_site_usable() {
	let app = App::new(
		MemoryAddressBar::with_fragment("#reservation"),
		Rc::new(UnconfiguredStore),
	);

	assert!(!app.submit_reservation().await);
	assert!(app.render().text_content().contains(luxe::booking::DISABLED_MESSAGE));

	app.dispatch(Action::Navigate("portfolio".to_string()));
	assert!(app.load_portfolio().await);
	assert!(matches!(
		app.site().gallery.load_state(),
		LoadState::Failed(message) if message.contains("not configured")
	));
}
