//! Root composer.
//!
//! [`App`] owns the navigator, the view table and the per-view state. It
//! renders the navbar and footer around whichever body view the navigation
//! state selects, and turns decoded UI [`Action`]s into state changes.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use luxe_pages::{
	AddressBar, Component, ElementView, IntoView, NavigationListener, Navigator, View,
	ViewRegistry, info_log,
};
use luxe_store::{ConsultationRequest, RecordStore, StoreError};

use crate::action::Action;
use crate::booking::{Field, ReservationForm, SubmitState};
use crate::components::{Footer, NavTheme, Navbar};
use crate::gallery::{GalleryState, LoadState};
use crate::view_id::ViewId;
use crate::views::{self, home::Showcase};

/// State read by the views.
#[derive(Debug, Default)]
pub struct SiteState {
	/// Mobile menu shown.
	pub menu_open: bool,
	/// Page scrolled past the hero.
	pub scrolled: bool,
	/// Home page hero and featured strip.
	pub showcase: Showcase,
	/// Portfolio gallery.
	pub gallery: GalleryState,
	/// Booking form.
	pub reservation: ReservationForm,
	/// Whether the record store can accept submissions.
	pub store_configured: bool,
}

/// The site.
pub struct App<A: AddressBar> {
	navigator: Navigator<ViewId, A>,
	registry: ViewRegistry<ViewId, SiteState>,
	site: Rc<RefCell<SiteState>>,
	store: Rc<dyn RecordStore>,
	listener: RefCell<Option<NavigationListener>>,
}

impl<A: AddressBar> App<A> {
	/// Site starting at the view named by `address`'s fragment.
	pub fn new(address: A, store: Rc<dyn RecordStore>) -> Self {
		Self::with_navigator(Navigator::new(address), store)
	}

	/// Site driven by an existing navigator.
	pub fn with_navigator(navigator: Navigator<ViewId, A>, store: Rc<dyn RecordStore>) -> Self {
		let site = Rc::new(RefCell::new(SiteState {
			store_configured: store.is_configured(),
			..SiteState::default()
		}));

		// Observers run after the navigator has moved, never while `site` is borrowed.
		let weak = Rc::downgrade(&site);
		navigator.state().observe(move |view| {
			if let Some(site) = weak.upgrade() {
				let mut site = site.borrow_mut();
				site.menu_open = false;
				match view {
					ViewId::Home => site.showcase.clear_failure(),
					ViewId::Portfolio => site.gallery.clear_failure(),
					_ => {}
				}
			}
		});

		Self {
			navigator,
			registry: views::registry(),
			site,
			store,
			listener: RefCell::new(None),
		}
	}

	/// Installs the back/forward listener. Returns false if already mounted.
	pub fn mount(&self) -> bool {
		let mut listener = self.listener.borrow_mut();
		if listener.is_some() {
			return false;
		}
		*listener = Some(self.navigator.listen());
		info_log!("Mounted at #{}", self.current());
		true
	}

	/// Removes the back/forward listener.
	pub fn unmount(&self) {
		if let Some(listener) = self.listener.borrow_mut().take() {
			listener.stop();
		}
	}

	/// Whether the back/forward listener is installed.
	pub fn is_mounted(&self) -> bool {
		self.listener.borrow().is_some()
	}

	/// Active view.
	pub fn current(&self) -> ViewId {
		self.navigator.current()
	}

	/// The navigator, for observing navigation.
	pub fn navigator(&self) -> &Navigator<ViewId, A> {
		&self.navigator
	}

	/// Read access to the view state.
	pub fn site(&self) -> Ref<'_, SiteState> {
		self.site.borrow()
	}

	/// Body view for the current route.
	pub fn body(&self) -> View {
		self.registry.select(self.current(), &self.site.borrow())
	}

	/// Whole page: navbar, body, footer.
	pub fn render(&self) -> View {
		let (menu_open, scrolled) = {
			let site = self.site.borrow();
			(site.menu_open, site.scrolled)
		};

		View::fragment([
			Navbar::new(self.current())
				.menu_open(menu_open)
				.scrolled(scrolled)
				.render(),
			ElementView::new("main")
				.attr("class", "content")
				.child(self.body())
				.into_view(),
			Footer.render(),
		])
	}

	/// Applies a UI action.
	///
	/// Returns false when the action moved to another view; navigation
	/// observers have already seen that change. Otherwise the caller should
	/// re-render.
	pub fn dispatch(&self, action: Action) -> bool {
		if let Action::Navigate(target) = &action {
			let before = self.current();
			self.navigator.navigate(target);
			self.site.borrow_mut().menu_open = false;
			return self.current() == before;
		}

		let mut site = self.site.borrow_mut();
		match action {
			Action::Navigate(_) => {}
			Action::Filter(filter) => site.gallery.set_filter(filter),
			Action::Open(index) => {
				site.gallery.open(index);
			}
			Action::Close => site.gallery.close(),
			Action::Next => site.gallery.next(),
			Action::Prev => site.gallery.prev(),
			Action::Slide(index) => site.showcase.show_slide(index),
			Action::Reset => site.reservation.reset(),
			Action::ToggleMenu => site.menu_open = !site.menu_open,
		}
		true
	}

	/// Records the scroll position. Returns true if the navbar theme changed.
	pub fn set_scrolled(&self, scrolled: bool) -> bool {
		let current = self.current();
		let mut site = self.site.borrow_mut();
		let before = NavTheme::for_view(current, site.scrolled);
		site.scrolled = scrolled;
		before != NavTheme::for_view(current, scrolled)
	}

	/// Advances the hero carousel.
	pub fn next_slide(&self) {
		self.site.borrow_mut().showcase.next_slide();
	}

	/// Stores a form input value by input name. Unknown names are ignored.
	pub fn update_field(&self, name: &str, value: impl Into<String>) {
		if let Some(field) = Field::from_name(name) {
			self.site.borrow_mut().reservation.set(field, value);
		}
	}

	/// Whether the portfolio is showing and has not been loaded.
	pub fn wants_portfolio(&self) -> bool {
		self.current() == ViewId::Portfolio
			&& *self.site.borrow().gallery.load_state() == LoadState::Idle
	}

	/// Whether the home page is showing and its featured strip has not been loaded.
	pub fn wants_featured(&self) -> bool {
		let site = self.site.borrow();
		self.current() == ViewId::Home
			&& site.store_configured
			&& *site.showcase.load_state() == LoadState::Idle
	}

	/// Fills the gallery from the store. Returns false if a load already ran.
	pub async fn load_portfolio(&self) -> bool {
		if !self.site.borrow_mut().gallery.begin_load() {
			return false;
		}
		let result = self.store.list_projects(&GalleryState::query()).await;
		self.site.borrow_mut().gallery.finish_load(result);
		true
	}

	/// Fills the home page's featured strip. Returns false if a load already ran.
	pub async fn load_featured(&self) -> bool {
		if !self.site.borrow_mut().showcase.begin_load() {
			return false;
		}
		let result = self.store.list_projects(&Showcase::query()).await;
		self.site.borrow_mut().showcase.finish_load(result);
		true
	}

	/// Starts a booking submission; see [`ReservationForm::begin_submit`].
	pub fn begin_reservation(&self) -> Option<ConsultationRequest> {
		let mut site = self.site.borrow_mut();
		let configured = site.store_configured;
		site.reservation.begin_submit(configured)
	}

	/// Records the store's answer to a submission.
	pub fn finish_reservation(&self, result: Result<(), StoreError>) {
		self.site.borrow_mut().reservation.finish_submit(result);
	}

	/// Submits the booking form. Returns true if a request reached the store.
	pub async fn submit_reservation(&self) -> bool {
		let Some(request) = self.begin_reservation() else {
			return false;
		};
		let result = self.store.insert_consultation(&request).await;
		self.finish_reservation(result);
		true
	}

	/// The record store.
	pub fn store(&self) -> &Rc<dyn RecordStore> {
		&self.store
	}

	/// Hides the thank-you panel if it is still showing.
	pub fn expire_confirmation(&self) {
		let mut site = self.site.borrow_mut();
		if *site.reservation.state() == SubmitState::Succeeded {
			site.reservation.reset();
		}
	}
}

impl<A: AddressBar> std::fmt::Debug for App<A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("App")
			.field("current", &self.current())
			.field("mounted", &self.is_mounted())
			.finish()
	}
}
