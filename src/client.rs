//! Browser entry point.
//!
//! Binds an [`App`] to `window.location`, mounts it into `#app` and routes
//! DOM events back into it. Clicks are delegated from the document: any
//! element carrying `data-navigate` or `data-action` is handled here.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use luxe_pages::router::{NAVIGATE_ATTR, navigate_target};
use luxe_pages::{BrowserAddressBar, MountError, error_log, info_log, warn_log};
use luxe_store::{StoreSettings, connect};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, FormData, HtmlFormElement};

use crate::action::{ACTION_ATTR, Action};
use crate::app::App;
use crate::booking::{Field, SubmitState};
use crate::view_id::ViewId;
use crate::views::home::SLIDE_INTERVAL_MS;

/// Id of the element the site is mounted into.
pub const ROOT_ID: &str = "app";

/// Scroll offset past which the navbar switches to its scrolled theme.
const SCROLL_THRESHOLD: f64 = 50.0;

/// How long the thank-you panel stays up after a booking.
const CONFIRMATION_MS: u32 = 5_000;

/// Errors raised while starting the client.
#[derive(Debug, Error)]
pub enum LaunchError {
	/// The DOM could not be reached or written.
	#[error(transparent)]
	Mount(#[from] MountError),
	/// An event listener could not be installed.
	#[error("failed to listen for '{0}' events")]
	Listener(&'static str),
	/// The client was started twice.
	#[error("client already started")]
	AlreadyStarted,
}

impl From<LaunchError> for JsValue {
	fn from(error: LaunchError) -> Self {
		JsValue::from_str(&error.to_string())
	}
}

/// An installed DOM event listener, removed on drop.
struct DomListener {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn Fn(Event)>,
}

impl DomListener {
	fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl Fn(Event) + 'static,
	) -> Result<Self, LaunchError> {
		let closure = Closure::<dyn Fn(Event)>::new(handler);
		target
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.map_err(|_| LaunchError::Listener(event))?;
		Ok(Self {
			target: target.clone(),
			event,
			closure,
		})
	}
}

impl Drop for DomListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
	}
}

struct Client {
	app: App<BrowserAddressBar>,
	root: Element,
	_listeners: Vec<DomListener>,
	_carousel: Interval,
}

thread_local! {
	static CLIENT: RefCell<Option<Rc<Client>>> = const { RefCell::new(None) };
}

fn client() -> Option<Rc<Client>> {
	CLIENT.with(|client| client.borrow().clone())
}

impl Client {
	fn render(&self) {
		if let Err(error) = self.app.render().mount(&self.root) {
			error_log!("Render failed: {}", error);
		}
	}

	/// Renders, then starts whatever load the current view is waiting on.
	fn refresh(&self) {
		self.render();

		if self.app.wants_portfolio() {
			spawn_local(async {
				if let Some(client) = client() {
					if client.app.load_portfolio().await {
						client.render();
					}
				}
			});
		}
		if self.app.wants_featured() {
			spawn_local(async {
				if let Some(client) = client() {
					if client.app.load_featured().await {
						client.render();
					}
				}
			});
		}
	}

	fn on_click(&self, event: &Event) {
		let Some(target) = event
			.target()
			.and_then(|target| target.dyn_into::<Element>().ok())
		else {
			return;
		};
		let selector = format!("[{NAVIGATE_ATTR}],[{ACTION_ATTR}]");
		let Ok(Some(element)) = target.closest(&selector) else {
			return;
		};

		let target = element.get_attribute(NAVIGATE_ATTR);
		let action = match navigate_target(target.as_deref()) {
			Some(view) => Some(Action::Navigate(view.to_string())),
			None => element
				.get_attribute(ACTION_ATTR)
				.and_then(|raw| Action::parse(&raw)),
		};
		let Some(action) = action else {
			warn_log!("Ignoring element with an unrecognised action");
			return;
		};

		event.prevent_default();
		// A view change is refreshed by the navigation observer.
		if self.app.dispatch(action) {
			self.refresh();
		}
	}

	fn on_input(&self, event: &Event) {
		let Some(target) = event.target() else {
			return;
		};
		let name = js_sys::Reflect::get(&target, &JsValue::from_str("name"))
			.ok()
			.and_then(|name| name.as_string());
		let value = js_sys::Reflect::get(&target, &JsValue::from_str("value"))
			.ok()
			.and_then(|value| value.as_string());
		if let (Some(name), Some(value)) = (name, value) {
			self.app.update_field(&name, value);
		}
	}

	fn on_submit(&self, event: &Event) {
		let Some(form) = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
		else {
			return;
		};
		if !form.has_attribute("data-form") {
			return;
		}
		event.prevent_default();

		if let Ok(data) = FormData::new_with_form(&form) {
			for field in Field::ALL {
				if let Some(value) = data.get(field.name()).as_string() {
					self.app.update_field(field.name(), value);
				}
			}
		}

		let Some(request) = self.app.begin_reservation() else {
			self.render();
			return;
		};
		self.render();

		let store = Rc::clone(self.app.store());
		spawn_local(async move {
			let result = store.insert_consultation(&request).await;
			let Some(client) = client() else {
				return;
			};
			client.app.finish_reservation(result);
			client.render();

			if *client.app.site().reservation.state() == SubmitState::Succeeded {
				TimeoutFuture::new(CONFIRMATION_MS).await;
				client.app.expire_confirmation();
				client.render();
			}
		});
	}

	fn on_scroll(&self, window: &web_sys::Window) {
		let scrolled = window.scroll_y().unwrap_or_default() > SCROLL_THRESHOLD;
		if self.app.set_scrolled(scrolled) {
			self.render();
		}
	}

	fn on_tick(&self) {
		if self.app.current() == ViewId::Home {
			self.app.next_slide();
			self.render();
		}
	}
}

fn listen(
	target: &EventTarget,
	event: &'static str,
	handler: impl Fn(&Client, &Event) + 'static,
) -> Result<DomListener, LaunchError> {
	DomListener::new(target, event, move |event| {
		if let Some(client) = client() {
			handler(&client, &event);
		}
	})
}

fn launch() -> Result<(), LaunchError> {
	if client().is_some() {
		return Err(LaunchError::AlreadyStarted);
	}

	let settings = match StoreSettings::from_env() {
		Ok(settings) => settings,
		Err(error) => {
			warn_log!("Ignoring record store settings: {}", error);
			None
		}
	};
	let store = Rc::from(connect(settings));

	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let root = document
		.get_element_by_id(ROOT_ID)
		.ok_or_else(|| MountError::MissingRoot(ROOT_ID.to_string()))?;

	let app = App::new(BrowserAddressBar::new()?, store);
	app.mount();
	app.navigator().state().observe(|_| {
		spawn_local(async {
			if let Some(client) = client() {
				client.refresh();
			}
		});
	});

	let listeners = vec![
		listen(&document, "click", Client::on_click)?,
		listen(&document, "input", Client::on_input)?,
		listen(&document, "change", Client::on_input)?,
		listen(&document, "submit", Client::on_submit)?,
		listen(&window, "scroll", {
			let window = window.clone();
			move |client, _| client.on_scroll(&window)
		})?,
	];
	let carousel = Interval::new(SLIDE_INTERVAL_MS, || {
		if let Some(client) = client() {
			client.on_tick();
		}
	});

	let client = Rc::new(Client {
		app,
		root,
		_listeners: listeners,
		_carousel: carousel,
	});
	CLIENT.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&client)));

	client.refresh();
	info_log!("Luxe Interiors client started");
	Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	launch().map_err(JsValue::from)
}
