//! The browser-visible address fragment.
//!
//! [`AddressBar`] is everything the router needs from its environment: read
//! and write the fragment, scroll to the top, and hear about fragment changes
//! it did not initiate. [`BrowserAddressBar`] implements it on top of
//! `window.location` (WASM only); [`MemoryAddressBar`] keeps an in-memory
//! history and is used natively and in tests.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Strips one leading `#` from a raw `location.hash` value.
pub fn parse_fragment(raw: &str) -> &str {
	raw.strip_prefix('#').unwrap_or(raw)
}

/// Callback receiving the new fragment (without `#`) after an address change.
pub type FragmentListener = Box<dyn Fn(&str)>;

/// Access to the address fragment and the viewport.
pub trait AddressBar: 'static {
	/// Returns the current fragment, without the leading `#`.
	fn fragment(&self) -> String;

	/// Sets the fragment, creating a new history entry.
	fn set_fragment(&self, fragment: &str);

	/// Replaces the fragment of the current history entry.
	fn replace_fragment(&self, fragment: &str);

	/// Starts a smooth scroll of the viewport to the top. Fire-and-forget.
	fn scroll_to_top(&self);

	/// Registers `listener` for address changes. The listener stays
	/// installed until the returned [`Subscription`] is dropped.
	fn subscribe(&self, listener: FragmentListener) -> Subscription;
}

/// A scoped event subscription; dropping it removes the listener.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
	release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Creates a subscription running `release` when dropped.
	pub fn new<F>(release: F) -> Self
	where
		F: FnOnce() + 'static,
	{
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// A subscription with nothing to release.
	pub fn noop() -> Self {
		Self { release: None }
	}

	/// Releases the subscription now.
	pub fn cancel(mut self) {
		self.release_now();
	}

	fn release_now(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.release_now();
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.release.is_some())
			.finish()
	}
}

type ListenerList = RefCell<Vec<(u64, Rc<dyn Fn(&str)>)>>;

#[derive(Debug)]
struct History {
	entries: Vec<String>,
	cursor: usize,
	/// Notifications raised by our own writes, delivered on `run_pending`.
	pending: usize,
}

/// In-memory address bar with a browser-like history stack.
///
/// Fragment writes made by the application queue a change notification that
/// is delivered by [`run_pending`](Self::run_pending), the way a browser
/// dispatches `hashchange` on a later task. [`back`](Self::back),
/// [`forward`](Self::forward) and [`visit`](Self::visit) model user actions
/// and notify listeners immediately.
pub struct MemoryAddressBar {
	history: RefCell<History>,
	writes: Cell<usize>,
	replacements: Cell<usize>,
	scrolls: Cell<usize>,
	listeners: Rc<ListenerList>,
	next_listener: Cell<u64>,
}

impl fmt::Debug for MemoryAddressBar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryAddressBar")
			.field("history", &self.history.borrow())
			.field("writes", &self.writes.get())
			.field("scrolls", &self.scrolls.get())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

impl Default for MemoryAddressBar {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryAddressBar {
	/// Creates an address bar with no fragment.
	pub fn new() -> Self {
		Self::with_fragment("")
	}

	/// Creates an address bar whose initial URL carries `fragment`
	/// (with or without the leading `#`).
	pub fn with_fragment(fragment: &str) -> Self {
		Self {
			history: RefCell::new(History {
				entries: vec![parse_fragment(fragment).to_string()],
				cursor: 0,
				pending: 0,
			}),
			writes: Cell::new(0),
			replacements: Cell::new(0),
			scrolls: Cell::new(0),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_listener: Cell::new(0),
		}
	}

	/// Moves one entry back in history. Returns false at the first entry.
	pub fn back(&self) -> bool {
		{
			let mut history = self.history.borrow_mut();
			if history.cursor == 0 {
				return false;
			}
			history.cursor -= 1;
		}
		self.notify();
		true
	}

	/// Moves one entry forward in history. Returns false at the last entry.
	pub fn forward(&self) -> bool {
		{
			let mut history = self.history.borrow_mut();
			if history.cursor + 1 >= history.entries.len() {
				return false;
			}
			history.cursor += 1;
		}
		self.notify();
		true
	}

	/// Simulates the user editing the fragment in the address bar.
	pub fn visit(&self, fragment: &str) {
		self.push_entry(parse_fragment(fragment));
		self.notify();
	}

	/// Delivers notifications queued by application writes. Returns how many
	/// were delivered.
	pub fn run_pending(&self) -> usize {
		let pending = std::mem::take(&mut self.history.borrow_mut().pending);
		for _ in 0..pending {
			self.notify();
		}
		pending
	}

	/// Returns every history entry as a `#fragment` string, oldest first.
	pub fn history(&self) -> Vec<String> {
		self.history
			.borrow()
			.entries
			.iter()
			.map(|entry| format!("#{entry}"))
			.collect()
	}

	/// Number of fragment writes that created a history entry.
	pub fn write_count(&self) -> usize {
		self.writes.get()
	}

	/// Number of in-place fragment replacements.
	pub fn replace_count(&self) -> usize {
		self.replacements.get()
	}

	/// Number of scroll-to-top requests.
	pub fn scroll_count(&self) -> usize {
		self.scrolls.get()
	}

	/// Number of installed listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	fn push_entry(&self, fragment: &str) {
		let mut history = self.history.borrow_mut();
		let next = history.cursor + 1;
		history.entries.truncate(next);
		history.entries.push(fragment.to_string());
		history.cursor = next;
	}

	fn notify(&self) {
		let fragment = self.fragment();
		let listeners: Vec<Rc<dyn Fn(&str)>> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		for listener in listeners {
			listener(&fragment);
		}
	}
}

impl AddressBar for MemoryAddressBar {
	fn fragment(&self) -> String {
		let history = self.history.borrow();
		history.entries[history.cursor].clone()
	}

	fn set_fragment(&self, fragment: &str) {
		self.push_entry(parse_fragment(fragment));
		self.history.borrow_mut().pending += 1;
		self.writes.set(self.writes.get() + 1);
	}

	fn replace_fragment(&self, fragment: &str) {
		let mut history = self.history.borrow_mut();
		let cursor = history.cursor;
		history.entries[cursor] = parse_fragment(fragment).to_string();
		self.replacements.set(self.replacements.get() + 1);
	}

	fn scroll_to_top(&self) {
		self.scrolls.set(self.scrolls.get() + 1);
	}

	fn subscribe(&self, listener: FragmentListener) -> Subscription {
		let id = self.next_listener.get();
		self.next_listener.set(id + 1);
		self.listeners.borrow_mut().push((id, Rc::from(listener)));

		let listeners: Weak<ListenerList> = Rc::downgrade(&self.listeners);
		Subscription::new(move || {
			if let Some(listeners) = listeners.upgrade() {
				listeners
					.borrow_mut()
					.retain(|(listener_id, _)| *listener_id != id);
			}
		})
	}
}

/// Address bar backed by `window.location` and `hashchange`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserAddressBar {
	window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl BrowserAddressBar {
	/// Binds to the global `window`.
	pub fn new() -> Result<Self, crate::MountError> {
		let window = web_sys::window().ok_or(crate::MountError::NoWindow)?;
		Ok(Self { window })
	}
}

#[cfg(target_arch = "wasm32")]
impl AddressBar for BrowserAddressBar {
	fn fragment(&self) -> String {
		self.window
			.location()
			.hash()
			.map(|hash| parse_fragment(&hash).to_string())
			.unwrap_or_default()
	}

	fn set_fragment(&self, fragment: &str) {
		if self.window.location().set_hash(fragment).is_err() {
			crate::warn_log!("Failed to set location hash to #{}", fragment);
		}
	}

	fn replace_fragment(&self, fragment: &str) {
		let url = format!("#{fragment}");
		let replaced = self.window.history().and_then(|history| {
			history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
		});
		if replaced.is_err() {
			crate::warn_log!("Failed to replace history entry with {}", url);
		}
	}

	fn scroll_to_top(&self) {
		let options = web_sys::ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		self.window.scroll_to_with_scroll_to_options(&options);
	}

	fn subscribe(&self, listener: FragmentListener) -> Subscription {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let window = self.window.clone();
		let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
			let hash = window.location().hash().unwrap_or_default();
			listener(parse_fragment(&hash));
		});

		if self
			.window
			.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
			.is_err()
		{
			crate::error_log!("Failed to install hashchange listener");
			return Subscription::noop();
		}

		let target = self.window.clone();
		Subscription::new(move || {
			let _ = target.remove_event_listener_with_callback(
				"hashchange",
				closure.as_ref().unchecked_ref(),
			);
			drop(closure);
		})
	}
}
