//! The navigate operation and the back/forward listener.

use super::address::{AddressBar, Subscription};
use super::route::Route;
use super::state::NavigationState;
use std::fmt;
use std::rc::Rc;

/// What the listener does with a fragment that names no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidFragmentPolicy {
	/// Keep the current view; the URL keeps the unrecognized fragment until
	/// the next navigation.
	#[default]
	Ignore,
	/// Switch to the default route and rewrite the fragment in place.
	RedirectToDefault,
}

/// Single writer of the [`NavigationState`].
pub struct Navigator<R: Route, A: AddressBar> {
	state: Rc<NavigationState<R>>,
	address: Rc<A>,
	policy: InvalidFragmentPolicy,
}

impl<R: Route, A: AddressBar> fmt::Debug for Navigator<R, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("current", &self.state.current())
			.field("policy", &self.policy)
			.finish()
	}
}

impl<R: Route, A: AddressBar> Navigator<R, A> {
	/// Creates a navigator seeded from the address fragment. An absent or
	/// unrecognized fragment starts at `R::DEFAULT`.
	pub fn new(address: A) -> Self {
		Self::with_shared_address(Rc::new(address))
	}

	/// Like [`new`](Self::new), for an address bar the caller keeps a handle to.
	pub fn with_shared_address(address: Rc<A>) -> Self {
		let initial = R::parse(&address.fragment()).unwrap_or(R::DEFAULT);
		Self {
			state: Rc::new(NavigationState::new(initial)),
			address,
			policy: InvalidFragmentPolicy::default(),
		}
	}

	/// Sets the policy applied by listeners installed afterwards.
	pub fn with_policy(mut self, policy: InvalidFragmentPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Returns the active route.
	pub fn current(&self) -> R {
		self.state.current()
	}

	/// Returns the navigation state, for observing changes.
	pub fn state(&self) -> &Rc<NavigationState<R>> {
		&self.state
	}

	/// Returns the address bar.
	pub fn address(&self) -> &Rc<A> {
		&self.address
	}

	/// Returns the invalid-fragment policy.
	pub fn policy(&self) -> InvalidFragmentPolicy {
		self.policy
	}

	/// Navigates to the route named `candidate`.
	///
	/// Unknown candidates are ignored entirely: no state change, no URL
	/// write, no scroll. Otherwise the fragment is written (only if it
	/// differs), a smooth scroll to the top is started, and the state is
	/// assigned, in that order.
	pub fn navigate(&self, candidate: &str) {
		let Some(route) = R::parse(candidate) else {
			return;
		};

		// URL before state: a hashchange echo must find the state already set.
		if self.address.fragment() != route.id() {
			self.address.set_fragment(route.id());
		}
		self.address.scroll_to_top();
		self.state.set_current(route);
	}

	/// Navigates to `route`.
	pub fn navigate_to(&self, route: R) {
		self.navigate(route.id());
	}

	/// Installs the back/forward listener.
	///
	/// The listener keeps the state in step with address changes the
	/// application did not make, without writing the URL back. It is removed
	/// when the returned guard is dropped.
	pub fn listen(&self) -> NavigationListener {
		let state = Rc::downgrade(&self.state);
		let address = Rc::downgrade(&self.address);
		let policy = self.policy;

		let subscription = self.address.subscribe(Box::new(move |fragment: &str| {
			let Some(state) = state.upgrade() else {
				return;
			};
			match (R::parse(fragment), policy) {
				(Some(route), _) => state.set_current(route),
				(None, InvalidFragmentPolicy::Ignore) => {}
				(None, InvalidFragmentPolicy::RedirectToDefault) => {
					crate::debug_log!("Redirecting unknown fragment #{} to default", fragment);
					if let Some(address) = address.upgrade() {
						address.replace_fragment(R::DEFAULT.id());
					}
					state.set_current(R::DEFAULT);
				}
			}
		}));

		NavigationListener { subscription }
	}
}

/// Guard for an installed back/forward listener.
#[must_use = "the listener is removed as soon as this guard is dropped"]
#[derive(Debug)]
pub struct NavigationListener {
	subscription: Subscription,
}

impl NavigationListener {
	/// Removes the listener now.
	pub fn stop(self) {
		self.subscription.cancel();
	}
}
