//! Navigation state.

use super::route::Route;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Observer<R> = Rc<dyn Fn(R)>;

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The single authoritative record of which view is active.
///
/// Reading is public; assignment is reserved to the router so that every
/// change goes through [`Navigator`](super::Navigator).
pub struct NavigationState<R: Route> {
	current: Cell<R>,
	observers: RefCell<Vec<(ObserverId, Observer<R>)>>,
	next_observer: Cell<u64>,
}

impl<R: Route> fmt::Debug for NavigationState<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationState")
			.field("current", &self.current.get())
			.field("observers", &self.observers.borrow().len())
			.finish()
	}
}

impl<R: Route> NavigationState<R> {
	pub(crate) fn new(initial: R) -> Self {
		Self {
			current: Cell::new(initial),
			observers: RefCell::new(Vec::new()),
			next_observer: Cell::new(0),
		}
	}

	/// Returns the active route.
	pub fn current(&self) -> R {
		self.current.get()
	}

	/// Assigns the active route and notifies observers if it changed.
	pub(crate) fn set_current(&self, route: R) {
		if self.current.replace(route) == route {
			return;
		}
		// Observers may read the state or register further observers.
		let observers: Vec<Observer<R>> = self
			.observers
			.borrow()
			.iter()
			.map(|(_, observer)| Rc::clone(observer))
			.collect();
		for observer in observers {
			observer(route);
		}
	}

	/// Registers `observer` to run after every change of the active route.
	pub fn observe<F>(&self, observer: F) -> ObserverId
	where
		F: Fn(R) + 'static,
	{
		let id = ObserverId(self.next_observer.get());
		self.next_observer.set(id.0 + 1);
		self.observers.borrow_mut().push((id, Rc::new(observer)));
		id
	}

	/// Removes an observer. Returns false if it was not registered.
	pub fn unobserve(&self, id: ObserverId) -> bool {
		let mut observers = self.observers.borrow_mut();
		let before = observers.len();
		observers.retain(|(observer_id, _)| *observer_id != id);
		observers.len() != before
	}

	/// Returns the number of registered observers.
	pub fn observer_count(&self) -> usize {
		self.observers.borrow().len()
	}
}
