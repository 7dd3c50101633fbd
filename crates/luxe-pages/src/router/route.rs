//! Closed route sets.

use std::fmt;

/// A closed, fixed set of navigable views.
///
/// Implemented by a fieldless enum; the identifiers returned by [`Route::id`]
/// are what appears in the URL fragment.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Tab { Inbox, Archive }
///
/// impl Route for Tab {
///     const ALL: &'static [Self] = &[Tab::Inbox, Tab::Archive];
///     const DEFAULT: Self = Tab::Inbox;
///
///     fn id(&self) -> &'static str {
///         match self {
///             Tab::Inbox => "inbox",
///             Tab::Archive => "archive",
///         }
///     }
/// }
///
/// assert!(Tab::is_valid("archive"));
/// assert!(!Tab::is_valid("Archive"));
/// ```
pub trait Route: Copy + Eq + fmt::Debug + 'static {
	/// Every member of the set.
	const ALL: &'static [Self];

	/// The route used when nothing else applies.
	const DEFAULT: Self;

	/// The fragment identifier of this route.
	fn id(&self) -> &'static str;

	/// Looks up the route with identifier `candidate` (exact, case-sensitive).
	fn parse(candidate: &str) -> Option<Self> {
		Self::ALL
			.iter()
			.copied()
			.find(|route| route.id() == candidate)
	}

	/// Returns true iff `candidate` names a member of the set.
	fn is_valid(candidate: &str) -> bool {
		Self::parse(candidate).is_some()
	}
}
