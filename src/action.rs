//! UI actions carried by `data-action` attributes.
//!
//! Views render plain markup; interactive elements carry an encoded action
//! (`data-action="filter:villa"`) that the client decodes and hands to
//! [`App::dispatch`](crate::App::dispatch).

use std::fmt;

use crate::gallery::ProjectFilter;

/// Attribute holding an encoded [`Action`].
pub const ACTION_ATTR: &str = "data-action";

/// A user interaction, decoded from markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Go to a view by identifier (validated by the navigator).
	Navigate(String),
	/// Change the portfolio filter.
	Filter(ProjectFilter),
	/// Open the lightbox on the n-th visible project.
	Open(usize),
	/// Close the lightbox.
	Close,
	/// Next lightbox image.
	Next,
	/// Previous lightbox image.
	Prev,
	/// Show the n-th hero slide.
	Slide(usize),
	/// Back to an empty booking form.
	Reset,
	/// Open or close the mobile menu.
	ToggleMenu,
}

impl Action {
	/// Decodes an attribute value; `None` for anything unrecognized.
	pub fn parse(raw: &str) -> Option<Self> {
		let raw = raw.trim();
		let (verb, arg) = match raw.split_once(':') {
			Some((verb, arg)) => (verb, Some(arg)),
			None => (raw, None),
		};

		match (verb, arg) {
			("navigate", Some(target)) => Some(Action::Navigate(target.to_string())),
			("filter", Some(kind)) => ProjectFilter::parse(kind).map(Action::Filter),
			("open", Some(index)) => index.parse().ok().map(Action::Open),
			("slide", Some(index)) => index.parse().ok().map(Action::Slide),
			("close", None) => Some(Action::Close),
			("next", None) => Some(Action::Next),
			("prev", None) => Some(Action::Prev),
			("reset", None) => Some(Action::Reset),
			("toggle-menu", None) => Some(Action::ToggleMenu),
			_ => None,
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Action::Navigate(target) => write!(f, "navigate:{}", target),
			Action::Filter(filter) => write!(f, "filter:{}", filter.id()),
			Action::Open(index) => write!(f, "open:{}", index),
			Action::Slide(index) => write!(f, "slide:{}", index),
			Action::Close => f.write_str("close"),
			Action::Next => f.write_str("next"),
			Action::Prev => f.write_str("prev"),
			Action::Reset => f.write_str("reset"),
			Action::ToggleMenu => f.write_str("toggle-menu"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("navigate:portfolio", Action::Navigate("portfolio".to_string()))]
	#[case("filter:villa", Action::Filter(ProjectFilter::Villa))]
	#[case("filter:all", Action::Filter(ProjectFilter::All))]
	#[case("open:2", Action::Open(2))]
	#[case("slide:3", Action::Slide(3))]
	#[case("close", Action::Close)]
	#[case(" next ", Action::Next)]
	#[case("prev", Action::Prev)]
	#[case("reset", Action::Reset)]
	#[case("toggle-menu", Action::ToggleMenu)]
	fn test_parse(#[case] raw: &str, #[case] expected: Action) {
		assert_eq!(Action::parse(raw), Some(expected));
	}

	#[rstest]
	#[case("")]
	#[case("open")]
	#[case("open:x")]
	#[case("open:-1")]
	#[case("filter:castle")]
	#[case("close:now")]
	#[case("jump")]
	fn test_parse_rejects(#[case] raw: &str) {
		assert_eq!(Action::parse(raw), None);
	}

	#[rstest]
	fn test_display_is_parseable() {
		for action in [
			Action::Navigate("about".to_string()),
			Action::Filter(ProjectFilter::Penthouse),
			Action::Open(0),
			Action::ToggleMenu,
		] {
			assert_eq!(Action::parse(&action.to_string()), Some(action));
		}
	}
}
