//! The view tree.
//!
//! Views are plain data: an element with attributes and children, a text
//! node, a fragment or nothing. The site renders a fresh tree on every state
//! change; tests inspect it through [`View::find_by_attr`] and friends, the
//! browser client mounts it with [`View::mount`].

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use thiserror::Error;

/// Error raised while writing a view into the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// No global `window`.
	#[error("window is not available")]
	NoWindow,
	/// No `document` behind the window or the mount point.
	#[error("document is not available")]
	NoDocument,
	/// The element to mount into does not exist.
	#[error("mount point #{0} not found")]
	MissingRoot(String),
	/// `createElement` rejected a tag.
	#[error("cannot create <{0}>")]
	CreateElementFailed(String),
	/// `setAttribute` rejected an attribute name.
	#[error("cannot set attribute '{0}'")]
	SetAttributeFailed(String),
	/// `appendChild` failed.
	#[error("cannot append child node")]
	AppendChildFailed,
}

/// Tags rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

type Text = Cow<'static, str>;

/// Renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node.
	Text(Text),
	/// Sibling views without a wrapper element.
	Fragment(Vec<View>),
	/// Nothing.
	Empty,
}

/// An element under construction, built with chained calls.
///
/// ```
/// use luxe_pages::{ElementView, IntoView};
///
/// let link = ElementView::new("a")
///     .attr("href", "#about")
///     .attr_if(true, "aria-current", "page")
///     .child("About");
/// assert_eq!(
///     link.into_view().render_to_string(),
///     r##"<a href="#about" aria-current="page">About</a>"##
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Text,
	attrs: Vec<(Text, Text)>,
	children: Vec<View>,
}

impl ElementView {
	/// Starts an element with tag `tag`.
	pub fn new(tag: impl Into<Text>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute.
	pub fn attr(mut self, name: impl Into<Text>, value: impl Into<Text>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends an attribute if `condition` holds.
	pub fn attr_if(self, condition: bool, name: impl Into<Text>, value: impl Into<Text>) -> Self {
		if condition {
			self.attr(name, value)
		} else {
			self
		}
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoView::into_view));
		self
	}

	/// The value of attribute `name`, if set.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find_map(|(attr, value)| (attr == name).then_some(value.as_ref()))
	}

	/// The children, in order.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.tag.as_ref())
	}
}

/// Depth-first, pre-order walk over the elements of a view.
pub struct Elements<'a> {
	stack: Vec<&'a View>,
}

impl<'a> Iterator for Elements<'a> {
	type Item = &'a ElementView;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(view) = self.stack.pop() {
			match view {
				View::Element(el) => {
					self.stack.extend(el.children.iter().rev());
					return Some(el);
				}
				View::Fragment(children) => self.stack.extend(children.iter().rev()),
				View::Text(_) | View::Empty => {}
			}
		}
		None
	}
}

impl View {
	/// A text node.
	pub fn text(content: impl Into<Text>) -> Self {
		Self::Text(content.into())
	}

	/// A fragment of `children`.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
	}

	/// Every element in the tree, depth first.
	pub fn elements(&self) -> Elements<'_> {
		Elements { stack: vec![self] }
	}

	/// First element whose attribute `name` equals `value`.
	pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&ElementView> {
		self.elements().find(|el| el.get_attr(name) == Some(value))
	}

	/// Every element carrying attribute `name`.
	pub fn find_all_with_attr(&self, name: &str) -> Vec<&ElementView> {
		self.elements()
			.filter(|el| el.get_attr(name).is_some())
			.collect()
	}

	/// The text of the tree without markup.
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		self.push_text(&mut text);
		text
	}

	fn push_text(&self, text: &mut String) {
		match self {
			View::Text(content) => text.push_str(content),
			View::Element(ElementView { children, .. }) | View::Fragment(children) => {
				children.iter().for_each(|child| child.push_text(text));
			}
			View::Empty => {}
		}
	}

	/// HTML markup for the tree.
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}

	/// Replaces the content of `parent` with this view.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		let document = parent.owner_document().ok_or(MountError::NoDocument)?;
		parent.set_inner_html("");
		self.append_to(&document, parent)
	}

	#[cfg(target_arch = "wasm32")]
	fn append_to(
		self,
		document: &web_sys::Document,
		parent: &web_sys::Node,
	) -> Result<(), MountError> {
		let node: web_sys::Node = match self {
			View::Empty => return Ok(()),
			View::Fragment(children) => {
				return children
					.into_iter()
					.try_for_each(|child| child.append_to(document, parent));
			}
			View::Text(text) => document.create_text_node(&text).into(),
			View::Element(el) => {
				let element = document
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElementFailed(el.tag.to_string()))?;
				for (name, value) in &el.attrs {
					element
						.set_attribute(name, value)
						.map_err(|_| MountError::SetAttributeFailed(name.to_string()))?;
				}
				for child in el.children {
					child.append_to(document, &element)?;
				}
				element.into()
			}
		};
		parent
			.append_child(&node)
			.map(drop)
			.map_err(|_| MountError::AppendChildFailed)
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			View::Empty => Ok(()),
			View::Text(text) => write!(f, "{}", Escaped(text)),
			View::Fragment(children) => children
				.iter()
				.try_for_each(|child| fmt::Display::fmt(child, f)),
			View::Element(el) => {
				write!(f, "<{}", el.tag)?;
				for (name, value) in &el.attrs {
					write!(f, " {}=\"{}\"", name, Escaped(value))?;
				}
				if el.is_void() {
					return f.write_str(" />");
				}
				f.write_char('>')?;
				el.children
					.iter()
					.try_for_each(|child| fmt::Display::fmt(child, f))?;
				write!(f, "</{}>", el.tag)
			}
		}
	}
}

/// Text with HTML special characters replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.0.chars() {
			match c {
				'&' => f.write_str("&amp;")?,
				'<' => f.write_str("&lt;")?,
				'>' => f.write_str("&gt;")?,
				'"' => f.write_str("&quot;")?,
				'\'' => f.write_str("&#x27;")?,
				_ => f.write_char(c)?,
			}
		}
		Ok(())
	}
}

/// Conversion into a [`View`], accepted wherever a child is expected.
pub trait IntoView {
	/// Converts into a view.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map_or(View::Empty, IntoView::into_view)
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::fragment(self)
	}
}

macro_rules! tuple_into_view {
	($($name:ident),+) => {
		impl<$($name: IntoView),+> IntoView for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_view(self) -> View {
				let ($($name,)+) = self;
				View::Fragment(vec![$($name.into_view()),+])
			}
		}
	};
}

tuple_into_view!(A, B);
tuple_into_view!(A, B, C);
tuple_into_view!(A, B, C, D);
