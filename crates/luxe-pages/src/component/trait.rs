//! Reusable pieces of UI.

use super::into_view::View;

/// A piece of UI rendered from its own fields.
///
/// Components are rebuilt by their owner on every state change; nothing is
/// retained between renders.
///
/// # Example
///
/// ```
/// use luxe_pages::{Component, ElementView, IntoView, View};
///
/// struct SectionTitle(&'static str);
///
/// impl Component for SectionTitle {
///     fn render(&self) -> View {
///         ElementView::new("h2").child(self.0).into_view()
///     }
/// }
///
/// assert_eq!(SectionTitle("Our Process").render().render_to_string(), "<h2>Our Process</h2>");
/// assert_eq!(SectionTitle("x").name(), "SectionTitle");
/// ```
pub trait Component {
	/// Builds the view.
	fn render(&self) -> View;

	/// Unqualified type name, for log messages.
	fn name(&self) -> &'static str {
		let path = std::any::type_name::<Self>();
		path.rsplit("::").next().unwrap_or(path)
	}
}
