//! PostgREST query builder for the `projects` table.

use crate::models::Project;

/// Listing order for projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectOrder {
	/// Database order.
	#[default]
	Unordered,
	/// `display_order` ascending.
	DisplayOrder,
	/// Most recently created first.
	Newest,
}

impl ProjectOrder {
	fn to_param(self) -> Option<&'static str> {
		match self {
			Self::Unordered => None,
			Self::DisplayOrder => Some("display_order.asc"),
			Self::Newest => Some("created_at.desc"),
		}
	}
}

/// Filters and ordering for [`RecordStore::list_projects`](crate::RecordStore::list_projects).
///
/// # Example
///
/// ```
/// use luxe_store::ProjectQuery;
///
/// let query = ProjectQuery::new().of_kind("villa").order_by_display_order();
/// assert_eq!(
///     query.to_query_string(),
///     "select=%2A&project_type=ilike.villa&order=display_order.asc"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
	kind: Option<String>,
	featured_only: bool,
	order: ProjectOrder,
	limit: Option<usize>,
}

impl ProjectQuery {
	/// Every project, in database order.
	pub fn new() -> Self {
		Self::default()
	}

	/// Only projects whose `project_type` equals `kind`, ignoring case.
	pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Only featured projects.
	pub fn featured(mut self) -> Self {
		self.featured_only = true;
		self
	}

	/// Order by `display_order`, ascending.
	pub fn order_by_display_order(mut self) -> Self {
		self.order = ProjectOrder::DisplayOrder;
		self
	}

	/// Newest first.
	pub fn order_by_newest(mut self) -> Self {
		self.order = ProjectOrder::Newest;
		self
	}

	/// At most `limit` rows.
	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	/// Requested ordering.
	pub fn order(&self) -> ProjectOrder {
		self.order
	}

	/// Row limit, if any.
	pub fn row_limit(&self) -> Option<usize> {
		self.limit
	}

	/// Whether `project` passes the filters (ordering and limit aside).
	pub fn matches(&self, project: &Project) -> bool {
		if self.featured_only && !project.featured {
			return false;
		}
		match &self.kind {
			Some(kind) => project.project_type.eq_ignore_ascii_case(kind),
			None => true,
		}
	}

	/// PostgREST query parameters.
	pub fn to_query_pairs(&self) -> Vec<(String, String)> {
		let mut params = vec![("select".to_string(), "*".to_string())];

		if self.featured_only {
			params.push(("featured".to_string(), "eq.true".to_string()));
		}
		if let Some(kind) = &self.kind {
			params.push(("project_type".to_string(), format!("ilike.{}", kind)));
		}
		if let Some(order) = self.order.to_param() {
			params.push(("order".to_string(), order.to_string()));
		}
		if let Some(limit) = self.limit {
			params.push(("limit".to_string(), limit.to_string()));
		}

		params
	}

	/// URL-encoded query string, without the leading `?`.
	pub fn to_query_string(&self) -> String {
		self.to_query_pairs()
			.iter()
			.map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
			.collect::<Vec<_>>()
			.join("&")
	}
}
