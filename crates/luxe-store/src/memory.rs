//! In-process record store.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::models::{ConsultationRequest, Project};
use crate::query::{ProjectOrder, ProjectQuery};
use crate::store::RecordStore;

/// Record store kept in memory. Can be told to fail, to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
	projects: Mutex<Vec<Project>>,
	consultations: Mutex<Vec<ConsultationRequest>>,
	failure: Mutex<Option<StoreError>>,
}

impl MemoryRecordStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Store seeded with `projects`.
	pub fn with_projects(projects: Vec<Project>) -> Self {
		Self {
			projects: Mutex::new(projects),
			..Self::default()
		}
	}

	/// Make every following call fail with `error`.
	pub fn fail_with(&self, error: StoreError) {
		*self.failure.lock() = Some(error);
	}

	/// Stop failing.
	pub fn clear_failure(&self) {
		*self.failure.lock() = None;
	}

	/// Add a project.
	pub fn push_project(&self, project: Project) {
		self.projects.lock().push(project);
	}

	/// Consultation requests received so far.
	pub fn consultations(&self) -> Vec<ConsultationRequest> {
		self.consultations.lock().clone()
	}

	fn check_failure(&self) -> Result<(), StoreError> {
		match self.failure.lock().clone() {
			Some(error) => Err(error),
			None => Ok(()),
		}
	}
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for MemoryRecordStore {
	async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StoreError> {
		self.check_failure()?;

		let mut projects: Vec<Project> = self
			.projects
			.lock()
			.iter()
			.filter(|p| query.matches(p))
			.cloned()
			.collect();

		match query.order() {
			ProjectOrder::Unordered => {}
			ProjectOrder::DisplayOrder => projects.sort_by_key(|p| p.display_order),
			ProjectOrder::Newest => projects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
		}
		if let Some(limit) = query.row_limit() {
			projects.truncate(limit);
		}

		Ok(projects)
	}

	async fn insert_consultation(&self, request: &ConsultationRequest) -> Result<(), StoreError> {
		self.check_failure()?;
		self.consultations.lock().push(request.clone());
		Ok(())
	}
}
