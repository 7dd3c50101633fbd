//! The record store seam.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{ConsultationRequest, Project};
use crate::query::ProjectQuery;
use crate::rest::RestRecordStore;
use crate::settings::StoreSettings;

/// Reads portfolio projects and writes consultation requests.
///
/// Futures are `Send` on native targets only; the browser build runs on a
/// single thread and its fetch futures are not `Send`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RecordStore {
	/// List projects matching `query`.
	async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StoreError>;

	/// Insert one consultation request.
	async fn insert_consultation(&self, request: &ConsultationRequest) -> Result<(), StoreError>;

	/// Whether submissions can reach a backend at all.
	fn is_configured(&self) -> bool {
		true
	}
}

/// Store used when no credentials are available; every call fails with
/// [`StoreError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for UnconfiguredStore {
	async fn list_projects(&self, _query: &ProjectQuery) -> Result<Vec<Project>, StoreError> {
		Err(StoreError::NotConfigured)
	}

	async fn insert_consultation(&self, _request: &ConsultationRequest) -> Result<(), StoreError> {
		Err(StoreError::NotConfigured)
	}

	fn is_configured(&self) -> bool {
		false
	}
}

/// Build the store for `settings`, falling back to [`UnconfiguredStore`].
pub fn connect(settings: Option<StoreSettings>) -> Box<dyn RecordStore> {
	match settings {
		Some(settings) => {
			tracing::debug!(url = %settings.url(), "connecting record store");
			Box::new(RestRecordStore::new(settings))
		}
		None => {
			tracing::warn!("record store credentials not set; running unconfigured");
			Box::new(UnconfiguredStore)
		}
	}
}
