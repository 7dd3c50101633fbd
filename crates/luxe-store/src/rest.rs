//! PostgREST (Supabase) record store.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use crate::error::StoreError;
use crate::models::{ConsultationRequest, Project};
use crate::query::ProjectQuery;
use crate::settings::StoreSettings;
use crate::store::RecordStore;

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
	#[serde(default)]
	message: String,
}

/// Record store talking to `{url}/rest/v1/{table}`.
#[derive(Debug)]
pub struct RestRecordStore {
	client: Client,
	settings: StoreSettings,
}

impl RestRecordStore {
	/// Portfolio table.
	pub const PROJECTS_TABLE: &'static str = "projects";
	/// Consultation request table.
	pub const CONSULTATIONS_TABLE: &'static str = "consultation_requests";

	/// Store with a default client.
	pub fn new(settings: StoreSettings) -> Self {
		Self::with_client(Client::new(), settings)
	}

	/// Store using `client`.
	pub fn with_client(client: Client, settings: StoreSettings) -> Self {
		Self { client, settings }
	}

	/// Connection settings.
	pub fn settings(&self) -> &StoreSettings {
		&self.settings
	}

	fn request(&self, method: Method, url: String) -> RequestBuilder {
		let key = self.settings.anon_key();
		self.client
			.request(method, url)
			.header("apikey", key)
			.bearer_auth(key)
	}
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	let message = serde_json::from_str::<PostgrestError>(&body)
		.ok()
		.map(|e| e.message)
		.filter(|m| !m.is_empty())
		.unwrap_or_else(|| {
			status
				.canonical_reason()
				.unwrap_or("request failed")
				.to_string()
		});

	Err(StoreError::Rejected {
		status: status.as_u16(),
		message,
	})
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for RestRecordStore {
	async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StoreError> {
		let url = format!(
			"{}?{}",
			self.settings.table_url(Self::PROJECTS_TABLE),
			query.to_query_string()
		);
		tracing::debug!(%url, "listing projects");

		let response = self.request(Method::GET, url).send().await?;
		let projects: Vec<Project> = ensure_success(response).await?.json().await?;

		tracing::debug!(count = projects.len(), "projects loaded");
		Ok(projects)
	}

	async fn insert_consultation(&self, request: &ConsultationRequest) -> Result<(), StoreError> {
		let url = self.settings.table_url(Self::CONSULTATIONS_TABLE);

		let response = self
			.request(Method::POST, url)
			.header("Prefer", "return=minimal")
			.json(&[request])
			.send()
			.await?;

		match ensure_success(response).await {
			Ok(_) => {
				tracing::info!("consultation request stored");
				Ok(())
			}
			Err(e) => {
				tracing::warn!(error = %e, "consultation request rejected");
				Err(e)
			}
		}
	}
}
