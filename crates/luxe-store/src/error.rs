//! Error types.

use thiserror::Error;

/// Errors returned by record store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// No credentials were configured for the store.
	#[error("record store is not configured")]
	NotConfigured,

	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),

	/// The store answered with a non-success status.
	#[error("{message}")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Message reported by the store.
		message: String,
	},

	/// The response body did not have the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(String),
}

impl From<reqwest::Error> for StoreError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err.to_string())
		}
	}
}

/// Errors raised while loading [`StoreSettings`](crate::StoreSettings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
	/// One of the required variables is missing.
	#[error("missing environment variable: {0}")]
	MissingVariable(String),

	/// The project URL could not be parsed.
	#[error("invalid store URL '{url}': {reason}")]
	InvalidUrl {
		/// The rejected value.
		url: String,
		/// Why it was rejected.
		reason: String,
	},

	/// The API key is empty.
	#[error("store API key is empty")]
	EmptyKey,
}
