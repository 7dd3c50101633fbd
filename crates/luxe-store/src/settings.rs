//! Store credentials.
//!
//! Native builds read `LUXE_SUPABASE_URL` and `LUXE_SUPABASE_ANON_KEY` from the
//! process environment (after loading a `.env` file, if any). The browser has
//! no environment, so wasm builds bake the same variables in at compile time.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::SettingsError;

/// Connection settings for [`RestRecordStore`](crate::RestRecordStore).
#[derive(Debug)]
pub struct StoreSettings {
	url: Url,
	anon_key: SecretString,
}

impl StoreSettings {
	/// Prefix shared by the store variables.
	pub const ENV_PREFIX: &'static str = "LUXE_SUPABASE_";
	/// Project URL variable, without prefix.
	pub const URL_KEY: &'static str = "URL";
	/// Anonymous API key variable, without prefix.
	pub const ANON_KEY_KEY: &'static str = "ANON_KEY";

	/// Validate and build settings.
	pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, SettingsError> {
		let parsed = Url::parse(url.trim()).map_err(|e| SettingsError::InvalidUrl {
			url: url.to_string(),
			reason: e.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(SettingsError::InvalidUrl {
				url: url.to_string(),
				reason: format!("unsupported scheme '{}'", parsed.scheme()),
			});
		}

		let anon_key: String = anon_key.into();
		if anon_key.trim().is_empty() {
			return Err(SettingsError::EmptyKey);
		}

		Ok(Self {
			url: parsed,
			anon_key: SecretString::new(anon_key.into_boxed_str()),
		})
	}

	/// Load settings from the environment.
	///
	/// Returns `Ok(None)` when neither variable is set, which leaves the site
	/// running with an unconfigured store. Setting only one of them is an error.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn from_env() -> Result<Option<Self>, SettingsError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Load settings baked in at compile time.
	///
	/// Returns `Ok(None)` when neither variable was set for the build.
	#[cfg(target_arch = "wasm32")]
	pub fn from_env() -> Result<Option<Self>, SettingsError> {
		let url = option_env!("LUXE_SUPABASE_URL");
		let anon_key = option_env!("LUXE_SUPABASE_ANON_KEY");
		Self::from_lookup(|name| {
			if name.ends_with(Self::URL_KEY) {
				url.map(str::to_string)
			} else {
				anon_key.map(str::to_string)
			}
		})
	}

	fn from_lookup<F>(lookup: F) -> Result<Option<Self>, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let url_name = format!("{}{}", Self::ENV_PREFIX, Self::URL_KEY);
		let key_name = format!("{}{}", Self::ENV_PREFIX, Self::ANON_KEY_KEY);
		let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

		match (present(&url_name), present(&key_name)) {
			(None, None) => Ok(None),
			(Some(url), Some(key)) => Self::new(&url, key).map(Some),
			(None, Some(_)) => Err(SettingsError::MissingVariable(url_name)),
			(Some(_), None) => Err(SettingsError::MissingVariable(key_name)),
		}
	}

	/// Project URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Anonymous API key, sent as `apikey` and bearer token.
	pub fn anon_key(&self) -> &str {
		self.anon_key.expose_secret()
	}

	/// REST endpoint of `table`.
	pub fn table_url(&self, table: &str) -> String {
		format!(
			"{}/rest/v1/{}",
			self.url.as_str().trim_end_matches('/'),
			table
		)
	}
}
