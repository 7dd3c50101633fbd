//! Record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A portfolio project (`projects` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
	/// Primary key.
	pub id: Uuid,
	/// Display title.
	pub title: String,
	/// Long description.
	#[serde(default)]
	pub description: String,
	/// Kind of property (villa, apartment, ...), free text.
	pub project_type: String,
	/// Where the project is.
	#[serde(default)]
	pub location: String,
	/// Cover image.
	pub image_url: String,
	/// Additional images shown after the cover in the lightbox.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub gallery_images: Vec<String>,
	/// Completion date as entered by the studio (e.g. `2024` or `Spring 2024`).
	#[serde(default)]
	pub completion_date: Option<String>,
	/// Shown on the home page.
	#[serde(default)]
	pub featured: bool,
	/// Position in listings, ascending.
	#[serde(default)]
	pub display_order: i32,
	/// Row creation time.
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
	/// Last update time.
	#[serde(default)]
	pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
	/// Number of images: the cover plus the gallery.
	pub fn image_count(&self) -> usize {
		self.gallery_images.len() + 1
	}

	/// Image at `index`, where 0 is the cover.
	pub fn image(&self, index: usize) -> Option<&str> {
		match index {
			0 => Some(&self.image_url),
			n => self.gallery_images.get(n - 1).map(String::as_str),
		}
	}
}

/// A consultation request (`consultation_requests` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
	/// Full name.
	pub client_name: String,
	/// Contact email.
	pub email: String,
	/// Contact phone.
	pub phone: String,
	/// One of the offered project types.
	pub project_type: String,
	/// Where the project is.
	pub location: String,
	/// One of the offered budget ranges.
	pub budget_range: String,
	/// Preferred consultation date; serialized as `null` when unset.
	pub preferred_date: Option<NaiveDate>,
	/// Free-form details.
	pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
