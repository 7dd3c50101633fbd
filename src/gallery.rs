//! Portfolio gallery state: loading, filtering and the lightbox.

use luxe_store::{Project, ProjectQuery, StoreError};

/// Progress of a record store read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// Request in flight.
	Loading,
	/// Records arrived.
	Loaded,
	/// The request failed; the message is shown inline.
	Failed(String),
}

impl LoadState {
	/// Whether a new request may start.
	pub fn can_start(&self) -> bool {
		matches!(self, LoadState::Idle | LoadState::Failed(_))
	}

	/// Returns a failed load to `Idle` so it is requested again.
	pub fn clear_failure(&mut self) {
		if matches!(self, LoadState::Failed(_)) {
			*self = LoadState::Idle;
		}
	}
}

/// Category buttons above the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
	/// Everything.
	#[default]
	All,
	/// Villas.
	Villa,
	/// Apartments.
	Apartment,
	/// Houses.
	House,
	/// Penthouses.
	Penthouse,
}

impl ProjectFilter {
	/// Button order.
	pub const ALL: [ProjectFilter; 5] = [
		ProjectFilter::All,
		ProjectFilter::Villa,
		ProjectFilter::Apartment,
		ProjectFilter::House,
		ProjectFilter::Penthouse,
	];

	/// Identifier used in actions.
	pub fn id(&self) -> &'static str {
		match self {
			ProjectFilter::All => "all",
			ProjectFilter::Villa => "villa",
			ProjectFilter::Apartment => "apartment",
			ProjectFilter::House => "house",
			ProjectFilter::Penthouse => "penthouse",
		}
	}

	/// Button label.
	pub fn label(&self) -> &'static str {
		match self {
			ProjectFilter::All => "ALL",
			ProjectFilter::Villa => "VILLA",
			ProjectFilter::Apartment => "APARTMENT",
			ProjectFilter::House => "HOUSE",
			ProjectFilter::Penthouse => "PENTHOUSE",
		}
	}

	/// Looks up a filter by identifier.
	pub fn parse(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.id() == id)
	}

	/// Whether `project` belongs to this category (case-insensitive).
	pub fn matches(&self, project: &Project) -> bool {
		match self {
			ProjectFilter::All => true,
			kind => project.project_type.eq_ignore_ascii_case(kind.id()),
		}
	}
}

/// Full-screen viewer cycling over a project's cover and gallery images.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
	project: Project,
	index: usize,
}

impl Lightbox {
	/// Opens on the cover image.
	pub fn open(project: Project) -> Self {
		Self { project, index: 0 }
	}

	/// The project being viewed.
	pub fn project(&self) -> &Project {
		&self.project
	}

	/// Current position, 0 being the cover.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Number of images.
	pub fn total(&self) -> usize {
		self.project.image_count()
	}

	/// URL of the current image.
	pub fn image(&self) -> &str {
		self.project.image(self.index).unwrap_or(&self.project.image_url)
	}

	/// `Image 2 of 5`.
	pub fn caption(&self) -> String {
		format!("Image {} of {}", self.index + 1, self.total())
	}

	/// Advances, wrapping to the cover after the last image.
	pub fn next(&mut self) {
		self.index = (self.index + 1) % self.total();
	}

	/// Steps back, wrapping to the last image before the cover.
	pub fn prev(&mut self) {
		let total = self.total();
		self.index = (self.index + total - 1) % total;
	}
}

/// State behind the portfolio view.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
	load: LoadState,
	projects: Vec<Project>,
	filter: ProjectFilter,
	lightbox: Option<Lightbox>,
}

impl GalleryState {
	/// Message shown when the filter leaves nothing.
	pub const EMPTY_MESSAGE: &'static str = "No projects found for this category.";

	/// Fresh, unloaded gallery.
	pub fn new() -> Self {
		Self::default()
	}

	/// Query used to fill the gallery.
	pub fn query() -> ProjectQuery {
		ProjectQuery::new().order_by_display_order()
	}

	/// Load progress.
	pub fn load_state(&self) -> &LoadState {
		&self.load
	}

	/// All loaded projects, in display order.
	pub fn projects(&self) -> &[Project] {
		&self.projects
	}

	/// Active filter.
	pub fn filter(&self) -> ProjectFilter {
		self.filter
	}

	/// Open lightbox, if any.
	pub fn lightbox(&self) -> Option<&Lightbox> {
		self.lightbox.as_ref()
	}

	/// Projects passing the active filter.
	pub fn visible(&self) -> Vec<&Project> {
		self.projects
			.iter()
			.filter(|p| self.filter.matches(p))
			.collect()
	}

	/// Forgets a failed load; the gallery asks for its projects again.
	pub fn clear_failure(&mut self) {
		self.load.clear_failure();
	}

	/// Marks a load as started. Returns false if one is running or done.
	pub fn begin_load(&mut self) -> bool {
		if !self.load.can_start() {
			return false;
		}
		self.load = LoadState::Loading;
		true
	}

	/// Records the outcome of a load.
	pub fn finish_load(&mut self, result: Result<Vec<Project>, StoreError>) {
		match result {
			Ok(mut projects) => {
				projects.sort_by_key(|p| p.display_order);
				self.projects = projects;
				self.load = LoadState::Loaded;
			}
			Err(e) => {
				self.load = LoadState::Failed(format!("Unable to load projects: {}", e));
			}
		}
	}

	/// Changes the filter.
	pub fn set_filter(&mut self, filter: ProjectFilter) {
		self.filter = filter;
	}

	/// Opens the lightbox on the `index`-th visible project.
	pub fn open(&mut self, index: usize) -> bool {
		let Some(project) = self.visible().get(index).map(|p| (*p).clone()) else {
			return false;
		};
		self.lightbox = Some(Lightbox::open(project));
		true
	}

	/// Closes the lightbox.
	pub fn close(&mut self) {
		self.lightbox = None;
	}

	/// Next image, if the lightbox is open.
	pub fn next(&mut self) {
		if let Some(lightbox) = self.lightbox.as_mut() {
			lightbox.next();
		}
	}

	/// Previous image, if the lightbox is open.
	pub fn prev(&mut self) {
		if let Some(lightbox) = self.lightbox.as_mut() {
			lightbox.prev();
		}
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use luxe_store::Project;
	use uuid::Uuid;

	pub(crate) fn project(title: &str, kind: &str, order: i32, gallery: usize) -> Project {
		Project {
			id: Uuid::new_v4(),
			title: title.to_string(),
			description: format!("{} description", title),
			project_type: kind.to_string(),
			location: "Dubai".to_string(),
			image_url: format!("https://img.example/{}.jpg", title),
			gallery_images: (1..=gallery)
				.map(|i| format!("https://img.example/{}-{}.jpg", title, i))
				.collect(),
			completion_date: Some("2024".to_string()),
			featured: order <= 3,
			display_order: order,
			created_at: None,
			updated_at: None,
		}
	}

	pub(crate) fn sample() -> Vec<Project> {
		vec![
			project("marina", "Apartment", 2, 0),
			project("palm", "Villa", 1, 2),
			project("hills", "villa", 3, 1),
			project("skyline", "Penthouse", 4, 3),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::fixtures::{project, sample};
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn loaded() -> GalleryState {
		let mut gallery = GalleryState::new();
		assert!(gallery.begin_load());
		gallery.finish_load(Ok(sample()));
		gallery
	}

	fn titles(gallery: &GalleryState) -> Vec<&str> {
		gallery.visible().iter().map(|p| p.title.as_str()).collect()
	}

	#[rstest]
	fn test_load_orders_by_display_order(loaded: GalleryState) {
		assert_eq!(loaded.load_state(), &LoadState::Loaded);
		assert_eq!(titles(&loaded), vec!["palm", "marina", "hills", "skyline"]);
	}

	#[rstest]
	fn test_begin_load_only_once() {
		let mut gallery = GalleryState::new();
		assert!(gallery.begin_load());
		assert!(!gallery.begin_load());
	}

	#[rstest]
	fn test_failed_load_can_retry() {
		let mut gallery = GalleryState::new();
		gallery.begin_load();
		gallery.finish_load(Err(StoreError::Network("timeout".to_string())));

		assert_eq!(
			gallery.load_state(),
			&LoadState::Failed("Unable to load projects: network error: timeout".to_string())
		);
		assert!(gallery.begin_load());
	}

	#[rstest]
	fn test_clear_failure_only_resets_failed(loaded: GalleryState) {
		let mut loaded = loaded;
		loaded.clear_failure();
		assert_eq!(loaded.load_state(), &LoadState::Loaded);

		let mut gallery = GalleryState::new();
		gallery.begin_load();
		gallery.finish_load(Err(StoreError::Network("timeout".to_string())));
		gallery.clear_failure();
		assert_eq!(gallery.load_state(), &LoadState::Idle);
	}

	#[rstest]
	#[case(ProjectFilter::All, vec!["palm", "marina", "hills", "skyline"])]
	#[case(ProjectFilter::Villa, vec!["palm", "hills"])]
	#[case(ProjectFilter::Apartment, vec!["marina"])]
	#[case(ProjectFilter::House, vec![])]
	fn test_filter(
		mut loaded: GalleryState,
		#[case] filter: ProjectFilter,
		#[case] expected: Vec<&str>,
	) {
		loaded.set_filter(filter);
		assert_eq!(titles(&loaded), expected);
	}

	#[rstest]
	fn test_open_uses_visible_index(mut loaded: GalleryState) {
		loaded.set_filter(ProjectFilter::Villa);
		assert!(loaded.open(1));
		assert_eq!(loaded.lightbox().unwrap().project().title, "hills");
		assert!(!loaded.open(2));
	}

	#[rstest]
	fn test_lightbox_wraps_both_ways() {
		let mut lightbox = Lightbox::open(project("palm", "Villa", 1, 2));
		assert_eq!(lightbox.image(), "https://img.example/palm.jpg");
		assert_eq!(lightbox.caption(), "Image 1 of 3");

		lightbox.prev();
		assert_eq!(lightbox.index(), 2);
		assert_eq!(lightbox.image(), "https://img.example/palm-2.jpg");

		lightbox.next();
		assert_eq!(lightbox.index(), 0);
		lightbox.next();
		assert_eq!(lightbox.caption(), "Image 2 of 3");
	}

	#[rstest]
	fn test_lightbox_single_image_stays_put() {
		let mut lightbox = Lightbox::open(project("solo", "House", 1, 0));
		lightbox.next();
		assert_eq!(lightbox.index(), 0);
		lightbox.prev();
		assert_eq!(lightbox.index(), 0);
	}

	#[rstest]
	fn test_close(mut loaded: GalleryState) {
		loaded.open(0);
		loaded.next();
		loaded.close();
		assert!(loaded.lightbox().is_none());
		loaded.next();
	}

	#[rstest]
	#[case("all", Some(ProjectFilter::All))]
	#[case("penthouse", Some(ProjectFilter::Penthouse))]
	#[case("Villa", None)]
	fn test_filter_parse(#[case] id: &str, #[case] expected: Option<ProjectFilter>) {
		assert_eq!(ProjectFilter::parse(id), expected);
	}
}
