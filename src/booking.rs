//! Consultation booking form.

use chrono::NaiveDate;
use luxe_store::{ConsultationRequest, StoreError};

/// Project types offered in the form.
pub const PROJECT_TYPES: [&str; 6] = [
	"Villa Interior Design",
	"Apartment Interior Design",
	"Penthouse Design",
	"House Renovation",
	"Commercial Space",
	"Other",
];

/// Budget ranges offered in the form.
pub const BUDGET_RANGES: [&str; 6] = [
	"Under $50,000",
	"$50,000 - $100,000",
	"$100,000 - $250,000",
	"$250,000 - $500,000",
	"$500,000+",
	"To be discussed",
];

/// Shown instead of submitting when no record store is configured.
pub const DISABLED_MESSAGE: &str = "Submission disabled: record store is not configured.";

/// Shown when the store rejects a submission without saying why.
pub const FALLBACK_ERROR: &str = "Failed to submit. Please try again.";

/// Form inputs, named as in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	/// Full name.
	ClientName,
	/// Email address.
	Email,
	/// Phone number.
	Phone,
	/// One of [`PROJECT_TYPES`].
	ProjectType,
	/// Project location.
	Location,
	/// One of [`BUDGET_RANGES`].
	BudgetRange,
	/// `YYYY-MM-DD`, optional.
	PreferredDate,
	/// Free text, optional.
	Message,
}

impl Field {
	/// Every input, in form order.
	pub const ALL: [Field; 8] = [
		Field::ClientName,
		Field::Email,
		Field::Phone,
		Field::ProjectType,
		Field::Location,
		Field::BudgetRange,
		Field::PreferredDate,
		Field::Message,
	];

	/// Input `name` attribute.
	pub fn name(&self) -> &'static str {
		match self {
			Field::ClientName => "client_name",
			Field::Email => "email",
			Field::Phone => "phone",
			Field::ProjectType => "project_type",
			Field::Location => "location",
			Field::BudgetRange => "budget_range",
			Field::PreferredDate => "preferred_date",
			Field::Message => "message",
		}
	}

	/// Label text.
	pub fn label(&self) -> &'static str {
		match self {
			Field::ClientName => "FULL NAME *",
			Field::Email => "EMAIL ADDRESS *",
			Field::Phone => "PHONE NUMBER *",
			Field::ProjectType => "PROJECT TYPE *",
			Field::Location => "PROJECT LOCATION *",
			Field::BudgetRange => "BUDGET RANGE *",
			Field::PreferredDate => "PREFERRED CONSULTATION DATE",
			Field::Message => "ADDITIONAL DETAILS",
		}
	}

	/// Looks up a field by input name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.name() == name)
	}

	/// Whether the field must be filled.
	pub fn is_required(&self) -> bool {
		!matches!(self, Field::PreferredDate | Field::Message)
	}

	fn index(self) -> usize {
		self as usize
	}
}

/// A validation failure on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
	/// The offending field.
	pub field: Field,
	/// What is wrong.
	pub message: &'static str,
}

/// Submission progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
	/// Filling in the form.
	#[default]
	Editing,
	/// Insert in flight.
	Submitting,
	/// Stored; the thank-you panel is shown.
	Succeeded,
	/// Rejected; the reason is shown above the form.
	Failed(String),
}

/// Values and progress of the booking form.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
	values: [String; 8],
	state: SubmitState,
	errors: Vec<FieldError>,
}

impl ReservationForm {
	/// Empty form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current value of `field`.
	pub fn value(&self, field: Field) -> &str {
		&self.values[field.index()]
	}

	/// Sets `field`, clearing any error reported for it.
	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		self.values[field.index()] = value.into();
		self.errors.retain(|e| e.field != field);
	}

	/// Sets fields from `(name, value)` pairs, ignoring unknown names.
	pub fn set_all<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, String)>) {
		for (name, value) in pairs {
			if let Some(field) = Field::from_name(name) {
				self.set(field, value);
			}
		}
	}

	/// Submission progress.
	pub fn state(&self) -> &SubmitState {
		&self.state
	}

	/// Errors from the last validation.
	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	/// Error reported for `field`, if any.
	pub fn error_for(&self, field: Field) -> Option<&'static str> {
		self.errors
			.iter()
			.find(|e| e.field == field)
			.map(|e| e.message)
	}

	/// Checks the values and builds the request.
	pub fn validate(&self) -> Result<ConsultationRequest, Vec<FieldError>> {
		let mut errors = Vec::new();

		for field in Field::ALL {
			if field.is_required() && self.value(field).trim().is_empty() {
				errors.push(FieldError {
					field,
					message: "This field is required.",
				});
			}
		}

		let email = self.value(Field::Email).trim();
		if !email.is_empty() && !email.contains('@') {
			errors.push(FieldError {
				field: Field::Email,
				message: "Enter a valid email address.",
			});
		}

		let date = self.value(Field::PreferredDate).trim();
		let preferred_date = if date.is_empty() {
			None
		} else {
			match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
				Ok(date) => Some(date),
				Err(_) => {
					errors.push(FieldError {
						field: Field::PreferredDate,
						message: "Enter a valid date.",
					});
					None
				}
			}
		};

		if !errors.is_empty() {
			return Err(errors);
		}

		let text = |field: Field| self.value(field).trim().to_string();
		let message = text(Field::Message);
		Ok(ConsultationRequest {
			client_name: text(Field::ClientName),
			email: text(Field::Email),
			phone: text(Field::Phone),
			project_type: text(Field::ProjectType),
			location: text(Field::Location),
			budget_range: text(Field::BudgetRange),
			preferred_date,
			message: (!message.is_empty()).then_some(message),
		})
	}

	/// Starts a submission.
	///
	/// Returns the request to send, or `None` when the form is invalid, the
	/// store is not configured, or a submission is already running.
	pub fn begin_submit(&mut self, store_configured: bool) -> Option<ConsultationRequest> {
		if self.state == SubmitState::Submitting {
			return None;
		}
		if !store_configured {
			self.state = SubmitState::Failed(DISABLED_MESSAGE.to_string());
			return None;
		}

		match self.validate() {
			Ok(request) => {
				self.errors.clear();
				self.state = SubmitState::Submitting;
				Some(request)
			}
			Err(errors) => {
				self.errors = errors;
				self.state = SubmitState::Editing;
				None
			}
		}
	}

	/// Records the store's answer. Success clears the fields.
	pub fn finish_submit(&mut self, result: Result<(), StoreError>) {
		match result {
			Ok(()) => {
				self.values = Default::default();
				self.state = SubmitState::Succeeded;
			}
			Err(StoreError::NotConfigured) => {
				self.state = SubmitState::Failed(DISABLED_MESSAGE.to_string());
			}
			Err(e) => {
				let message = e.to_string();
				self.state = SubmitState::Failed(if message.trim().is_empty() {
					FALLBACK_ERROR.to_string()
				} else {
					message
				});
			}
		}
	}

	/// Back to editing; values are kept unless the last submission succeeded.
	/// Does nothing while a submission is in flight.
	pub fn reset(&mut self) {
		if self.state == SubmitState::Submitting {
			return;
		}
		self.state = SubmitState::Editing;
		self.errors.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn filled() -> ReservationForm {
		let mut form = ReservationForm::new();
		form.set(Field::ClientName, "John Doe");
		form.set(Field::Email, "john@example.com");
		form.set(Field::Phone, "+1 (555) 123-4567");
		form.set(Field::ProjectType, PROJECT_TYPES[0]);
		form.set(Field::Location, "Dubai Marina, UAE");
		form.set(Field::BudgetRange, BUDGET_RANGES[2]);
		form
	}

	#[rstest]
	fn test_valid_form_builds_request(filled: ReservationForm) {
		let request = filled.validate().unwrap();
		assert_eq!(request.client_name, "John Doe");
		assert_eq!(request.budget_range, "$100,000 - $250,000");
		assert_eq!(request.preferred_date, None);
		assert_eq!(request.message, None);
	}

	#[rstest]
	fn test_empty_form_lists_required_fields() {
		let errors = ReservationForm::new().validate().unwrap_err();
		let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
		assert_eq!(
			fields,
			vec![
				Field::ClientName,
				Field::Email,
				Field::Phone,
				Field::ProjectType,
				Field::Location,
				Field::BudgetRange,
			]
		);
	}

	#[rstest]
	fn test_whitespace_is_blank(mut filled: ReservationForm) {
		filled.set(Field::Location, "   ");
		let errors = filled.validate().unwrap_err();
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].field, Field::Location);
	}

	#[rstest]
	fn test_email_needs_at_sign(mut filled: ReservationForm) {
		filled.set(Field::Email, "john.example.com");
		assert_eq!(
			filled.validate().unwrap_err(),
			vec![FieldError {
				field: Field::Email,
				message: "Enter a valid email address.",
			}]
		);
	}

	#[rstest]
	#[case("2025-06-01", Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()))]
	#[case("", None)]
	fn test_preferred_date(
		mut filled: ReservationForm,
		#[case] raw: &str,
		#[case] expected: Option<NaiveDate>,
	) {
		filled.set(Field::PreferredDate, raw);
		assert_eq!(filled.validate().unwrap().preferred_date, expected);
	}

	#[rstest]
	fn test_bad_date_is_error(mut filled: ReservationForm) {
		filled.set(Field::PreferredDate, "next week");
		assert_eq!(
			filled.validate().unwrap_err()[0].field,
			Field::PreferredDate
		);
	}

	#[rstest]
	fn test_submit_lifecycle(mut filled: ReservationForm) {
		let request = filled.begin_submit(true).unwrap();
		assert_eq!(filled.state(), &SubmitState::Submitting);
		assert!(filled.begin_submit(true).is_none());

		filled.finish_submit(Ok(()));
		assert_eq!(filled.state(), &SubmitState::Succeeded);
		assert_eq!(filled.value(Field::ClientName), "");
		assert_eq!(request.email, "john@example.com");

		filled.reset();
		assert_eq!(filled.state(), &SubmitState::Editing);
	}

	#[rstest]
	fn test_reset_ignored_while_submitting(mut filled: ReservationForm) {
		filled.begin_submit(true).unwrap();
		filled.reset();
		assert_eq!(filled.state(), &SubmitState::Submitting);
	}

	#[rstest]
	fn test_submit_failure_keeps_values(mut filled: ReservationForm) {
		filled.begin_submit(true).unwrap();
		filled.finish_submit(Err(StoreError::Rejected {
			status: 400,
			message: "duplicate key".to_string(),
		}));

		assert_eq!(filled.state(), &SubmitState::Failed("duplicate key".to_string()));
		assert_eq!(filled.value(Field::ClientName), "John Doe");
	}

	#[rstest]
	fn test_submit_failure_without_message(mut filled: ReservationForm) {
		filled.begin_submit(true).unwrap();
		filled.finish_submit(Err(StoreError::Rejected {
			status: 500,
			message: String::new(),
		}));
		assert_eq!(filled.state(), &SubmitState::Failed(FALLBACK_ERROR.to_string()));
	}

	#[rstest]
	fn test_unconfigured_store_disables_submit(mut filled: ReservationForm) {
		assert!(filled.begin_submit(false).is_none());
		assert_eq!(
			filled.state(),
			&SubmitState::Failed(DISABLED_MESSAGE.to_string())
		);
	}

	#[rstest]
	fn test_invalid_submit_records_errors() {
		let mut form = ReservationForm::new();
		assert!(form.begin_submit(true).is_none());
		assert_eq!(form.errors().len(), 6);
		assert_eq!(form.error_for(Field::Phone), Some("This field is required."));

		form.set(Field::Phone, "123");
		assert_eq!(form.error_for(Field::Phone), None);
	}

	#[rstest]
	fn test_set_all_ignores_unknown_names() {
		let mut form = ReservationForm::new();
		form.set_all([
			("client_name", "Jane".to_string()),
			("nickname", "J".to_string()),
		]);
		assert_eq!(form.value(Field::ClientName), "Jane");
	}
}
