//! Consultation booking page.

use luxe_pages::{ElementView, IntoView, View};

use super::page;
use crate::action::Action;
use crate::app::SiteState;
use crate::booking::{BUDGET_RANGES, DISABLED_MESSAGE, Field, PROJECT_TYPES, ReservationForm, SubmitState};
use crate::components::action_button;
use crate::components::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE};
use crate::view_id::ViewId;

/// `data-form` value identifying the booking form to the client.
pub const FORM_ID: &str = "reservation";

const EXPECTATIONS: [&str; 4] = [
	"Initial consultation to discuss your vision, requirements, and budget",
	"Site visit and detailed space assessment",
	"Preliminary design concepts and mood boards",
	"Detailed proposal with timeline and cost breakdown",
];

fn placeholder(field: Field) -> Option<&'static str> {
	match field {
		Field::ClientName => Some("John Doe"),
		Field::Email => Some("john@example.com"),
		Field::Phone => Some("+1 (555) 123-4567"),
		Field::Location => Some("Dubai Marina, UAE"),
		Field::Message => {
			Some("Tell us about your vision, style preferences, and any specific requirements...")
		}
		_ => None,
	}
}

fn select(
	field: Field,
	prompt: &'static str,
	options: &[&'static str],
	current: &str,
) -> ElementView {
	ElementView::new("select")
		.attr("id", field.name())
		.attr("name", field.name())
		.attr("required", "")
		.child(
			ElementView::new("option")
				.attr("value", "")
				.attr_if(current.is_empty(), "selected", "")
				.child(prompt),
		)
		.children(options.iter().map(|option| {
			ElementView::new("option")
				.attr("value", *option)
				.attr_if(*option == current, "selected", "")
				.child(*option)
		}))
}

fn control(form: &ReservationForm, field: Field) -> ElementView {
	let value = form.value(field).to_string();

	let input = match field {
		Field::ProjectType => select(field, "Select project type", &PROJECT_TYPES, &value),
		Field::BudgetRange => select(field, "Select budget range", &BUDGET_RANGES, &value),
		Field::Message => ElementView::new("textarea")
			.attr("id", field.name())
			.attr("name", field.name())
			.attr("rows", "5")
			.child(value),
		_ => {
			let kind = match field {
				Field::Email => "email",
				Field::Phone => "tel",
				Field::PreferredDate => "date",
				_ => "text",
			};
			ElementView::new("input")
				.attr("id", field.name())
				.attr("type", kind)
				.attr("name", field.name())
				.attr("value", value)
				.attr_if(field.is_required(), "required", "")
		}
	};
	let input = match placeholder(field) {
		Some(text) => input.attr("placeholder", text),
		None => input,
	};
	let error = form.error_for(field);
	let input = input.attr_if(error.is_some(), "aria-invalid", "true");

	ElementView::new("div")
		.attr("class", "field")
		.child(
			ElementView::new("label")
				.attr("for", field.name())
				.child(field.label()),
		)
		.child(input)
		.child(error.map(|message| {
			ElementView::new("p")
				.attr("class", "field__error")
				.attr("data-error-for", field.name())
				.child(message)
		}))
}

fn contact() -> ElementView {
	let item = |title: &'static str, text: &'static str| {
		ElementView::new("div")
			.attr("class", "contact__item")
			.child(ElementView::new("h3").child(title))
			.child(ElementView::new("p").child(text))
	};

	ElementView::new("aside")
		.attr("class", "contact")
		.child(ElementView::new("h2").child("Get in Touch"))
		.child(item("Email", CONTACT_EMAIL))
		.child(item("Phone", CONTACT_PHONE))
		.child(item("Location", CONTACT_LOCATION))
		.child(ElementView::new("h3").child("What to Expect"))
		.child(
			ElementView::new("ul")
				.children(EXPECTATIONS.iter().map(|e| ElementView::new("li").child(*e))),
		)
}

fn form(form: &ReservationForm, store_configured: bool) -> ElementView {
	let submitting = *form.state() == SubmitState::Submitting;

	let banner = match form.state() {
		SubmitState::Failed(message) => Some(
			ElementView::new("p")
				.attr("class", "form__error")
				.attr("role", "alert")
				.child(message.clone()),
		),
		_ if !store_configured => Some(
			ElementView::new("p")
				.attr("class", "form__notice")
				.attr("role", "status")
				.child(DISABLED_MESSAGE),
		),
		_ => None,
	};

	ElementView::new("form")
		.attr("class", "form")
		.attr("data-form", FORM_ID)
		.attr("novalidate", "")
		.child(banner)
		.children(Field::ALL.iter().map(|field| control(form, *field)))
		.child(
			ElementView::new("button")
				.attr("type", "submit")
				.attr("class", "cta")
				.attr_if(submitting || !store_configured, "disabled", "")
				.child(if submitting { "SUBMITTING..." } else { "SUBMIT REQUEST" }),
		)
}

fn thank_you() -> ElementView {
	ElementView::new("div")
		.attr("class", "thank-you")
		.attr("data-state", "succeeded")
		.child(ElementView::new("h2").child("Thank You!"))
		.child(ElementView::new("p").child(
			"Your consultation request has been received. Our team will contact you within 24 hours to schedule your appointment.",
		))
		.child(action_button(Action::Reset, "cta").child("SUBMIT ANOTHER REQUEST"))
}

/// Renders the booking page.
pub fn render(site: &SiteState) -> View {
	let root = page(ViewId::Reservation);

	if *site.reservation.state() == SubmitState::Succeeded {
		return root.child(thank_you()).into_view();
	}

	root.child(
		ElementView::new("header")
			.attr("class", "page-header")
			.child(ElementView::new("h1").child("Book Your Consultation"))
			.child(ElementView::new("p").child(
				"Take the first step towards your dream space. Share your vision with us, and let's create something extraordinary together.",
			)),
	)
	.child(
		ElementView::new("div")
			.attr("class", "booking")
			.child(contact())
			.child(form(&site.reservation, site.store_configured)),
	)
	.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use luxe_store::StoreError;
	use rstest::{fixture, rstest};

	#[fixture]
	fn site() -> SiteState {
		SiteState {
			store_configured: true,
			..SiteState::default()
		}
	}

	#[rstest]
	fn test_form_fields(site: SiteState) {
		let view = render(&site);
		let form = view.find_by_attr("data-form", FORM_ID).unwrap();
		let form = View::Element(form.clone());

		for field in Field::ALL {
			assert!(
				form.find_by_attr("name", field.name()).is_some(),
				"missing {}",
				field.name()
			);
		}
		let submit = form.find_by_attr("type", "submit").unwrap();
		assert_eq!(submit.get_attr("disabled"), None);
	}

	#[rstest]
	fn test_values_survive_rerender(mut site: SiteState) {
		site.reservation.set(Field::ClientName, "Nadia");
		site.reservation.set(Field::BudgetRange, BUDGET_RANGES[4]);

		let view = render(&site);
		let name = view.find_by_attr("name", "client_name").unwrap();
		assert_eq!(name.get_attr("value"), Some("Nadia"));

		let selected = view.find_all_with_attr("selected");
		assert!(
			selected
				.iter()
				.any(|option| option.get_attr("value") == Some("$500,000+"))
		);
	}

	#[rstest]
	fn test_field_errors_rendered(mut site: SiteState) {
		site.reservation.begin_submit(true);
		let view = render(&site);

		assert_eq!(view.find_all_with_attr("data-error-for").len(), 6);
		let email = view.find_by_attr("name", "email").unwrap();
		assert_eq!(email.get_attr("aria-invalid"), Some("true"));
	}

	#[rstest]
	fn test_unconfigured_store_disables_submit() {
		let view = render(&SiteState::default());
		assert!(view.text_content().contains(DISABLED_MESSAGE));
		let submit = view.find_by_attr("type", "submit").unwrap();
		assert_eq!(submit.get_attr("disabled"), Some(""));
	}

	#[rstest]
	fn test_failure_banner(mut site: SiteState) {
		site.reservation
			.finish_submit(Err(StoreError::Network("connection refused".to_string())));
		let view = render(&site);
		let alert = view.find_by_attr("role", "alert").unwrap();
		assert_eq!(
			View::Element(alert.clone()).text_content(),
			"network error: connection refused"
		);
	}

	#[rstest]
	fn test_thank_you_panel(mut site: SiteState) {
		site.reservation.finish_submit(Ok(()));
		let view = render(&site);

		assert!(view.find_by_attr("data-form", FORM_ID).is_none());
		let reset = view.find_by_attr("data-action", "reset").unwrap();
		assert_eq!(
			View::Element(reset.clone()).text_content(),
			"SUBMIT ANOTHER REQUEST"
		);
	}
}
