use crate::state::{Airline, CabinClass, City, DayPart, Prediction, Stops};
use airfare_ui as ui;
use markup::{el, fragment, Node};

pub const ERROR_MESSAGE: &str = "Error: Could not get prediction";
pub const SUBMIT_LABEL: &str = "Predict Price";
pub const SUBMITTING_LABEL: &str = "Predicting...";

pub fn landing() -> Node {
	el("div")
		.class("landing-wrapper")
		.child(
			el("h1")
				.class("landing-title")
				.text("Predict Your Flight Ticket Price here"),
		)
		.child(
			el("p")
				.class("landing-subtitle")
				.text("Know your airfare before you book!"),
		)
		.child(
			el("button")
				.class("button")
				.attribute("type", "button")
				.attribute("id", "get-started")
				.text("Get Started →"),
		)
		.child(
			el("div").class("flight-animation-container").child(
				el("img")
					.class("plane")
					.attribute("id", "plane")
					.attribute("src", "airplane.png")
					.attribute("alt", "Flying plane"),
			),
		)
		.into()
}

pub fn form_page(min_date: &str) -> Node {
	el("div")
		.class("form-wrapper")
		.child(
			el("div")
				.class("form-header")
				.child(el("h1").text("Flight Ticket Price Predictor"))
				.child(el("p").text("Enter your flight details to get a price estimate")),
		)
		.child(
			el("form")
				.class("form")
				.attribute("id", "predict-form")
				.child(
					el("div")
						.class("predict-form-grid")
						.child(ui::select_field(select_props(
							"airline",
							"Airline",
							"Select Airline",
							&Airline::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"source_city",
							"Source City",
							"Select Source City",
							&City::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"departure_time",
							"Departure Time",
							"Select Departure Time",
							&DayPart::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"stops",
							"Stops",
							"Select Stops",
							&Stops::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"arrival_time",
							"Arrival Time",
							"Select Arrival Time",
							&DayPart::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"destination_city",
							"Destination City",
							"Select Destination City",
							&City::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::select_field(select_props(
							"class",
							"Class",
							"Select Class",
							&CabinClass::OPTIONS
								.iter()
								.map(|option| (option.wire(), option.label()))
								.collect::<Vec<_>>(),
						)))
						.child(ui::date_field(ui::DateFieldProps {
							id: Some("departure_date".to_owned()),
							label: Some("Departure Date".to_owned()),
							min: Some(min_date.to_owned()),
							name: Some("departure_date".to_owned()),
							required: true,
							value: None,
						})),
				)
				.child(submit_button(false)),
		)
		.child(el("div").class("result-wrapper").attribute("id", "result"))
		.into()
}

pub fn submit_button(submitting: bool) -> Node {
	let label = if submitting {
		SUBMITTING_LABEL
	} else {
		SUBMIT_LABEL
	};
	ui::button(
		ui::ButtonProps {
			button_type: ui::ButtonType::Submit,
			disabled: submitting,
			id: Some("predict-button".to_owned()),
		},
		label.to_owned(),
	)
}

pub fn result_panel(prediction: &Prediction) -> Node {
	match prediction {
		Prediction::Price(value) => ui::callout(
			ui::Level::Success,
			Some("Estimated Flight Price".to_owned()),
			fragment(vec![
				el("p")
					.class("result-price")
					.text(ui::util::format_price(*value))
					.into(),
				el("p")
					.class("result-note")
					.text("Prices are estimates and may vary")
					.into(),
			]),
		),
		Prediction::Failed => ui::callout(
			ui::Level::Danger,
			Some("Error".to_owned()),
			el("p").class("result-price").text(ERROR_MESSAGE).into(),
		),
	}
}

fn select_props(
	name: &str,
	label: &str,
	placeholder: &str,
	options: &[(&'static str, &'static str)],
) -> ui::SelectFieldProps {
	ui::SelectFieldProps {
		id: Some(name.to_owned()),
		label: Some(label.to_owned()),
		name: Some(name.to_owned()),
		options: options
			.iter()
			.map(|(value, text)| ui::SelectFieldOption {
				text: (*text).to_owned(),
				value: (*value).to_owned(),
			})
			.collect(),
		placeholder: Some(placeholder.to_owned()),
		required: true,
		value: None,
	}
}
