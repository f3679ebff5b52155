use markup::{el, Node};

#[derive(Clone)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

#[derive(Clone)]
pub struct SelectFieldProps {
	pub id: Option<String>,
	pub label: Option<String>,
	pub name: Option<String>,
	pub options: Vec<SelectFieldOption>,
	pub placeholder: Option<String>,
	pub required: bool,
	pub value: Option<String>,
}

pub fn select_field(props: SelectFieldProps) -> Node {
	// A placeholder renders as a first option with an empty value, so a
	// required select rejects submission until a real option is chosen.
	let value_is_none = props.value.is_none();
	let placeholder = props.placeholder.map(|placeholder| {
		el("option")
			.attribute("value", "")
			.boolean("selected", value_is_none)
			.text(placeholder)
	});
	let value = props.value;
	let options = props.options.into_iter().map(move |option| {
		let selected = value.as_deref() == Some(option.value.as_str());
		el("option")
			.attribute("value", option.value)
			.boolean("selected", selected)
			.text(option.text)
			.into()
	});
	field_label(
		props.label,
		el("select")
			.class("form-select")
			.attribute_opt("id", props.id)
			.attribute_opt("name", props.name)
			.boolean("required", props.required)
			.child_opt(placeholder)
			.children(options)
			.into(),
	)
}

#[derive(Clone)]
pub struct DateFieldProps {
	pub id: Option<String>,
	pub label: Option<String>,
	pub min: Option<String>,
	pub name: Option<String>,
	pub required: bool,
	pub value: Option<String>,
}

pub fn date_field(props: DateFieldProps) -> Node {
	field_label(
		props.label,
		el("input")
			.class("form-date-field")
			.attribute("type", "date")
			.attribute_opt("id", props.id)
			.attribute_opt("min", props.min)
			.attribute_opt("name", props.name)
			.boolean("required", props.required)
			.attribute_opt("value", props.value)
			.into(),
	)
}

fn field_label(label: Option<String>, control: Node) -> Node {
	el("label")
		.class("field-label")
		.child_opt(label.map(|label| markup::text(label)))
		.child(control)
		.into()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_select_field_renders_placeholder_and_options() {
		let html = select_field(SelectFieldProps {
			id: Some("stops".to_owned()),
			label: Some("Stops".to_owned()),
			name: Some("stops".to_owned()),
			options: vec![
				SelectFieldOption {
					text: "Zero".to_owned(),
					value: "zero".to_owned(),
				},
				SelectFieldOption {
					text: "One".to_owned(),
					value: "one".to_owned(),
				},
			],
			placeholder: Some("Select Stops".to_owned()),
			required: true,
			value: None,
		})
		.render_to_string();
		assert!(html.contains("required"));
		assert!(html.contains(r#"<option value="" selected>Select Stops</option>"#));
		assert!(html.contains(r#"<option value="zero">Zero</option>"#));
		assert!(html.contains(r#"<option value="one">One</option>"#));
	}

	#[test]
	fn test_date_field_renders_min_constraint() {
		let html = date_field(DateFieldProps {
			id: Some("departure_date".to_owned()),
			label: Some("Departure Date".to_owned()),
			min: Some("2026-08-29".to_owned()),
			name: Some("departure_date".to_owned()),
			required: true,
			value: None,
		})
		.render_to_string();
		assert!(html.contains(r#"type="date""#));
		assert!(html.contains(r#"min="2026-08-29""#));
		assert!(html.contains("required"));
	}
}
