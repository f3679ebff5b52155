use markup::{el, Node};

#[derive(Clone)]
pub enum ButtonType {
	Submit,
	Button,
	Reset,
}

#[derive(Clone)]
pub struct ButtonProps {
	pub button_type: ButtonType,
	pub disabled: bool,
	pub id: Option<String>,
}

pub fn button(props: ButtonProps, label: String) -> Node {
	let button_type = match props.button_type {
		ButtonType::Submit => "submit",
		ButtonType::Button => "button",
		ButtonType::Reset => "reset",
	};
	el("button")
		.class("button")
		.attribute("type", button_type)
		.attribute_opt("id", props.id)
		.boolean("disabled", props.disabled)
		.text(label)
		.into()
}
