use markup::{el, Node};

#[derive(Clone)]
pub enum Level {
	Info,
	Success,
	Warning,
	Danger,
}

pub fn callout(level: Level, title: Option<String>, children: Node) -> Node {
	let level_class = match level {
		Level::Info => "callout-wrapper-info",
		Level::Success => "callout-wrapper-success",
		Level::Warning => "callout-wrapper-warning",
		Level::Danger => "callout-wrapper-danger",
	};
	el("div")
		.class(format!("callout-wrapper {}", level_class))
		.child_opt(title.map(|title| el("div").class("callout-title").text(title)))
		.child(el("div").class("callout-inner").child(children))
		.into()
}
