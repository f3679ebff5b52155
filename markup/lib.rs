/*!
A small HTML node tree with a builder API. Views build a `Node`, render it
to a string, and mount it with `Element::set_inner_html`.
*/

use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, From)]
pub enum Node {
	Element(Element),
	Text(Text),
	Raw(Raw),
	Fragment(Fragment),
}

#[derive(Clone)]
pub struct Text(pub Cow<'static, str>);

#[derive(Clone)]
pub struct Raw(pub Cow<'static, str>);

#[derive(Clone)]
pub struct Fragment {
	pub children: Vec<Node>,
}

#[derive(Clone)]
pub struct Element {
	name: &'static str,
	attributes: Vec<(&'static str, AttributeValue)>,
	children: Vec<Node>,
	void: bool,
}

#[derive(Clone)]
enum AttributeValue {
	Bool(bool),
	String(Cow<'static, str>),
}

pub fn el(name: &'static str) -> Element {
	Element::new(name)
}

pub fn text(value: impl Into<Cow<'static, str>>) -> Node {
	Node::Text(Text(value.into()))
}

pub fn raw(value: impl Into<Cow<'static, str>>) -> Node {
	Node::Raw(Raw(value.into()))
}

pub fn fragment(children: Vec<Node>) -> Node {
	Node::Fragment(Fragment { children })
}

impl Element {
	pub fn new(name: &'static str) -> Element {
		let void = matches!(
			name,
			"area"
				| "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
				| "param" | "source" | "track" | "wbr"
		);
		Element {
			name,
			attributes: Vec::new(),
			children: Vec::new(),
			void,
		}
	}

	pub fn attribute(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Element {
		self.attributes
			.push((key, AttributeValue::String(value.into())));
		self
	}

	pub fn attribute_opt(
		self,
		key: &'static str,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Element {
		match value {
			Some(value) => self.attribute(key, value),
			None => self,
		}
	}

	/// Boolean attributes render as the bare key, and only when set.
	pub fn boolean(mut self, key: &'static str, value: bool) -> Element {
		self.attributes.push((key, AttributeValue::Bool(value)));
		self
	}

	pub fn class(self, value: impl Into<Cow<'static, str>>) -> Element {
		self.attribute("class", value)
	}

	pub fn child(mut self, child: impl Into<Node>) -> Element {
		self.children.push(child.into());
		self
	}

	pub fn child_opt(self, child: Option<impl Into<Node>>) -> Element {
		match child {
			Some(child) => self.child(child),
			None => self,
		}
	}

	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Element {
		self.children.extend(children);
		self
	}

	pub fn text(self, value: impl Into<Cow<'static, str>>) -> Element {
		self.child(text(value))
	}
}

impl Node {
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::Text(Text(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::Text(Text(value.into()))
	}
}

impl From<Vec<Node>> for Node {
	fn from(children: Vec<Node>) -> Node {
		Node::Fragment(Fragment { children })
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::Element(element) => write!(f, "{}", element),
			Node::Text(text) => write_escaped(f, &text.0),
			Node::Raw(raw) => write!(f, "{}", raw.0),
			Node::Fragment(fragment) => {
				for child in fragment.children.iter() {
					write!(f, "{}", child)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if *value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					write!(f, r#" {}=""#, key)?;
					write_escaped(f, value)?;
					write!(f, r#"""#)?;
				}
			}
		}
		write!(f, ">")?;
		if !self.void {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'<' => write!(f, "&lt;")?,
			'>' => write!(f, "&gt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		}
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_render_element() {
		let node: Node = el("div")
			.class("wrapper")
			.child(el("span").text("hello"))
			.into();
		assert_eq!(
			node.render_to_string(),
			r#"<div class="wrapper"><span>hello</span></div>"#,
		);
	}

	#[test]
	fn test_escapes_text_and_attributes() {
		let node: Node = el("p")
			.attribute("title", r#"a "quoted" <value>"#)
			.text("1 < 2 && 3 > 2")
			.into();
		assert_eq!(
			node.render_to_string(),
			r#"<p title="a &quot;quoted&quot; &lt;value&gt;">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#,
		);
	}

	#[test]
	fn test_void_element() {
		let node: Node = el("input")
			.attribute("type", "date")
			.boolean("required", true)
			.into();
		assert_eq!(node.render_to_string(), r#"<input type="date" required>"#);
	}

	#[test]
	fn test_boolean_attribute_off() {
		let node: Node = el("button").boolean("disabled", false).text("go").into();
		assert_eq!(node.render_to_string(), "<button>go</button>");
	}

	#[test]
	fn test_fragment_and_raw() {
		let node = fragment(vec![raw("<!-- marker -->"), text("done")]);
		assert_eq!(node.render_to_string(), "<!-- marker -->done");
	}
}
