use crate::state::{Effect, Event, FlightQuery, State, ViewMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

pub mod animation;
pub mod predict;
pub mod state;
pub mod view;

/// Everything the component owns: the state machine plus the one scheduled
/// resource whose lifetime is tied to the landing view.
struct Context {
	state: State,
	animation: Option<animation::Animation>,
}

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	let context = Rc::new(RefCell::new(Context {
		state: State::new(),
		animation: None,
	}));
	mount_landing(&context);
}

fn mount_landing(context: &Rc<RefCell<Context>>) {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	let app = document.get_element_by_id("app").unwrap();
	app.set_inner_html(&view::landing().render_to_string());
	let plane = document
		.get_element_by_id("plane")
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	context.borrow_mut().animation = animation::Animation::start(&window, plane);
	let context_for_click = context.clone();
	let callback = Closure::wrap(Box::new(move || {
		dispatch(&context_for_click, Event::GetStarted);
	}) as Box<dyn FnMut()>);
	document
		.get_element_by_id("get-started")
		.unwrap()
		.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
		.unwrap();
	callback.forget();
}

fn mount_form(context: &Rc<RefCell<Context>>, document: &web_sys::Document) {
	let app = document.get_element_by_id("app").unwrap();
	app.set_inner_html(&view::form_page(&today()).render_to_string());
	let context_for_submit = context.clone();
	let callback = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		let document = web_sys::window().unwrap().document().unwrap();
		// Required fields are enforced by the browser before the submit
		// event fires; an unparseable value also never reaches the wire.
		if let Some(query) = read_query(&document) {
			dispatch(&context_for_submit, Event::SubmitRequested(query));
		}
	}));
	document
		.get_element_by_id("predict-form")
		.unwrap()
		.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
		.unwrap();
	callback.forget();
}

fn dispatch(context: &Rc<RefCell<Context>>, event: Event) {
	let effect = state::update(&mut context.borrow_mut().state, event);
	if let Some(effect) = effect {
		run_effect(context, effect);
	}
	render(context);
}

fn run_effect(context: &Rc<RefCell<Context>>, effect: Effect) {
	match effect {
		Effect::StopAnimation => {
			let animation = context.borrow_mut().animation.take();
			if let Some(animation) = animation {
				animation.stop(&web_sys::window().unwrap());
			}
		}
		Effect::SendPrediction(query) => {
			let context = context.clone();
			spawn_local(async move {
				match predict::fetch_prediction(&query).await {
					Ok(value) => dispatch(&context, Event::PredictionSucceeded(value)),
					Err(error) => {
						// Diagnostics only. The user sees the fixed message.
						console::error_1(
							&format!("Error fetching prediction: {}", error).into(),
						);
						dispatch(&context, Event::PredictionFailed);
					}
				}
			});
		}
	}
}

/// Brings the DOM in line with the current state. The form is mounted once
/// and never re-rendered wholesale, so the browser keeps ownership of the
/// field values; only the submit button and the result panel track state.
fn render(context: &Rc<RefCell<Context>>) {
	let document = web_sys::window().unwrap().document().unwrap();
	let state = context.borrow().state.clone();
	if state.view != ViewMode::Form {
		return;
	}
	if document.get_element_by_id("predict-form").is_none() {
		mount_form(context, &document);
	}
	let button = document
		.get_element_by_id("predict-button")
		.unwrap()
		.dyn_into::<web_sys::HtmlButtonElement>()
		.unwrap();
	button.set_disabled(state.submitting);
	button.set_inner_text(if state.submitting {
		view::SUBMITTING_LABEL
	} else {
		view::SUBMIT_LABEL
	});
	let result = document.get_element_by_id("result").unwrap();
	match &state.prediction {
		Some(prediction) => {
			result.set_inner_html(&view::result_panel(prediction).render_to_string())
		}
		None => result.set_inner_html(""),
	}
}

fn read_query(document: &web_sys::Document) -> Option<FlightQuery> {
	// Source and destination may be the same city; such queries are
	// forwarded unchanged, with no cross-field check.
	let departure_date = date_value(document, "departure_date")?;
	Some(FlightQuery {
		airline: select_value(document, "airline")?.parse().ok()?,
		source_city: select_value(document, "source_city")?.parse().ok()?,
		departure_time: select_value(document, "departure_time")?.parse().ok()?,
		stops: select_value(document, "stops")?.parse().ok()?,
		arrival_time: select_value(document, "arrival_time")?.parse().ok()?,
		destination_city: select_value(document, "destination_city")?.parse().ok()?,
		cabin_class: select_value(document, "class")?.parse().ok()?,
		departure_date,
	})
}

fn select_value(document: &web_sys::Document, id: &str) -> Option<String> {
	let select = document
		.get_element_by_id(id)?
		.dyn_into::<web_sys::HtmlSelectElement>()
		.ok()?;
	let value = select.value();
	if value.is_empty() {
		None
	} else {
		Some(value)
	}
}

fn date_value(document: &web_sys::Document, id: &str) -> Option<String> {
	let input = document
		.get_element_by_id(id)?
		.dyn_into::<web_sys::HtmlInputElement>()
		.ok()?;
	let value = input.value();
	if value.is_empty() {
		None
	} else {
		Some(value)
	}
}

fn today() -> String {
	let now = js_sys::Date::new_0();
	format!(
		"{:04}-{:02}-{:02}",
		now.get_full_year(),
		now.get_month() + 1,
		now.get_date(),
	)
}
