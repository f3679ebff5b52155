use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const MIN_POSITION: i32 = -100;
pub const MAX_POSITION: i32 = 100;
const FRAME_INTERVAL_MS: i32 = 20;

/// Advances the plane one step, wrapping back to the left edge.
pub fn advance(position: i32) -> i32 {
	if position >= MAX_POSITION {
		MIN_POSITION
	} else {
		position + 1
	}
}

/// The landing-page interval timer. The closure stays alive exactly as
/// long as this handle does, so dropping it through `stop` guarantees no
/// callbacks fire after the form is shown.
pub struct Animation {
	interval_handle: i32,
	_callback: Closure<dyn FnMut()>,
}

impl Animation {
	pub fn start(window: &web_sys::Window, plane: web_sys::HtmlElement) -> Option<Animation> {
		let position = Rc::new(Cell::new(MIN_POSITION));
		let callback = Closure::wrap(Box::new(move || {
			position.set(advance(position.get()));
			let transform = format!("translateX({}%)", position.get());
			plane.style().set_property("transform", &transform).ok();
		}) as Box<dyn FnMut()>);
		let interval_handle = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				FRAME_INTERVAL_MS,
			)
			.ok()?;
		Some(Animation {
			interval_handle,
			_callback: callback,
		})
	}

	pub fn stop(self, window: &web_sys::Window) {
		window.clear_interval_with_handle(self.interval_handle);
	}
}
