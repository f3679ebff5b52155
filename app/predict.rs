use crate::state::FlightQuery;
use derive_more::{Display, Error};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The prediction service endpoint. The service is an external
/// collaborator; everything about it beyond this URL and the shape of its
/// response is out of scope.
pub const PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

/// What can go wrong on the round trip. All variants collapse to the same
/// user-visible message; the distinction exists for console diagnostics.
#[derive(Debug, Display, Error)]
pub enum PredictError {
	#[display(fmt = "the prediction request could not be sent")]
	Request,
	#[display(fmt = "the prediction service responded with status {}", _0)]
	Status(#[error(not(source))] u16),
	#[display(fmt = "the prediction service response had no numeric prediction field")]
	Payload,
}

/// Posts the query to the prediction service and extracts the predicted
/// price. No timeout: a hung request never resolves.
pub async fn fetch_prediction(query: &FlightQuery) -> Result<f64, PredictError> {
	let window = web_sys::window().ok_or(PredictError::Request)?;
	let body = serde_json::to_string(query).map_err(|_| PredictError::Request)?;
	let mut init = web_sys::RequestInit::new();
	init.method("POST");
	init.body(Some(&JsValue::from_str(&body)));
	let request = web_sys::Request::new_with_str_and_init(PREDICT_URL, &init)
		.map_err(|_| PredictError::Request)?;
	request
		.headers()
		.set("Content-Type", "application/json")
		.map_err(|_| PredictError::Request)?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|_| PredictError::Request)?;
	let response = response
		.dyn_into::<web_sys::Response>()
		.map_err(|_| PredictError::Request)?;
	if !response.ok() {
		return Err(PredictError::Status(response.status()));
	}
	let json = JsFuture::from(response.json().map_err(|_| PredictError::Payload)?)
		.await
		.map_err(|_| PredictError::Payload)?;
	let prediction = js_sys::Reflect::get(&json, &JsValue::from_str("prediction"))
		.ok()
		.and_then(|value| value.as_f64())
		.filter(|value| value.is_finite())
		.ok_or(PredictError::Payload)?;
	Ok(prediction)
}
