use serde::Serialize;
use std::str::FromStr;

/*
The itinerary attributes the form collects. Each enum pins its wire values
to what the prediction service expects, carries the human-readable label
the form shows, and lists its options so the rendered `<select>` and the
serialized query can never disagree.
*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Airline {
	SpiceJet,
	AirAsia,
	Vistara,
	#[serde(rename = "GO_FIRST")]
	GoFirst,
	Indigo,
	#[serde(rename = "Air_India")]
	AirIndia,
}

impl Airline {
	pub const OPTIONS: [Airline; 6] = [
		Airline::SpiceJet,
		Airline::AirAsia,
		Airline::Vistara,
		Airline::GoFirst,
		Airline::Indigo,
		Airline::AirIndia,
	];

	pub fn wire(self) -> &'static str {
		match self {
			Airline::SpiceJet => "SpiceJet",
			Airline::AirAsia => "AirAsia",
			Airline::Vistara => "Vistara",
			Airline::GoFirst => "GO_FIRST",
			Airline::Indigo => "Indigo",
			Airline::AirIndia => "Air_India",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Airline::AirIndia => "Air India",
			Airline::GoFirst => "GO_FIRST",
			other => other.wire(),
		}
	}
}

impl FromStr for Airline {
	type Err = ();
	fn from_str(value: &str) -> Result<Airline, ()> {
		Airline::OPTIONS
			.iter()
			.copied()
			.find(|option| option.wire() == value)
			.ok_or(())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum City {
	Delhi,
	Mumbai,
	Bangalore,
	Kolkata,
	Hyderabad,
	Chennai,
}

impl City {
	pub const OPTIONS: [City; 6] = [
		City::Delhi,
		City::Mumbai,
		City::Bangalore,
		City::Kolkata,
		City::Hyderabad,
		City::Chennai,
	];

	pub fn wire(self) -> &'static str {
		match self {
			City::Delhi => "Delhi",
			City::Mumbai => "Mumbai",
			City::Bangalore => "Bangalore",
			City::Kolkata => "Kolkata",
			City::Hyderabad => "Hyderabad",
			City::Chennai => "Chennai",
		}
	}

	pub fn label(self) -> &'static str {
		self.wire()
	}
}

impl FromStr for City {
	type Err = ();
	fn from_str(value: &str) -> Result<City, ()> {
		City::OPTIONS
			.iter()
			.copied()
			.find(|option| option.wire() == value)
			.ok_or(())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DayPart {
	#[serde(rename = "Early_Morning")]
	EarlyMorning,
	Morning,
	Afternoon,
	Evening,
	Night,
	#[serde(rename = "Late_Night")]
	LateNight,
}

impl DayPart {
	pub const OPTIONS: [DayPart; 6] = [
		DayPart::EarlyMorning,
		DayPart::Morning,
		DayPart::Afternoon,
		DayPart::Evening,
		DayPart::Night,
		DayPart::LateNight,
	];

	pub fn wire(self) -> &'static str {
		match self {
			DayPart::EarlyMorning => "Early_Morning",
			DayPart::Morning => "Morning",
			DayPart::Afternoon => "Afternoon",
			DayPart::Evening => "Evening",
			DayPart::Night => "Night",
			DayPart::LateNight => "Late_Night",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			DayPart::EarlyMorning => "Early Morning",
			DayPart::LateNight => "Late Night",
			other => other.wire(),
		}
	}
}

impl FromStr for DayPart {
	type Err = ();
	fn from_str(value: &str) -> Result<DayPart, ()> {
		DayPart::OPTIONS
			.iter()
			.copied()
			.find(|option| option.wire() == value)
			.ok_or(())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Stops {
	#[serde(rename = "zero")]
	Zero,
	#[serde(rename = "one")]
	One,
	#[serde(rename = "two_or_more")]
	TwoOrMore,
}

impl Stops {
	pub const OPTIONS: [Stops; 3] = [Stops::Zero, Stops::One, Stops::TwoOrMore];

	pub fn wire(self) -> &'static str {
		match self {
			Stops::Zero => "zero",
			Stops::One => "one",
			Stops::TwoOrMore => "two_or_more",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Stops::Zero => "Zero",
			Stops::One => "One",
			Stops::TwoOrMore => "Two or More",
		}
	}
}

impl FromStr for Stops {
	type Err = ();
	fn from_str(value: &str) -> Result<Stops, ()> {
		Stops::OPTIONS
			.iter()
			.copied()
			.find(|option| option.wire() == value)
			.ok_or(())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CabinClass {
	Economy,
	Business,
}

impl CabinClass {
	pub const OPTIONS: [CabinClass; 2] = [CabinClass::Economy, CabinClass::Business];

	pub fn wire(self) -> &'static str {
		match self {
			CabinClass::Economy => "Economy",
			CabinClass::Business => "Business",
		}
	}

	pub fn label(self) -> &'static str {
		self.wire()
	}
}

impl FromStr for CabinClass {
	type Err = ();
	fn from_str(value: &str) -> Result<CabinClass, ()> {
		CabinClass::OPTIONS
			.iter()
			.copied()
			.find(|option| option.wire() == value)
			.ok_or(())
	}
}

/// The itinerary record sent to the prediction service. The serialized
/// field names are part of the wire contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlightQuery {
	pub airline: Airline,
	pub source_city: City,
	pub departure_time: DayPart,
	pub stops: Stops,
	pub arrival_time: DayPart,
	pub destination_city: City,
	#[serde(rename = "class")]
	pub cabin_class: CabinClass,
	pub departure_date: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMode {
	Landing,
	Form,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Prediction {
	Price(f64),
	Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
	pub view: ViewMode,
	pub submitting: bool,
	pub prediction: Option<Prediction>,
}

impl State {
	pub fn new() -> State {
		State {
			view: ViewMode::Landing,
			submitting: false,
			prediction: None,
		}
	}
}

impl Default for State {
	fn default() -> State {
		State::new()
	}
}

#[derive(Clone, Debug)]
pub enum Event {
	GetStarted,
	SubmitRequested(FlightQuery),
	PredictionSucceeded(f64),
	PredictionFailed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
	StopAnimation,
	SendPrediction(FlightQuery),
}

/// The whole view lifecycle as one transition function. Handlers dispatch
/// events here and interpret the returned effect.
pub fn update(state: &mut State, event: Event) -> Option<Effect> {
	match event {
		Event::GetStarted => match state.view {
			ViewMode::Landing => {
				state.view = ViewMode::Form;
				Some(Effect::StopAnimation)
			}
			// The landing page never comes back within a session.
			ViewMode::Form => None,
		},
		Event::SubmitRequested(query) => {
			if state.view != ViewMode::Form || state.submitting {
				return None;
			}
			state.submitting = true;
			Some(Effect::SendPrediction(query))
		}
		// A response always overwrites the stored result, even a late one
		// from a superseded submission: last write wins.
		Event::PredictionSucceeded(value) => {
			state.submitting = false;
			state.prediction = Some(Prediction::Price(value));
			None
		}
		Event::PredictionFailed => {
			state.submitting = false;
			state.prediction = Some(Prediction::Failed);
			None
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn query() -> FlightQuery {
		FlightQuery {
			airline: Airline::Vistara,
			source_city: City::Delhi,
			departure_time: DayPart::Morning,
			stops: Stops::Zero,
			arrival_time: DayPart::Evening,
			destination_city: City::Mumbai,
			cabin_class: CabinClass::Economy,
			departure_date: "2026-09-15".to_owned(),
		}
	}

	#[test]
	fn test_query_wire_format() {
		let json = serde_json::to_value(&query()).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"airline": "Vistara",
				"source_city": "Delhi",
				"departure_time": "Morning",
				"stops": "zero",
				"arrival_time": "Evening",
				"destination_city": "Mumbai",
				"class": "Economy",
				"departure_date": "2026-09-15",
			}),
		);
	}

	#[test]
	fn test_serde_matches_wire_names() {
		for airline in Airline::OPTIONS.iter() {
			let json = serde_json::to_value(airline).unwrap();
			assert_eq!(json, serde_json::Value::String(airline.wire().to_owned()));
		}
		for day_part in DayPart::OPTIONS.iter() {
			let json = serde_json::to_value(day_part).unwrap();
			assert_eq!(json, serde_json::Value::String(day_part.wire().to_owned()));
		}
		for stops in Stops::OPTIONS.iter() {
			let json = serde_json::to_value(stops).unwrap();
			assert_eq!(json, serde_json::Value::String(stops.wire().to_owned()));
		}
	}

	#[test]
	fn test_wire_values_round_trip() {
		for airline in Airline::OPTIONS.iter() {
			assert_eq!(airline.wire().parse::<Airline>(), Ok(*airline));
		}
		for city in City::OPTIONS.iter() {
			assert_eq!(city.wire().parse::<City>(), Ok(*city));
		}
		assert!("Select Airline".parse::<Airline>().is_err());
		assert!("".parse::<City>().is_err());
	}

	#[test]
	fn test_starts_on_landing() {
		let state = State::new();
		assert_eq!(state.view, ViewMode::Landing);
		assert!(!state.submitting);
		assert!(state.prediction.is_none());
	}

	#[test]
	fn test_get_started_is_one_way() {
		let mut state = State::new();
		let effect = update(&mut state, Event::GetStarted);
		assert_eq!(state.view, ViewMode::Form);
		assert_eq!(effect, Some(Effect::StopAnimation));
		// A second activation must not restart the animation.
		let effect = update(&mut state, Event::GetStarted);
		assert_eq!(state.view, ViewMode::Form);
		assert_eq!(effect, None);
	}

	#[test]
	fn test_submit_ignored_on_landing() {
		let mut state = State::new();
		let effect = update(&mut state, Event::SubmitRequested(query()));
		assert_eq!(effect, None);
		assert!(!state.submitting);
	}

	#[test]
	fn test_submit_sends_request_and_disables_resubmit() {
		let mut state = State::new();
		update(&mut state, Event::GetStarted);
		let effect = update(&mut state, Event::SubmitRequested(query()));
		assert_eq!(effect, Some(Effect::SendPrediction(query())));
		assert!(state.submitting);
		// Submitting again while a request is outstanding is a no-op.
		let effect = update(&mut state, Event::SubmitRequested(query()));
		assert_eq!(effect, None);
	}

	#[test]
	fn test_success_and_failure_resolve_to_idle() {
		let mut state = State::new();
		update(&mut state, Event::GetStarted);
		update(&mut state, Event::SubmitRequested(query()));
		update(&mut state, Event::PredictionSucceeded(4523.7));
		assert!(!state.submitting);
		assert_eq!(state.prediction, Some(Prediction::Price(4523.7)));
		update(&mut state, Event::SubmitRequested(query()));
		update(&mut state, Event::PredictionFailed);
		assert!(!state.submitting);
		assert_eq!(state.prediction, Some(Prediction::Failed));
	}

	#[test]
	fn test_resubmit_supersedes_previous_result() {
		let mut state = State::new();
		update(&mut state, Event::GetStarted);
		update(&mut state, Event::SubmitRequested(query()));
		update(&mut state, Event::PredictionSucceeded(1000.0));
		update(&mut state, Event::SubmitRequested(query()));
		update(&mut state, Event::PredictionSucceeded(2000.0));
		assert_eq!(state.prediction, Some(Prediction::Price(2000.0)));
	}

	#[test]
	fn test_overlapping_responses_last_write_wins() {
		let mut state = State::new();
		update(&mut state, Event::GetStarted);
		update(&mut state, Event::SubmitRequested(query()));
		// First response resolves, user resubmits, then a second response
		// lands. Whatever resolves last is what stays displayed.
		update(&mut state, Event::PredictionFailed);
		update(&mut state, Event::SubmitRequested(query()));
		update(&mut state, Event::PredictionSucceeded(3200.4));
		assert_eq!(state.prediction, Some(Prediction::Price(3200.4)));
		assert!(!state.submitting);
		// A straggler from the superseded request overwrites again.
		update(&mut state, Event::PredictionFailed);
		assert_eq!(state.prediction, Some(Prediction::Failed));
	}
}
