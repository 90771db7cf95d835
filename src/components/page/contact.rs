//! Contact form feedback.
//!
//! Nothing is sent anywhere: submitting walks the button through a sending
//! and a sent state, then restores it and resets the form.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use crate::components::dom;
use crate::error::{self, HostError};

/// Button label while sending.
pub const SENDING_LABEL: &str = "Sending...";
/// Button label once sent.
pub const SENT_LABEL: &str = "Sent! ✓";
/// Button background once sent.
pub const SENT_BACKGROUND: &str = "#28a745";
/// How long the sending state lasts.
pub const SENDING_TIME: Duration = Duration::from_millis(1500);
/// How long the sent state lasts before the form resets.
pub const SENT_TIME: Duration = Duration::from_millis(2000);

/// Where the submit button is in its feedback cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
	/// Waiting for a submit.
	Idle,
	/// Pretending to send.
	Sending,
	/// Showing success before resetting.
	Sent,
}

/// What the submit button shows in a phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
	/// Button text.
	pub label: String,
	/// Whether the button accepts clicks.
	pub disabled: bool,
	/// Inline background, empty to fall back to the stylesheet.
	pub background: &'static str,
}

impl SubmitPhase {
	/// Button appearance in this phase.
	pub fn button(self, idle_label: &str) -> ButtonState {
		match self {
			SubmitPhase::Idle => ButtonState {
				label: idle_label.to_string(),
				disabled: false,
				background: "",
			},
			SubmitPhase::Sending => ButtonState {
				label: SENDING_LABEL.to_string(),
				disabled: true,
				background: "",
			},
			SubmitPhase::Sent => ButtonState {
				label: SENT_LABEL.to_string(),
				disabled: true,
				background: SENT_BACKGROUND,
			},
		}
	}
}

fn apply(button: &HtmlButtonElement, state: &ButtonState) {
	button.set_text_content(Some(&state.label));
	button.set_disabled(state.disabled);
	let _ = button.style().set_property("background", state.background);
}

/// Hooks the contact form submit feedback.
pub fn install() -> Result<(), HostError> {
	let document = error::document()?;
	let form: HtmlFormElement = document
		.query_selector(".contact-form")?
		.ok_or(HostError::MissingElement(".contact-form"))?
		.dyn_into()
		.map_err(|_| HostError::MissingElement(".contact-form"))?;
	let button: HtmlButtonElement = form
		.query_selector(r#"button[type="submit"]"#)?
		.and_then(|el| el.dyn_into().ok())
		.ok_or(HostError::MissingElement("contact submit button"))?;

	let phase = Rc::new(Cell::new(SubmitPhase::Idle));
	let form_submit = form.clone();
	dom::listen(&form, "submit", move |ev| {
		ev.prevent_default();
		if phase.get() != SubmitPhase::Idle {
			return;
		}

		let idle_label = button.text_content().unwrap_or_default();
		phase.set(SubmitPhase::Sending);
		apply(&button, &SubmitPhase::Sending.button(&idle_label));

		let (phase, button, form) = (phase.clone(), button.clone(), form_submit.clone());
		set_timeout(
			move || {
				phase.set(SubmitPhase::Sent);
				apply(&button, &SubmitPhase::Sent.button(&idle_label));

				set_timeout(
					move || {
						phase.set(SubmitPhase::Idle);
						apply(&button, &SubmitPhase::Idle.button(&idle_label));
						form.reset();
					},
					SENT_TIME,
				);
			},
			SENDING_TIME,
		);
	})?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idle_restores_button_label() {
		let state = SubmitPhase::Idle.button("Send Message");
		assert_eq!(state.label, "Send Message");
		assert!(!state.disabled);
		assert_eq!(state.background, "");
	}

	#[test]
	fn button_is_locked_until_idle() {
		assert!(SubmitPhase::Sending.button("x").disabled);
		let sent = SubmitPhase::Sent.button("x");
		assert!(sent.disabled);
		assert_eq!(sent.label, SENT_LABEL);
		assert_eq!(sent.background, SENT_BACKGROUND);
	}
}
