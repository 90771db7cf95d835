//! Small DOM helpers shared by the page behaviors.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::error::HostError;

/// An event listener that is removed again when dropped.
pub struct Listener {
	target: EventTarget,
	event: String,
	closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
	/// Registers `handler` for `event` on `target`.
	pub fn new(
		target: &EventTarget,
		event: &str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, HostError> {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event: event.to_string(),
			closure: Some(closure),
		})
	}

	/// Keeps the listener registered for the lifetime of the page.
	pub fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		if let Some(closure) = self.closure.take() {
			let _ = self
				.target
				.remove_event_listener_with_callback(&self.event, closure.as_ref().unchecked_ref());
		}
	}
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> Result<(), HostError> {
	Listener::new(target, event, handler)?.forget();
	Ok(())
}

/// All elements matching `selector`, skipping anything that is not an element.
pub fn query_all(selector: &str) -> Result<Vec<Element>, HostError> {
	let list = crate::error::document()?.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Sets an inline style property, ignoring non-HTML elements.
pub fn set_style(element: &Element, property: &str, value: &str) {
	if let Some(el) = element.dyn_ref::<HtmlElement>() {
		let _ = el.style().set_property(property, value);
	}
}
