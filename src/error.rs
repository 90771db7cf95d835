//! Failures acquiring browser collaborators.
//!
//! None of these are fatal: callers log them and leave the feature disabled.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A browser collaborator that could not be reached.
#[derive(Debug, Error)]
pub enum HostError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// The document has no body.
	#[error("document has no body")]
	NoBody,
	/// The canvas refused a 2d context.
	#[error("2d canvas context unavailable")]
	NoContext,
	/// Local storage is disabled or missing.
	#[error("local storage unavailable")]
	NoStorage,
	/// A required element is not on the page.
	#[error("element not found: {0}")]
	MissingElement(&'static str),
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for HostError {
	fn from(value: JsValue) -> Self {
		HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Shorthand for the global window.
pub fn window() -> Result<web_sys::Window, HostError> {
	web_sys::window().ok_or(HostError::NoWindow)
}

/// Shorthand for the global document.
pub fn document() -> Result<web_sys::Document, HostError> {
	window()?.document().ok_or(HostError::NoDocument)
}

/// Current viewport size in whole pixels, `(0, 0)` for unreadable dimensions.
pub fn viewport_size(window: &web_sys::Window) -> (u32, u32) {
	let dim = |v: Result<JsValue, JsValue>| {
		v.ok()
			.and_then(|v| v.as_f64())
			.map(|f| f.max(0.0) as u32)
			.unwrap_or(0)
	};
	(dim(window.inner_width()), dim(window.inner_height()))
}
