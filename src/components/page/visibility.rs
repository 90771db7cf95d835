//! Pauses CSS animations while the tab is hidden.

use crate::components::dom;
use crate::error::{self, HostError};

/// `animation-play-state` for a document that is (not) hidden.
pub fn play_state(hidden: bool) -> &'static str {
	if hidden { "paused" } else { "running" }
}

/// Pauses CSS animations while the tab is hidden.
pub fn install() -> Result<(), HostError> {
	let document = error::document()?;
	dom::listen(&document, "visibilitychange", |_| {
		let Ok(document) = error::document() else {
			return;
		};
		if let Some(body) = document.body() {
			let _ = body
				.style()
				.set_property("animation-play-state", play_state(document.hidden()));
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_pauses() {
		assert_eq!(play_state(true), "paused");
		assert_eq!(play_state(false), "running");
	}
}
