//! Hover lift and staggered entrance for project cards.

use crate::components::dom;
use crate::error::HostError;

const LIFTED: &str = "translateY(-10px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

/// Entrance delay for the card at `index`, 100 ms apart.
pub fn animation_delay(index: usize) -> String {
	format!("{}ms", index * 100)
}

/// Staggers project card entrance and adds hover lift.
pub fn install() -> Result<(), HostError> {
	for (index, card) in dom::query_all(".project-card")?.into_iter().enumerate() {
		dom::set_style(&card, "animation-delay", &animation_delay(index));

		let hovered = card.clone();
		dom::listen(&card, "mouseenter", move |_| {
			dom::set_style(&hovered, "transform", LIFTED)
		})?;
		let left = card.clone();
		dom::listen(&card, "mouseleave", move |_| {
			dom::set_style(&left, "transform", RESTING)
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delays_step_by_a_tenth_of_a_second() {
		assert_eq!(animation_delay(0), "0ms");
		assert_eq!(animation_delay(1), "100ms");
		assert_eq!(animation_delay(3), "300ms");
	}
}
