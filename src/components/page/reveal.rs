//! Reveal animations triggered by scrolling.
//!
//! Two mechanisms: skill bars and stat counters are checked against the
//! viewport on every scroll, while section blocks fade in through an
//! `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::counter;
use crate::components::dom;
use crate::error::{self, HostError};

/// An element counts as visible once its top is this far above the viewport bottom.
pub const VISIBLE_MARGIN: f64 = 150.0;

const SCROLL_TARGETS: &str = ".skill-progress, .stat-number";
const FADE_TARGETS: &str = ".project-card, .skill-category, .about-content, .contact-content";

/// Whether an element whose top sits at `element_top` should be revealed.
pub fn is_revealed(element_top: f64, viewport_height: f64) -> bool {
	element_top < viewport_height - VISIBLE_MARGIN
}

/// CSS width for a skill bar's `data-width` attribute.
pub fn skill_width(raw: Option<String>) -> String {
	format!("{}%", raw.unwrap_or_default().trim())
}

fn reveal_visible(elements: &[Element]) {
	let Ok(window) = error::window() else {
		return;
	};
	let (_, height) = error::viewport_size(&window);

	for element in elements {
		if !is_revealed(element.get_bounding_client_rect().top(), height as f64) {
			continue;
		}
		let classes = element.class_list();
		if classes.contains("skill-progress") {
			dom::set_style(element, "width", &skill_width(element.get_attribute("data-width")));
		}
		if classes.contains("stat-number") {
			if let Err(e) = counter::animate(element) {
				log::warn!("stat counter: {}", e);
			}
		}
	}
}

/// Reveals skill bars and starts counters as they scroll into view.
pub fn install_scroll_animations() -> Result<(), HostError> {
	let window = error::window()?;
	let elements = dom::query_all(SCROLL_TARGETS)?;

	let (on_scroll, on_load) = (elements.clone(), elements.clone());
	dom::listen(&window, "scroll", move |_| reveal_visible(&on_scroll))?;
	dom::listen(&window, "load", move |_| reveal_visible(&on_load))?;
	// The module may start after `load` has already fired.
	reveal_visible(&elements);
	Ok(())
}

/// Hides section blocks and fades them in when they intersect the viewport.
pub fn install_fade_in() -> Result<(), HostError> {
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		|entries: Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let target = entry.target();
					dom::set_style(&target, "opacity", "1");
					dom::set_style(&target, "transform", "translateY(0)");
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(0.1));
	options.set_root_margin("0px 0px -50px 0px");
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	callback.forget();

	for element in dom::query_all(FADE_TARGETS)? {
		dom::set_style(&element, "opacity", "0");
		dom::set_style(&element, "transform", "translateY(30px)");
		dom::set_style(&element, "transition", "opacity 0.6s ease, transform 0.6s ease");
		observer.observe(&element);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveal_threshold_sits_above_viewport_bottom() {
		assert!(is_revealed(0.0, 800.0));
		assert!(is_revealed(649.0, 800.0));
		assert!(!is_revealed(650.0, 800.0));
		assert!(!is_revealed(900.0, 800.0));
	}

	#[test]
	fn skill_width_is_a_percentage() {
		assert_eq!(skill_width(Some("85".into())), "85%");
		assert_eq!(skill_width(Some(" 40 ".into())), "40%");
		assert_eq!(skill_width(None), "%");
	}
}
