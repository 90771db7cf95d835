//! Navigation menu toggle, navbar backdrop and smooth anchor scrolling.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::components::dom;
use crate::error::{self, HostError};

/// Scroll offset past which the navbar turns more opaque.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Height of the fixed navbar, kept clear when scrolling to an anchor.
pub const NAVBAR_OFFSET: f64 = 70.0;

const ACTIVE: &str = "active";

/// Navbar background for the given vertical scroll position.
pub fn navbar_background(scroll_y: f64) -> &'static str {
	if scroll_y > SCROLLED_THRESHOLD {
		"rgba(0, 0, 0, 0.95)"
	} else {
		"rgba(0, 0, 0, 0.9)"
	}
}

/// Scroll destination for an anchor target at `offset_top`.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
	offset_top - NAVBAR_OFFSET
}

fn update_navbar() {
	let Ok(window) = error::window() else {
		return;
	};
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	if let Some(navbar) = window
		.document()
		.and_then(|d| d.query_selector(".navbar").ok().flatten())
	{
		dom::set_style(&navbar, "background", navbar_background(scroll_y));
	}
}

fn set_menu_open(menu: &Element, toggle: &Element, open: Option<bool>) {
	for el in [menu, toggle] {
		let classes = el.class_list();
		let _ = match open {
			None => classes.toggle(ACTIVE).map(|_| ()),
			Some(true) => classes.add_1(ACTIVE),
			Some(false) => classes.remove_1(ACTIVE),
		};
	}
}

/// Wires the burger toggle, link clicks and the scroll-dependent navbar.
pub fn install() -> Result<(), HostError> {
	let window = error::window()?;
	let document = error::document()?;
	let toggle = document
		.get_element_by_id("nav-toggle")
		.ok_or(HostError::MissingElement("#nav-toggle"))?;
	let menu = document
		.get_element_by_id("nav-menu")
		.ok_or(HostError::MissingElement("#nav-menu"))?;

	let (menu_t, toggle_t) = (menu.clone(), toggle.clone());
	dom::listen(&toggle, "click", move |_| set_menu_open(&menu_t, &toggle_t, None))?;

	for link in dom::query_all(".nav-link")? {
		let (menu_l, toggle_l) = (menu.clone(), toggle.clone());
		dom::listen(&link, "click", move |_| {
			set_menu_open(&menu_l, &toggle_l, Some(false))
		})?;
	}

	dom::listen(&window, "scroll", |_| update_navbar())?;
	update_navbar();
	Ok(())
}

/// Makes in-page anchor links scroll smoothly, leaving room for the navbar.
pub fn install_smooth_scroll() -> Result<(), HostError> {
	for anchor in dom::query_all(r##"a[href^="#"]"##)? {
		let href = anchor.get_attribute("href").unwrap_or_default();
		dom::listen(&anchor, "click", move |ev| {
			ev.prevent_default();
			let Ok(document) = error::document() else {
				return;
			};
			let target = document
				.query_selector(&href)
				.ok()
				.flatten()
				.and_then(|el| el.dyn_into::<HtmlElement>().ok());
			if let (Some(target), Ok(window)) = (target, error::window()) {
				let options = ScrollToOptions::new();
				options.set_top(anchor_scroll_top(target.offset_top() as f64));
				options.set_behavior(ScrollBehavior::Smooth);
				window.scroll_to_with_scroll_to_options(&options);
			}
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navbar_darkens_past_threshold() {
		assert_eq!(navbar_background(0.0), "rgba(0, 0, 0, 0.9)");
		assert_eq!(navbar_background(50.0), "rgba(0, 0, 0, 0.9)");
		assert_eq!(navbar_background(50.5), "rgba(0, 0, 0, 0.95)");
	}

	#[test]
	fn anchor_scroll_clears_navbar() {
		assert_eq!(anchor_scroll_top(700.0), 630.0);
		assert_eq!(anchor_scroll_top(20.0), -50.0);
	}
}
