//! Page behaviors attached to the existing portfolio markup.
//!
//! Each behavior finds its own elements. A missing element disables that
//! behavior only; the rest of the page keeps working.

pub mod cards;
pub mod contact;
pub mod counter;
pub mod loader;
pub mod nav;
pub mod reveal;
pub mod theme_switch;
pub mod typing;
pub mod visibility;

use log::{info, warn};

pub use loader::LoadingSplash;
pub use theme_switch::ThemeToggle;
pub use typing::TypingConfig;

use crate::error::HostError;

fn report(name: &str, result: Result<(), HostError>) {
	match result {
		Ok(()) => info!("{}: ready", name),
		Err(e) => warn!("{}: disabled: {}", name, e),
	}
}

/// Attaches every DOM-driven behavior to the current document.
pub fn install(typing_config: TypingConfig) {
	report("navigation", nav::install());
	report("smooth scroll", nav::install_smooth_scroll());
	report("scroll animations", reveal::install_scroll_animations());
	report("typing effect", typing::install(typing_config));
	report("project cards", cards::install());
	report("contact form", contact::install());
	report("fade-in", reveal::install_fade_in());
	report("visibility", visibility::install());
}
