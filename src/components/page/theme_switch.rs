//! Dark/light theme switcher.
//!
//! The chosen scheme lives on `<body data-theme>` and is persisted as a single
//! string in local storage.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use log::{debug, warn};

use crate::error::{self, HostError};

/// Local storage key for the persisted scheme.
pub const STORAGE_KEY: &str = "theme";

const TOGGLE_STYLE: &str = "position: fixed; top: 50%; right: 30px; transform: translateY(-50%); \
	width: 50px; height: 50px; border: none; border-radius: 50%; background: #667eea; \
	color: white; font-size: 1.2rem; cursor: pointer; box-shadow: 0 2px 10px rgba(0,0,0,0.2); \
	transition: all 0.3s ease; z-index: 1000;";

/// Light or dark page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	/// Stock dark portfolio theme.
	#[default]
	Dark,
	/// Light variant.
	Light,
}

impl ColorScheme {
	/// Value stored and set on `data-theme`.
	pub fn as_str(self) -> &'static str {
		match self {
			ColorScheme::Dark => "dark",
			ColorScheme::Light => "light",
		}
	}

	/// The other scheme.
	pub fn toggled(self) -> Self {
		match self {
			ColorScheme::Dark => ColorScheme::Light,
			ColorScheme::Light => ColorScheme::Dark,
		}
	}

	/// Font Awesome icon shown on the toggle: the scheme you would switch to.
	pub fn icon(self) -> &'static str {
		match self {
			ColorScheme::Dark => "fa-sun",
			ColorScheme::Light => "fa-moon",
		}
	}

	/// Scheme from a stored value; anything unrecognised means dark.
	pub fn from_stored(value: Option<&str>) -> Self {
		value.and_then(|v| v.parse().ok()).unwrap_or_default()
	}
}

impl FromStr for ColorScheme {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"dark" => Ok(ColorScheme::Dark),
			"light" => Ok(ColorScheme::Light),
			_ => Err(()),
		}
	}
}

impl fmt::Display for ColorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn storage() -> Result<web_sys::Storage, HostError> {
	error::window()?.local_storage()?.ok_or(HostError::NoStorage)
}

fn load_scheme() -> ColorScheme {
	let stored = storage().ok().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	ColorScheme::from_stored(stored.as_deref())
}

fn save_scheme(scheme: ColorScheme) -> Result<(), HostError> {
	storage()?.set_item(STORAGE_KEY, scheme.as_str())?;
	Ok(())
}

fn apply_scheme(scheme: ColorScheme) -> Result<(), HostError> {
	let body = error::document()?.body().ok_or(HostError::NoBody)?;
	body.set_attribute("data-theme", scheme.as_str())?;
	Ok(())
}

/// Round floating button flipping between dark and light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let (scheme, set_scheme) = signal(load_scheme());

	Effect::new(move |_| {
		let current = scheme.get();
		if let Err(e) = apply_scheme(current) {
			warn!("theme switcher: cannot apply {}: {}", current, e);
		}
	});

	let on_click = move |_: web_sys::MouseEvent| {
		set_scheme.update(|s| *s = s.toggled());
		let current = scheme.get_untracked();
		debug!("theme switcher: now {}", current);
		if let Err(e) = save_scheme(current) {
			warn!("theme switcher: not persisted: {}", e);
		}
	};

	view! {
		<button class="theme-toggle" style=TOGGLE_STYLE on:click=on_click>
			<i class=move || format!("fas {}", scheme.get().icon())></i>
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_value_falls_back_to_dark() {
		assert_eq!(ColorScheme::from_stored(Some("light")), ColorScheme::Light);
		assert_eq!(ColorScheme::from_stored(Some("dark")), ColorScheme::Dark);
		assert_eq!(ColorScheme::from_stored(Some("sepia")), ColorScheme::Dark);
		assert_eq!(ColorScheme::from_stored(None), ColorScheme::Dark);
	}

	#[test]
	fn toggling_round_trips_and_swaps_icon() {
		let dark = ColorScheme::Dark;
		assert_eq!(dark.toggled(), ColorScheme::Light);
		assert_eq!(dark.toggled().toggled(), dark);
		assert_eq!(dark.icon(), "fa-sun");
		assert_eq!(dark.toggled().icon(), "fa-moon");
		assert_eq!(ColorScheme::Light.to_string(), "light");
	}
}
