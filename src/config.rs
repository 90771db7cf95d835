//! Page-level configuration.
//!
//! Defaults reproduce the stock portfolio look. A page may override any subset
//! by embedding JSON in `<script id="fx-config" type="application/json">`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::page::typing::TypingConfig;
use crate::components::particles::{FieldStyle, TrailStyle};
use crate::error;

/// Id of the optional script element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Which effects are switched on.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Features {
	/// Drifting network behind the page.
	pub network_background: bool,
	/// Particle trail following the mouse.
	pub cursor_trail: bool,
	/// Light/dark toggle button.
	pub theme_switcher: bool,
	/// Splash shown until the page has loaded.
	pub loading_splash: bool,
}

impl Default for Features {
	fn default() -> Self {
		Self {
			network_background: true,
			cursor_trail: true,
			theme_switcher: true,
			loading_splash: true,
		}
	}
}

/// Complete effect configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	/// Effect switches.
	pub features: Features,
	/// Background network style.
	pub field: FieldStyle,
	/// Cursor trail style.
	pub trail: TrailStyle,
	/// Hero typing effect timings and phrases.
	pub typing: TypingConfig,
}

impl FxConfig {
	/// Parses a JSON override document; omitted keys keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Reads overrides from the page, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = config_text() else {
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!("netfolio-fx: loaded configuration overrides");
				config
			}
			Err(e) => {
				warn!("netfolio-fx: ignoring invalid configuration: {}", e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let document = error::document().ok()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_all_defaults() {
		let config = FxConfig::from_json("{}").unwrap();
		assert!(config.features.cursor_trail);
		assert_eq!(config.trail.capacity, 50);
		assert_eq!(config.field.link_distance, 100.0);
		assert_eq!(config.typing.phrases.len(), 4);
	}

	#[test]
	fn nested_overrides_apply() {
		let config = FxConfig::from_json(
			r#"{
				"features": { "cursor_trail": false },
				"trail": { "capacity": 10 },
				"typing": { "phrases": ["Rustacean"] }
			}"#,
		)
		.unwrap();
		assert!(!config.features.cursor_trail);
		assert!(config.features.network_background);
		assert_eq!(config.trail.capacity, 10);
		assert_eq!(config.typing.phrases, vec!["Rustacean".to_string()]);
		assert_eq!(config.typing.type_delay_ms, 150);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FxConfig::from_json("{ features: ").is_err());
	}
}
