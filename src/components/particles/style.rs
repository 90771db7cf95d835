//! Visual style for the particle layers.
//!
//! Provides the accent color and the tunable parameters of the background
//! field and the cursor trail.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`, opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Teal accent shared by both particle layers.
pub const ACCENT: Color = Color::rgb(100, 255, 218);

/// Background network field configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Viewport area (px²) per particle.
	pub area_per_particle: f64,
	/// Full width of the velocity range; each axis is drawn from `[-speed/2, speed/2)`.
	pub speed: f64,
	/// Lower radius bound of a point.
	pub radius_min: f64,
	/// Upper radius bound.
	pub radius_max: f64,
	/// Lower opacity bound of a point.
	pub opacity_min: f64,
	/// Upper opacity bound.
	pub opacity_max: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Link opacity as distance approaches zero.
	pub link_opacity: f64,
	/// Stroke width of a link.
	pub link_width: f64,
	/// Color of points and links.
	pub color: Color,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			area_per_particle: 10_000.0,
			speed: 0.5,
			radius_min: 1.0,
			radius_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			link_distance: 100.0,
			link_opacity: 0.1,
			link_width: 0.5,
			color: ACCENT,
		}
	}
}

/// Cursor trail configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TrailStyle {
	/// Maximum live particles; the oldest are evicted beyond this.
	pub capacity: usize,
	/// Lower size bound at birth.
	pub size_min: f64,
	/// Upper size bound.
	pub size_max: f64,
	/// Lower bound of the life lost per frame.
	pub decay_min: f64,
	/// Upper decay bound.
	pub decay_max: f64,
	/// Each velocity axis is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Particle color; alpha follows remaining life.
	pub color: Color,
}

impl Default for TrailStyle {
	fn default() -> Self {
		Self {
			capacity: 50,
			size_min: 1.0,
			size_max: 4.0,
			decay_min: 0.01,
			decay_max: 0.03,
			max_speed: 1.0,
			color: ACCENT,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(ACCENT.to_css(), "#64ffda");
		assert_eq!(
			ACCENT.with_alpha(0.5).to_css(),
			"rgba(100, 255, 218, 0.5)"
		);
	}

	#[test]
	fn partial_style_overrides_keep_defaults() {
		let style: FieldStyle =
			serde_json::from_str(r#"{ "link_distance": 80.0, "color": { "r": 1, "g": 2, "b": 3 } }"#)
				.unwrap();
		assert_eq!(style.link_distance, 80.0);
		assert_eq!(style.area_per_particle, 10_000.0);
		assert_eq!(style.color, Color::rgb(1, 2, 3));
	}
}
