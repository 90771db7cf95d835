//! Ambient network field drawn behind the page content.
//!
//! Points drift at constant velocity and bounce off the viewport edges. Every
//! pair closer than the link distance is joined by a line that fades with
//! distance. The pairwise pass is O(n²); the population is bounded by the
//! viewport area, one point per `area_per_particle` px².

use rand::Rng;

use super::frame::Simulation;
use super::style::FieldStyle;
use super::surface::Surface;

/// A drifting point of the background field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParticle {
	/// Position.
	pub x: f64,
	pub y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	pub vy: f64,
	/// Dot radius.
	pub radius: f64,
	/// Dot opacity.
	pub opacity: f64,
}

/// Number of points for a viewport of the given size.
pub fn particle_count(width: u32, height: u32, area_per_particle: f64) -> usize {
	if area_per_particle <= 0.0 {
		return 0;
	}
	(width as f64 * height as f64 / area_per_particle).floor() as usize
}

/// Opacity of the link between two points `distance` apart, or `None` when
/// they are too far apart to be linked.
pub fn link_opacity(distance: f64, style: &FieldStyle) -> Option<f64> {
	if distance < style.link_distance {
		Some(style.link_opacity * (1.0 - distance / style.link_distance))
	} else {
		None
	}
}

/// Uniform sample in `[min, max)`, tolerating an empty range.
pub(super) fn spread<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.random::<f64>() * (max - min)
}

/// Background network simulator. Owns its surface and particle set.
pub struct BackgroundField<S, R> {
	surface: S,
	style: FieldStyle,
	particles: Vec<FieldParticle>,
	rng: R,
}

impl<S: Surface, R: Rng> BackgroundField<S, R> {
	/// Creates the field over `surface`, populated for its current size.
	pub fn new(surface: S, style: FieldStyle, rng: R) -> Self {
		let mut field = Self {
			surface,
			style,
			particles: Vec::new(),
			rng,
		};
		field.populate();
		field
	}

	/// Current points.
	pub fn particles(&self) -> &[FieldParticle] {
		&self.particles
	}

	/// Surface drawn on.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Active style.
	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Resizes the surface and regenerates every particle at the new density.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.surface.set_size(width, height);
		self.populate();
		log::debug!(
			"network field: resized to {}x{}, {} particles",
			width,
			height,
			self.particles.len()
		);
	}

	fn populate(&mut self) {
		let (w, h) = self.surface.size();
		let count = particle_count(w, h, self.style.area_per_particle);
		let (w, h) = (w as f64, h as f64);
		let style = &self.style;
		let rng = &mut self.rng;
		let half = style.speed / 2.0;

		self.particles = (0..count)
			.map(|_| FieldParticle {
				x: rng.random::<f64>() * w,
				y: rng.random::<f64>() * h,
				vx: spread(rng, -half, half),
				vy: spread(rng, -half, half),
				radius: spread(rng, style.radius_min, style.radius_max),
				opacity: spread(rng, style.opacity_min, style.opacity_max),
			})
			.collect();
	}

	/// Advances every particle one frame, reflecting off the edges.
	pub fn update(&mut self) {
		let (w, h) = self.surface.size();
		let (w, h) = (w as f64, h as f64);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > w {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > h {
				p.vy = -p.vy;
			}
		}
	}

	/// Draws links first, then points on top.
	pub fn render(&mut self) {
		let color = self.style.color;

		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = link_opacity(distance, &self.style) {
					self.surface.stroke_line(
						(a.x, a.y),
						(b.x, b.y),
						self.style.link_width,
						color.with_alpha(alpha),
					);
				}
			}
		}

		for p in &self.particles {
			self.surface
				.fill_circle(p.x, p.y, p.radius, color.with_alpha(p.opacity));
		}
	}
}

impl<S: Surface, R: Rng> Simulation for BackgroundField<S, R> {
	fn step(&mut self) {
		self.surface.clear();
		self.update();
		self.render();
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::particles::surface::{DrawCommand, RecordingSurface};

	fn field(width: u32, height: u32) -> BackgroundField<RecordingSurface, SmallRng> {
		BackgroundField::new(
			RecordingSurface::new(width, height),
			FieldStyle::default(),
			SmallRng::seed_from_u64(7),
		)
	}

	fn still(x: f64, y: f64) -> FieldParticle {
		FieldParticle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn population_follows_viewport_area() {
		let mut f = field(1000, 1000);
		assert_eq!(f.particles().len(), 100);

		f.resize(500, 500);
		assert_eq!(f.particles().len(), 25);
		assert_eq!(f.surface().size(), (500, 500));

		f.resize(1366, 768);
		assert_eq!(f.particles().len(), 104);
	}

	#[test]
	fn tiny_or_empty_viewport_has_no_particles() {
		assert_eq!(field(0, 0).particles().len(), 0);
		assert_eq!(field(99, 100).particles().len(), 0);
		assert_eq!(particle_count(100, 100, 0.0), 0);
	}

	#[test]
	fn resize_discards_previous_particles() {
		let mut f = field(800, 600);
		let before = f.particles().to_vec();
		f.resize(800, 600);
		assert_eq!(f.particles().len(), before.len());
		assert_ne!(f.particles(), &before[..]);
	}

	#[test]
	fn generated_particles_respect_style_ranges() {
		let f = field(1200, 900);
		let style = FieldStyle::default();
		for p in f.particles() {
			assert!((0.0..=1200.0).contains(&p.x));
			assert!((0.0..=900.0).contains(&p.y));
			assert!(p.vx.abs() <= style.speed / 2.0);
			assert!(p.vy.abs() <= style.speed / 2.0);
			assert!((1.0..3.0).contains(&p.radius));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn particles_stay_within_bounds_over_many_frames() {
		let mut f = field(400, 300);
		let max_step = FieldStyle::default().speed / 2.0;
		for _ in 0..5_000 {
			f.step();
			for p in f.particles() {
				assert!(p.x >= -max_step && p.x <= 400.0 + max_step, "x = {}", p.x);
				assert!(p.y >= -max_step && p.y <= 300.0 + max_step, "y = {}", p.y);
			}
		}
	}

	#[test]
	fn velocity_reflects_past_edges() {
		let mut f = field(100, 100);
		f.particles = vec![FieldParticle {
			vx: 0.25,
			vy: -0.25,
			..still(99.9, 0.1)
		}];
		f.update();
		assert_eq!(f.particles[0].vx, -0.25);
		assert_eq!(f.particles[0].vy, 0.25);
		f.update();
		assert!(f.particles[0].x < 100.0);
		assert!(f.particles[0].y > 0.0);
	}

	#[test]
	fn link_opacity_fades_with_distance() {
		let style = FieldStyle::default();
		assert_eq!(link_opacity(100.0, &style), None);
		assert_eq!(link_opacity(150.0, &style), None);
		assert!((link_opacity(0.0, &style).unwrap() - 0.1).abs() < 1e-12);
		assert!((link_opacity(50.0, &style).unwrap() - 0.05).abs() < 1e-12);
		assert!(link_opacity(99.999, &style).unwrap() < 1e-5);
	}

	#[test]
	fn step_draws_links_then_points() {
		let mut f = field(300, 300);
		f.particles = vec![still(10.0, 10.0), still(40.0, 50.0), still(250.0, 250.0)];
		f.step();

		let cmds = f.surface().commands();
		assert_eq!(cmds.len(), 4);
		match &cmds[0] {
			DrawCommand::Line {
				from,
				to,
				width,
				color,
			} => {
				assert_eq!(*from, (10.0, 10.0));
				assert_eq!(*to, (40.0, 50.0));
				assert_eq!(*width, 0.5);
				assert!((color.a - 0.05).abs() < 1e-12);
			}
			other => panic!("expected a line, got {other:?}"),
		}
		assert_eq!(f.surface().circles().count(), 3);
		assert_eq!(f.surface().clears(), 1);
	}

	#[test]
	fn close_pairs_are_linked_once() {
		let mut f = field(300, 300);
		f.particles = vec![still(0.0, 0.0), still(30.0, 40.0), still(60.0, 80.0)];
		f.render();
		// 0-1 and 1-2 are 50 apart, 0-2 is 100 apart.
		assert_eq!(f.surface().lines().count(), 2);
	}
}
