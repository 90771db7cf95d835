//! Fading particle trail that follows the pointer.
//!
//! Every pointer move emits one particle at the pointer. Particles drift, lose
//! `decay` life per frame and disappear once their life reaches zero. The
//! collection is a bounded FIFO: past capacity the oldest particle is dropped.

use std::collections::VecDeque;

use rand::Rng;

use super::field::spread;
use super::frame::Simulation;
use super::style::TrailStyle;
use super::surface::Surface;

/// A short-lived particle of the cursor trail.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailParticle {
	/// Position.
	pub x: f64,
	pub y: f64,
	/// Radius at full life.
	pub size: f64,
	/// Remaining life in (0, 1]; also the fill opacity.
	pub life: f64,
	/// Life lost per frame.
	pub decay: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	pub vy: f64,
}

/// Cursor trail emitter. Owns its overlay surface and particle queue.
pub struct CursorTrail<S, R> {
	surface: S,
	style: TrailStyle,
	particles: VecDeque<TrailParticle>,
	pointer: (f64, f64),
	rng: R,
}

impl<S: Surface, R: Rng> CursorTrail<S, R> {
	/// An empty trail drawing on `surface`.
	pub fn new(surface: S, style: TrailStyle, rng: R) -> Self {
		Self {
			surface,
			particles: VecDeque::new(),
			style,
			pointer: (0.0, 0.0),
			rng,
		}
	}

	/// Live particles, oldest first.
	pub fn particles(&self) -> &VecDeque<TrailParticle> {
		&self.particles
	}

	/// Surface drawn on.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Last recorded pointer position.
	pub fn pointer(&self) -> (f64, f64) {
		self.pointer
	}

	/// Resizes the overlay, keeping live particles.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.surface.set_size(width, height);
	}

	/// Records the pointer and emits one randomized particle there.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
		let style = &self.style;
		let rng = &mut self.rng;
		let particle = TrailParticle {
			x,
			y,
			size: spread(rng, style.size_min, style.size_max),
			life: 1.0,
			decay: spread(rng, style.decay_min, style.decay_max),
			vx: spread(rng, -style.max_speed, style.max_speed),
			vy: spread(rng, -style.max_speed, style.max_speed),
		};
		self.emit(particle);
	}

	/// Appends a particle, evicting the oldest while over capacity.
	pub fn emit(&mut self, particle: TrailParticle) {
		self.particles.push_back(particle);
		while self.particles.len() > self.style.capacity {
			self.particles.pop_front();
		}
	}

	/// Ages and moves every particle, dropping the expired ones in one pass.
	pub fn update(&mut self) {
		self.particles.retain_mut(|p| {
			p.life -= p.decay;
			p.x += p.vx;
			p.y += p.vy;
			p.life > 0.0
		});
	}

	/// Draws every live particle scaled by its life.
	pub fn render(&mut self) {
		let color = self.style.color;
		for p in &self.particles {
			self.surface
				.fill_circle(p.x, p.y, p.size, color.with_alpha(p.life));
		}
	}
}

impl<S: Surface, R: Rng> Simulation for CursorTrail<S, R> {
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
	use crate::components::particles::frame::{StopToken, run_frames};
	use crate::components::particles::surface::{DrawCommand, RecordingSurface};

	fn trail() -> CursorTrail<RecordingSurface, SmallRng> {
		CursorTrail::new(
			RecordingSurface::new(800, 600),
			TrailStyle::default(),
			SmallRng::seed_from_u64(42),
		)
	}

	fn particle(x: f64, decay: f64) -> TrailParticle {
		TrailParticle {
			x,
			y: 0.0,
			size: 2.0,
			life: 1.0,
			decay,
			vx: 0.0,
			vy: 0.0,
		}
	}

	#[test]
	fn one_move_emits_one_particle() {
		let mut t = trail();
		t.pointer_moved(120.0, 45.0);

		assert_eq!(t.particles().len(), 1);
		assert_eq!(t.pointer(), (120.0, 45.0));
		let p = &t.particles()[0];
		assert_eq!((p.x, p.y, p.life), (120.0, 45.0, 1.0));
		assert!((1.0..4.0).contains(&p.size));
		assert!((0.01..0.03).contains(&p.decay));
		assert!((-1.0..1.0).contains(&p.vx));
		assert!((-1.0..1.0).contains(&p.vy));
	}

	#[test]
	fn rapid_moves_keep_the_fifty_most_recent() {
		let mut t = trail();
		for i in 0..60 {
			t.pointer_moved(i as f64, 0.0);
			assert!(t.particles().len() <= 50);
		}
		assert_eq!(t.particles().len(), 50);
		let xs: Vec<f64> = t.particles().iter().map(|p| p.x).collect();
		let expected: Vec<f64> = (10..60).map(|i| i as f64).collect();
		assert_eq!(xs, expected);
	}

	#[test]
	fn particle_expires_after_exactly_fifty_steps() {
		let mut t = trail();
		t.emit(particle(0.0, 0.02));
		for _ in 0..49 {
			t.step();
		}
		assert_eq!(t.particles().len(), 1);
		t.step();
		assert!(t.particles().is_empty());
	}

	#[test]
	fn expiry_does_not_skip_neighbours() {
		let mut t = trail();
		// Two particles expire on the same frame; the survivor after them must
		// still be aged exactly once.
		t.emit(TrailParticle {
			life: 0.01,
			..particle(1.0, 0.02)
		});
		t.emit(TrailParticle {
			life: 0.01,
			..particle(2.0, 0.02)
		});
		t.emit(particle(3.0, 0.25));
		t.update();

		assert_eq!(t.particles().len(), 1);
		assert_eq!(t.particles()[0].x, 3.0);
		assert_eq!(t.particles()[0].life, 0.75);
	}

	#[test]
	fn render_uses_life_as_opacity() {
		let mut t = trail();
		t.emit(TrailParticle {
			vx: 1.0,
			vy: -1.0,
			..particle(10.0, 0.25)
		});
		t.step();

		let cmds = t.surface().commands();
		assert_eq!(
			cmds,
			&[DrawCommand::Circle {
				x: 11.0,
				y: -1.0,
				radius: 2.0,
				color: TrailStyle::default().color.with_alpha(0.75),
			}]
		);
	}

	#[test]
	fn trail_drains_when_pointer_stops() {
		let mut t = trail();
		for i in 0..20 {
			t.pointer_moved(i as f64, i as f64);
		}
		// Slowest decay is 0.01, so 100 frames empties the queue.
		run_frames(&mut t, &StopToken::new(), 101);
		assert!(t.particles().is_empty());
		assert!(t.surface().commands().is_empty());
	}
}
