//! Frame-driven execution of the particle layers.
//!
//! A simulation only knows how to advance one frame. Something else decides
//! when frames happen: [`AnimationLoop`] in the browser, [`run_frames`] in tests
//! and headless hosts. Both stop as soon as the shared [`StopToken`] is set.
//! A [`Lifecycle`] owns the token together with whatever else a running layer
//! registered, and releases all of it on shutdown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::error::{self, HostError};

/// Something that advances (and draws) one frame at a time.
pub trait Simulation {
	/// Advances one frame.
	fn step(&mut self);
}

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
	/// A token that has not been stopped yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stops every driver observing this token.
	pub fn stop(&self) {
		self.0.set(true);
	}

	/// Whether [`StopToken::stop`] has been called on any clone.
	pub fn is_stopped(&self) -> bool {
		self.0.get()
	}
}

/// Steps `sim` up to `max_frames` times, returning the frames actually run.
///
/// The token is checked before every frame, so a simulation may stop its own
/// driver from inside `step`.
pub fn run_frames<S: Simulation + ?Sized>(sim: &mut S, token: &StopToken, max_frames: usize) -> usize {
	let mut frames = 0;
	while frames < max_frames && !token.is_stopped() {
		sim.step();
		frames += 1;
	}
	frames
}

/// Stop token plus teardown hooks of one running layer.
///
/// Hooks run once, in registration order, on [`Lifecycle::shutdown`] or when
/// the lifecycle is dropped.
#[derive(Default)]
pub struct Lifecycle {
	token: StopToken,
	teardown: Vec<Box<dyn FnOnce()>>,
}

impl Lifecycle {
	/// An empty, running lifecycle.
	pub fn new() -> Self {
		Self::default()
	}

	/// Token stopped by [`Lifecycle::shutdown`].
	pub fn token(&self) -> &StopToken {
		&self.token
	}

	/// Registers `hook` to run on shutdown.
	pub fn on_teardown(&mut self, hook: impl FnOnce() + 'static) {
		self.teardown.push(Box::new(hook));
	}

	/// Whether shutdown has not happened yet.
	pub fn is_running(&self) -> bool {
		!self.token.is_stopped()
	}

	/// Stops the token and runs the pending teardown hooks.
	pub fn shutdown(&mut self) {
		self.token.stop();
		for hook in self.teardown.drain(..) {
			hook();
		}
	}
}

impl Drop for Lifecycle {
	fn drop(&mut self) {
		self.shutdown();
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a simulation from `requestAnimationFrame` until stopped.
pub struct AnimationLoop {
	token: StopToken,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl AnimationLoop {
	/// Schedules the first frame. Each frame reschedules the next unless
	/// `token` has been stopped.
	pub fn start(sim: Rc<RefCell<dyn Simulation>>, token: StopToken) -> Result<Self, HostError> {
		let window = error::window()?;
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (token_cb, pending_cb, callback_cb) = (token.clone(), pending.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_cb.set(None);
			if token_cb.is_stopped() {
				return;
			}
			sim.borrow_mut().step();
			if token_cb.is_stopped() {
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), callback_cb.borrow().as_ref()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					pending_cb.set(Some(id));
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
			pending.set(Some(id));
		}

		Ok(Self {
			token,
			pending,
			callback,
		})
	}

	/// Token controlling this loop.
	pub fn token(&self) -> &StopToken {
		&self.token
	}

	/// Stops the loop and releases the frame callback.
	///
	/// Must not be called from inside the frame callback itself; use the token
	/// there instead.
	pub fn stop(&self) {
		self.token.stop();
		if let (Some(id), Some(win)) = (self.pending.take(), web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Counter {
		steps: usize,
		stop_after: Option<(usize, StopToken)>,
	}

	impl Simulation for Counter {
		fn step(&mut self) {
			self.steps += 1;
			if let Some((n, token)) = &self.stop_after {
				if self.steps == *n {
					token.stop();
				}
			}
		}
	}

	#[test]
	fn runs_until_budget() {
		let mut sim = Counter {
			steps: 0,
			stop_after: None,
		};
		assert_eq!(run_frames(&mut sim, &StopToken::new(), 120), 120);
		assert_eq!(sim.steps, 120);
	}

	#[test]
	fn stopped_token_runs_nothing() {
		let token = StopToken::new();
		token.clone().stop();
		let mut sim = Counter {
			steps: 0,
			stop_after: None,
		};
		assert_eq!(run_frames(&mut sim, &token, 10), 0);
		assert!(token.is_stopped());
	}

	#[test]
	fn simulation_can_stop_its_own_driver() {
		let token = StopToken::new();
		let mut sim = Counter {
			steps: 0,
			stop_after: Some((7, token.clone())),
		};
		assert_eq!(run_frames(&mut sim, &token, 1_000), 7);
	}

	#[test]
	fn shutdown_stops_frames_and_runs_hooks_once() {
		let hits = Rc::new(Cell::new(0));
		let mut lifecycle = Lifecycle::new();
		let counted = hits.clone();
		lifecycle.on_teardown(move || counted.set(counted.get() + 1));

		let token = lifecycle.token().clone();
		let mut sim = Counter {
			steps: 0,
			stop_after: None,
		};
		assert_eq!(run_frames(&mut sim, &token, 3), 3);
		assert!(lifecycle.is_running());

		lifecycle.shutdown();
		assert!(!lifecycle.is_running());
		assert_eq!(run_frames(&mut sim, &token, 3), 0);
		assert_eq!(hits.get(), 1);

		lifecycle.shutdown();
		drop(lifecycle);
		assert_eq!(hits.get(), 1);
	}

	#[test]
	fn dropping_a_running_lifecycle_tears_it_down() {
		let order = Rc::new(RefCell::new(Vec::new()));
		let mut lifecycle = Lifecycle::new();
		for name in ["listener", "loop"] {
			let order = order.clone();
			lifecycle.on_teardown(move || order.borrow_mut().push(name));
		}
		let token = lifecycle.token().clone();

		drop(lifecycle);
		assert!(token.is_stopped());
		assert_eq!(*order.borrow(), vec!["listener", "loop"]);
	}
}
