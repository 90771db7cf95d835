//! Count-up animation for the stat numbers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{IntervalHandle, set_interval_with_handle};
use web_sys::Element;

use crate::error::HostError;

/// Ticks needed to reach the target.
pub const COUNTER_STEPS: f64 = 50.0;
/// Delay between ticks.
pub const COUNTER_INTERVAL: Duration = Duration::from_millis(40);

/// Class marking a counter that has already run.
pub const ANIMATED_CLASS: &str = "animated";

/// Counts from zero to `target` in [`COUNTER_STEPS`] equal increments.
#[derive(Clone, Debug)]
pub struct Counter {
	target: u64,
	current: f64,
	increment: f64,
}

impl Counter {
	/// A counter at zero heading for `target`.
	pub fn new(target: u64) -> Self {
		Self {
			target,
			current: 0.0,
			increment: target as f64 / COUNTER_STEPS,
		}
	}

	/// Advances one tick. Returns the text to display and whether the count
	/// has finished.
	pub fn tick(&mut self) -> (String, bool) {
		self.current += self.increment;
		if self.current >= self.target as f64 {
			(self.target.to_string(), true)
		} else {
			((self.current.floor() as u64).to_string(), false)
		}
	}
}

/// Parses the leading integer of a `data-target` attribute, so `"100+"`
/// counts to 100. Junk and negative values count to zero.
pub fn parse_target(raw: Option<String>) -> u64 {
	let Some(raw) = raw else {
		return 0;
	};
	let rest = raw.trim_start();
	let rest = rest.strip_prefix('+').unwrap_or(rest);
	let end = rest
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(rest.len());
	rest[..end].parse().unwrap_or(0)
}

/// Runs the counter on `element` once; later calls are no-ops.
pub fn animate(element: &Element) -> Result<(), HostError> {
	let classes = element.class_list();
	if classes.contains(ANIMATED_CLASS) {
		return Ok(());
	}
	classes.add_1(ANIMATED_CLASS)?;

	let counter = RefCell::new(Counter::new(parse_target(
		element.get_attribute("data-target"),
	)));
	let element = element.clone();
	let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));
	let handle_tick = handle.clone();

	let interval = set_interval_with_handle(
		move || {
			let (text, done) = counter.borrow_mut().tick();
			element.set_text_content(Some(&text));
			if done {
				if let Some(h) = handle_tick.take() {
					h.clear();
				}
			}
		},
		COUNTER_INTERVAL,
	)?;
	handle.set(Some(interval));
	Ok(())
}
