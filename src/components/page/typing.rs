//! Typewriter effect for the hero subtitle.
//!
//! Types a phrase one character at a time, holds it, deletes it and moves on
//! to the next phrase, forever.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::set_timeout;
use serde::Deserialize;
use web_sys::Element;

use crate::error::{self, HostError};

/// Phrases and timings for the typing effect.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	/// Selector of the element whose text is animated.
	pub selector: String,
	/// Phrases typed in turn, cycling forever.
	pub phrases: Vec<String>,
	/// Delay between typed characters.
	pub type_delay_ms: u32,
	/// Delay between deleted characters.
	pub delete_delay_ms: u32,
	/// Pause with the full phrase shown.
	pub hold_ms: u32,
	/// Pause with the text empty before the next phrase.
	pub next_phrase_ms: u32,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			selector: ".hero-subtitle".into(),
			phrases: vec![
				"Network Engineer & Developer".into(),
				"Cloud Infrastructure Specialist".into(),
				"Network Security Expert".into(),
				"Automation Engineer".into(),
			],
			type_delay_ms: 150,
			delete_delay_ms: 50,
			hold_ms: 2000,
			next_phrase_ms: 500,
		}
	}
}

/// Text to show and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
	/// Text the element should show.
	pub text: String,
	/// Wait before the next tick.
	pub delay_ms: u32,
}

/// Typing state machine. Counts characters, not bytes.
#[derive(Clone, Debug)]
pub struct TypingEffect {
	config: TypingConfig,
	phrase: usize,
	chars: usize,
	deleting: bool,
}

impl TypingEffect {
	/// Returns `None` when there is nothing to type.
	pub fn new(config: TypingConfig) -> Option<Self> {
		if config.phrases.is_empty() {
			return None;
		}
		Some(Self {
			config,
			phrase: 0,
			chars: 0,
			deleting: false,
		})
	}

	/// Index of the phrase being typed or deleted.
	pub fn phrase_index(&self) -> usize {
		self.phrase
	}

	/// Whether the current phrase is being erased.
	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advances one character and returns what to show.
	pub fn tick(&mut self) -> TypingFrame {
		let current = &self.config.phrases[self.phrase];
		let len = current.chars().count();

		if self.deleting {
			self.chars = self.chars.saturating_sub(1);
		} else {
			self.chars = (self.chars + 1).min(len);
		}
		let text: String = current.chars().take(self.chars).collect();

		let mut delay_ms = if self.deleting {
			self.config.delete_delay_ms
		} else {
			self.config.type_delay_ms
		};

		if !self.deleting && self.chars == len {
			delay_ms = self.config.hold_ms;
			self.deleting = true;
		} else if self.deleting && self.chars == 0 {
			self.deleting = false;
			self.phrase = (self.phrase + 1) % self.config.phrases.len();
			delay_ms = self.config.next_phrase_ms;
		}

		TypingFrame { text, delay_ms }
	}
}

fn schedule(effect: Rc<RefCell<TypingEffect>>, element: Element, delay_ms: u32) {
	set_timeout(
		move || {
			let frame = effect.borrow_mut().tick();
			element.set_text_content(Some(&frame.text));
			schedule(effect, element, frame.delay_ms);
		},
		Duration::from_millis(delay_ms as u64),
	);
}

/// Starts the effect on the configured element. Missing element or empty
/// phrase list leaves the page untouched.
pub fn install(config: TypingConfig) -> Result<(), HostError> {
	let element = error::document()?
		.query_selector(&config.selector)?
		.ok_or(HostError::MissingElement("typing target"))?;
	let Some(mut effect) = TypingEffect::new(config) else {
		return Ok(());
	};

	let first = effect.tick();
	element.set_text_content(Some(&first.text));
	schedule(Rc::new(RefCell::new(effect)), element, first.delay_ms);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn effect(phrases: &[&str]) -> TypingEffect {
		TypingEffect::new(TypingConfig {
			phrases: phrases.iter().map(|p| p.to_string()).collect(),
			..TypingConfig::default()
		})
		.unwrap()
	}

	fn frame(text: &str, delay_ms: u32) -> TypingFrame {
		TypingFrame {
			text: text.into(),
			delay_ms,
		}
	}

	#[test]
	fn types_holds_deletes_and_advances() {
		let mut t = effect(&["ab", "c"]);
		assert_eq!(t.tick(), frame("a", 150));
		assert_eq!(t.tick(), frame("ab", 2000));
		assert!(t.is_deleting());
		assert_eq!(t.tick(), frame("a", 50));
		assert_eq!(t.tick(), frame("", 500));
		assert!(!t.is_deleting());
		assert_eq!(t.phrase_index(), 1);
		assert_eq!(t.tick(), frame("c", 2000));
		assert_eq!(t.tick(), frame("", 500));
		assert_eq!(t.phrase_index(), 0);
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut t = effect(&["né✓"]);
		assert_eq!(t.tick().text, "n");
		assert_eq!(t.tick().text, "né");
		assert_eq!(t.tick(), frame("né✓", 2000));
	}

	#[test]
	fn empty_phrase_list_is_disabled() {
		assert!(
			TypingEffect::new(TypingConfig {
				phrases: Vec::new(),
				..TypingConfig::default()
			})
			.is_none()
		);
	}

	#[test]
	fn empty_phrase_does_not_stall() {
		let mut t = effect(&["", "x"]);
		assert_eq!(t.tick(), frame("", 2000));
		assert_eq!(t.tick(), frame("", 500));
		assert_eq!(t.tick(), frame("x", 2000));
	}
}
