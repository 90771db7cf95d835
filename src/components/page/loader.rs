//! Full-screen loading splash shown until the page has loaded.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use crate::components::dom;
use crate::error::{self, HostError};

/// How long the splash stays fully visible after `load`.
pub const HOLD: Duration = Duration::from_millis(1000);
/// Length of the fade-out transition.
pub const FADE: Duration = Duration::from_millis(500);

const LABEL: &str = "Connecting...";

const SPLASH_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
	background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); display: flex; \
	align-items: center; justify-content: center; z-index: 10000; transition: opacity 0.5s ease;";

const SPLASH_CSS: &str = "
.loader-content { text-align: center; color: white; }
.network-loader { display: flex; gap: 20px; margin-bottom: 20px; justify-content: center; }
.network-loader .node {
	width: 20px; height: 20px; background: #64ffda; border-radius: 50%;
	animation: pulse 1.5s infinite;
}
.network-loader .node:nth-child(2) { animation-delay: 0.5s; }
.network-loader .node:nth-child(3) { animation-delay: 1s; }
@keyframes pulse {
	0%, 80%, 100% { transform: scale(0.8); }
	40% { transform: scale(1.2); }
}
";

/// Where the splash is in its hold/fade/remove sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
	/// Fully shown while the page loads.
	Visible,
	/// Opacity transition running.
	Fading,
	/// Removed from the DOM.
	Gone,
}

impl SplashPhase {
	/// Inline opacity for this phase.
	pub fn opacity(self) -> &'static str {
		match self {
			SplashPhase::Visible => "1",
			SplashPhase::Fading | SplashPhase::Gone => "0",
		}
	}

	/// Next phase and how long to wait before entering it.
	pub fn next(self) -> Option<(SplashPhase, Duration)> {
		match self {
			SplashPhase::Visible => Some((SplashPhase::Fading, HOLD)),
			SplashPhase::Fading => Some((SplashPhase::Gone, FADE)),
			SplashPhase::Gone => None,
		}
	}
}

fn advance(phase: ReadSignal<SplashPhase>, set_phase: WriteSignal<SplashPhase>) {
	if let Some((next, wait)) = phase.get_untracked().next() {
		set_timeout(
			move || {
				set_phase.set(next);
				advance(phase, set_phase);
			},
			wait,
		);
	}
}

/// Runs `f` once the window has loaded, immediately if it already has.
fn on_loaded(f: impl FnOnce() + 'static) -> Result<(), HostError> {
	if error::document()?.ready_state() == "complete" {
		f();
		return Ok(());
	}
	let mut f = Some(f);
	let window = error::window()?;
	dom::listen(&window, "load", move |_| {
		if let Some(f) = f.take() {
			f();
		}
	})
}

/// Splash overlay that fades out once the window has loaded.
#[component]
pub fn LoadingSplash() -> impl IntoView {
	let (phase, set_phase) = signal(SplashPhase::Visible);

	if let Err(e) = on_loaded(move || advance(phase, set_phase)) {
		warn!("loading splash: {}; hiding now", e);
		set_phase.set(SplashPhase::Gone);
	}

	view! {
		<Show when=move || phase.get() != SplashPhase::Gone>
			<div id="loader" style=move || format!("{} opacity: {};", SPLASH_STYLE, phase.get().opacity())>
				<style>{SPLASH_CSS}</style>
				<div class="loader-content">
					<div class="network-loader">
						<div class="node"></div>
						<div class="node"></div>
						<div class="node"></div>
					</div>
					<p>{LABEL}</p>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splash_holds_then_fades_then_leaves() {
		let mut phase = SplashPhase::Visible;
		let mut waits = Vec::new();
		while let Some((next, wait)) = phase.next() {
			waits.push(wait);
			phase = next;
		}
		assert_eq!(phase, SplashPhase::Gone);
		assert_eq!(waits, vec![HOLD, FADE]);
		assert_eq!(SplashPhase::Visible.opacity(), "1");
		assert_eq!(SplashPhase::Fading.opacity(), "0");
	}
}
