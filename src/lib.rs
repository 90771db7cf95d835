//! netfolio-fx: decorative effects for a personal portfolio page.
//!
//! This crate compiles to WASM and layers a particle network background, a
//! cursor trail, a theme switcher and a loading splash over existing portfolio
//! markup, and wires the page's navigation, reveal animations, typing effect
//! and contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod error;

pub use components::particles::{
	BackgroundField, CursorTrail, NetworkBackground, ParticleCursor, RecordingSurface, Surface,
};
pub use config::FxConfig;

use components::page::{LoadingSplash, ThemeToggle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("netfolio-fx: logging initialized");
}

/// Main application component.
/// Reads configuration from the DOM, mounts the overlay components and
/// attaches the page behaviors.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = FxConfig::load();
	let features = config.features.clone();
	let typing = config.typing.clone();

	Effect::new(move |_| components::page::install(typing.clone()));

	view! {
		<Meta name="color-scheme" content="dark light" />

		{features.loading_splash.then(|| view! { <LoadingSplash /> })}
		{features.network_background.then(|| view! { <NetworkBackground config=config.field.clone() /> })}
		{features.cursor_trail.then(|| view! { <ParticleCursor config=config.trail.clone() /> })}
		{features.theme_switcher.then(|| view! { <ThemeToggle /> })}
	}
}
