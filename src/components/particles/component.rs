//! Leptos components mounting the particle layers on canvases.
//!
//! Each component renders its own canvas, sizes it to the viewport, subscribes
//! to the browser events its simulator needs and starts an [`AnimationLoop`].
//! Listeners and loop are owned by a [`Lifecycle`] that is shut down when the
//! component unmounts. When a browser collaborator is missing the layer logs a
//! warning and stays blank.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::field::BackgroundField;
use super::frame::{AnimationLoop, Lifecycle, Simulation};
use super::style::{FieldStyle, TrailStyle};
use super::surface::{CanvasSurface, Surface};
use super::trail::CursorTrail;
use crate::components::dom;
use crate::error::{self, HostError};

fn seeded_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Canvas surface sized to the current viewport.
fn viewport_surface(canvas: HtmlCanvasElement) -> Result<CanvasSurface, HostError> {
	let (w, h) = error::viewport_size(&error::window()?);
	let mut surface = CanvasSurface::new(canvas)?;
	surface.set_size(w, h);
	Ok(surface)
}

/// Slot holding a layer's lifecycle while it runs.
type Running = Rc<RefCell<Option<Lifecycle>>>;

/// Starts `sim` on the lifecycle's token and stops it on teardown.
fn attach_loop(lifecycle: &mut Lifecycle, sim: Rc<RefCell<dyn Simulation>>) -> Result<(), HostError> {
	let animation = AnimationLoop::start(sim, lifecycle.token().clone())?;
	lifecycle.on_teardown(move || animation.stop());
	Ok(())
}

fn attach_listener(lifecycle: &mut Lifecycle, listener: dom::Listener) {
	lifecycle.on_teardown(move || drop(listener));
}

/// Shuts the running layer down once the owning component unmounts.
fn stop_on_cleanup(running: &Running, name: &'static str) {
	let running = SendWrapper::new(running.clone());
	on_cleanup(move || {
		if let Some(mut lifecycle) = running.borrow_mut().take() {
			lifecycle.shutdown();
			info!("{}: stopped", name);
		}
	});
}

fn start_field(canvas: HtmlCanvasElement, style: FieldStyle) -> Result<Lifecycle, HostError> {
	let window = error::window()?;
	let mut lifecycle = Lifecycle::new();
	let field = Rc::new(RefCell::new(BackgroundField::new(
		viewport_surface(canvas)?,
		style,
		seeded_rng(),
	)));

	let field_resize = field.clone();
	let resize = dom::Listener::new(&window, "resize", move |_| {
		if let Some(win) = web_sys::window() {
			let (w, h) = error::viewport_size(&win);
			field_resize.borrow_mut().resize(w, h);
		}
	})?;
	attach_listener(&mut lifecycle, resize);

	info!(
		"network background: started with {} particles",
		field.borrow().particles().len()
	);
	attach_loop(&mut lifecycle, field)?;
	Ok(lifecycle)
}

fn start_trail(canvas: HtmlCanvasElement, style: TrailStyle) -> Result<Lifecycle, HostError> {
	let window = error::window()?;
	let document = error::document()?;
	let mut lifecycle = Lifecycle::new();
	let trail = Rc::new(RefCell::new(CursorTrail::new(
		viewport_surface(canvas)?,
		style,
		seeded_rng(),
	)));

	let trail_resize = trail.clone();
	let resize = dom::Listener::new(&window, "resize", move |_| {
		if let Some(win) = web_sys::window() {
			let (w, h) = error::viewport_size(&win);
			trail_resize.borrow_mut().resize(w, h);
		}
	})?;
	attach_listener(&mut lifecycle, resize);

	let trail_move = trail.clone();
	let pointer = dom::Listener::new(&document, "mousemove", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			trail_move
				.borrow_mut()
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		}
	})?;
	attach_listener(&mut lifecycle, pointer);

	info!("cursor trail: started");
	attach_loop(&mut lifecycle, trail)?;
	Ok(lifecycle)
}

/// Ambient network of drifting points behind all page content.
#[component]
pub fn NetworkBackground(#[prop(optional)] config: FieldStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running: Running = Rc::new(RefCell::new(None));
	stop_on_cleanup(&running, "network background");

	Effect::new(move |_| {
		if running.borrow().is_some() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		match start_field(canvas, config.clone()) {
			Ok(lifecycle) => *running.borrow_mut() = Some(lifecycle),
			Err(e) => warn!("network background: disabled: {}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-bg-canvas"
			style="position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none;"
		/>
	}
}

/// Fading particle trail following the mouse, drawn above everything else.
#[component]
pub fn ParticleCursor(#[prop(optional)] config: TrailStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running: Running = Rc::new(RefCell::new(None));
	stop_on_cleanup(&running, "cursor trail");

	Effect::new(move |_| {
		if running.borrow().is_some() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		match start_trail(canvas, config.clone()) {
			Ok(lifecycle) => *running.borrow_mut() = Some(lifecycle),
			Err(e) => warn!("cursor trail: disabled: {}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-cursor-canvas"
			style="position: fixed; top: 0; left: 0; pointer-events: none; z-index: 9999; mix-blend-mode: screen;"
		/>
	}
}
