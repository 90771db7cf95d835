//! Drawable surfaces the particle layers render into.
//!
//! Simulators take their surface at construction, so the same code drives a
//! browser canvas or an in-memory recorder.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::style::Color;
use crate::error::HostError;

/// A 2D pixel surface exposing the primitives the particle layers need.
pub trait Surface {
	/// Current size in pixels.
	fn size(&self) -> (u32, u32);
	/// Resizes the backing store, discarding its content.
	fn set_size(&mut self, width: u32, height: u32);
	/// Erases everything drawn.
	fn clear(&mut self);
	/// Fills a circle centred at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Strokes a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// A single recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// [`Surface::clear`].
	Clear,
	/// [`Surface::fill_circle`].
	#[allow(missing_docs)]
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	/// [`Surface::stroke_line`].
	#[allow(missing_docs)]
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
}

/// In-memory surface that records every drawing call.
///
/// `clear` empties the log, so after a frame it holds exactly what that frame drew.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	width: u32,
	height: u32,
	commands: Vec<DrawCommand>,
	clears: usize,
}

impl RecordingSurface {
	/// An empty recording of the given size.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	/// Commands drawn since the last clear.
	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	/// Number of times the surface has been cleared.
	pub fn clears(&self) -> usize {
		self.clears
	}

	/// Recorded circles in draw order.
	pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Circle { .. }))
	}

	/// Recorded lines in draw order.
	pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
	}
}

impl Surface for RecordingSurface {
	fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.width = width;
		self.height = height;
	}

	fn clear(&mut self) {
		self.commands.clear();
		self.clears += 1;
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.commands.push(DrawCommand::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.commands.push(DrawCommand::Line {
			from,
			to,
			width,
			color,
		});
	}
}

/// Browser canvas backed surface.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps `canvas` and its 2d context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(HostError::NoContext)?
			.dyn_into()
			.map_err(|_| HostError::NoContext)?;
		Ok(Self { canvas, ctx })
	}

	/// Underlying canvas element.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (u32, u32) {
		(self.canvas.width(), self.canvas.height())
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}
