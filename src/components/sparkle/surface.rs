//! Drawing surfaces and viewport sizing.
//!
//! [`Surface`] is the only thing the renderer and [`SurfaceManager`] know about
//! pixels. In the browser it is a [`CanvasSurface`]; tests record operations
//! instead of drawing.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::BootError;
use super::theme::Color;

/// A pixel buffer the sparkles are painted on.
pub trait Surface {
	/// Current pixel dimensions.
	fn size(&self) -> (u32, u32);

	/// Resizes the pixel buffer. Prior contents may be lost.
	fn set_size(&mut self, width: u32, height: u32);

	/// Clears every pixel to transparent.
	fn clear(&mut self);

	/// Fills a closed polygon with `color` at opacity `alpha`.
	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color, alpha: f64);
}

/// Keeps the surface the same size as the viewport.
pub struct SurfaceManager<S> {
	surface: S,
}

impl<S: Surface> SurfaceManager<S> {
	pub fn new(surface: S) -> Self {
		Self { surface }
	}

	/// Matches the surface to the viewport exactly.
	pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
		if self.surface.size() != (viewport_width, viewport_height) {
			log::debug!("sparkle: surface resized to {viewport_width}x{viewport_height}");
		}
		self.surface.set_size(viewport_width, viewport_height);
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}

/// A canvas element and its 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2d context, failing if the canvas cannot provide one.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BootError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| BootError::NoContext(format!("{e:?}")))?
			.ok_or_else(|| BootError::NoContext("context unavailable".to_string()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| BootError::NoContext("not a 2d context".to_string()))?;
		Ok(Self { canvas, ctx })
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

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color, alpha: f64) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};

		self.ctx.set_global_alpha(alpha);
		self.ctx.set_fill_style_str(&color.to_css_rgb());
		self.ctx.begin_path();
		self.ctx.move_to(x0, y0);
		for &(x, y) in rest {
			self.ctx.line_to(x, y);
		}
		self.ctx.close_path();
		self.ctx.fill();
		self.ctx.set_global_alpha(1.0);
	}
}

/// One recorded surface call.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(super) enum DrawOp {
	Clear,
	Resize(u32, u32),
	Fill {
		points: Vec<(f64, f64)>,
		color: Color,
		alpha: f64,
	},
}

/// In-memory surface that logs every call.
#[cfg(test)]
#[derive(Debug, Default)]
pub(super) struct RecordingSurface {
	pub width: u32,
	pub height: u32,
	pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			ops: Vec::new(),
		}
	}

	pub fn fill_alphas(&self) -> Vec<f64> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				DrawOp::Fill { alpha, .. } => Some(*alpha),
				_ => None,
			})
			.collect()
	}

	pub fn fill_count(&self) -> usize {
		self.fill_alphas().len()
	}

	/// True when the most recent frame cleared and drew nothing after.
	pub fn ends_cleared(&self) -> bool {
		self.ops.last() == Some(&DrawOp::Clear)
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.width = width;
		self.height = height;
		self.ops.push(DrawOp::Resize(width, height));
	}

	fn clear(&mut self) {
		self.ops.push(DrawOp::Clear);
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color, alpha: f64) {
		self.ops.push(DrawOp::Fill {
			points: points.to_vec(),
			color,
			alpha,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resize_matches_viewport_exactly() {
		let mut manager = SurfaceManager::new(RecordingSurface::new(300, 150));
		manager.resize(1280, 720);
		assert_eq!(manager.surface().size(), (1280, 720));
		assert_eq!(manager.surface().ops, vec![DrawOp::Resize(1280, 720)]);
	}

	#[test]
	fn repeated_resizes_track_the_latest_viewport() {
		let mut manager = SurfaceManager::new(RecordingSurface::new(0, 0));
		manager.resize(800, 600);
		manager.resize(400, 900);
		manager.resize(400, 900);
		assert_eq!(manager.surface().size(), (400, 900));
		assert_eq!(manager.surface_mut().ops.len(), 3);
	}
}
