//! Star rendering for live sparkles.
//!
//! Every frame starts from a cleared surface, so nothing from an earlier frame
//! survives once its particles have expired.

use std::f64::consts::PI;

use super::particles::ParticleStore;
use super::surface::Surface;

/// Points per star.
const SPIKES: usize = 4;

/// Vertices of a star centered on `(cx, cy)`, alternating outer and inner
/// radius, starting with the point facing up.
pub fn star_points(cx: f64, cy: f64, outer: f64, inner: f64) -> [(f64, f64); SPIKES * 2] {
	std::array::from_fn(|i| {
		let r = if i % 2 == 0 { outer } else { inner };
		let angle = i as f64 * PI / SPIKES as f64 - PI / 2.0;
		(cx + angle.cos() * r, cy + angle.sin() * r)
	})
}

/// Paints the particle store onto a surface.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
	/// Inner star radius relative to particle size.
	pub inner_radius_ratio: f64,
}

impl Renderer {
	pub fn new(inner_radius_ratio: f64) -> Self {
		Self { inner_radius_ratio }
	}

	/// Clears the surface, then fills one star per particle at opacity `life`.
	pub fn render<S: Surface>(&self, store: &ParticleStore, surface: &mut S) {
		surface.clear();

		for p in store.iter() {
			let points = star_points(p.x, p.y, p.size, p.size * self.inner_radius_ratio);
			surface.fill_polygon(&points, p.color, p.life);
		}
	}
}
