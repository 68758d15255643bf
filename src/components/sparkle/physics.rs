//! Per-frame ballistic motion and fade.

use super::particles::ParticleStore;

/// Advances every particle by one frame using explicit Euler integration.
#[derive(Clone, Copy, Debug)]
pub struct Integrator {
	/// Downward acceleration, pixels per frame squared.
	pub gravity: f64,
}

impl Integrator {
	pub fn new(gravity: f64) -> Self {
		Self { gravity }
	}

	/// Moves, accelerates and ages every particle, then drops the expired ones.
	pub fn step(&self, store: &mut ParticleStore) {
		for p in store.iter_mut() {
			p.x += p.vx;
			p.y += p.vy;
			p.vy += self.gravity;
			p.life -= p.decay;
		}
		store.retain_alive();
	}
}
