//! Sparkle particles and the store that owns them.

use super::theme::Color;

/// A single sparkle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Pixels per frame.
	pub vx: f64,
	pub vy: f64,
	/// Outer star radius.
	pub size: f64,
	pub color: Color,
	/// Remaining life, doubles as draw opacity. Starts at 1.0.
	pub life: f64,
	/// Life lost per frame.
	pub decay: f64,
}

/// Life at or below this counts as expired. Repeated `life -= decay` leaves
/// residue around 1e-16 where `1 / decay` is a whole number.
const LIFE_EPSILON: f64 = 1e-9;

impl Particle {
	pub fn is_alive(&self) -> bool {
		self.life > LIFE_EPSILON
	}
}

/// Unordered collection of live sparkles.
#[derive(Debug, Default)]
pub struct ParticleStore {
	particles: Vec<Particle>,
}

impl ParticleStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, particle: Particle) {
		self.particles.push(particle);
	}

	/// Drops every particle with `life <= 0`. Survivors keep their relative order.
	pub fn retain_alive(&mut self) {
		self.particles.retain(Particle::is_alive);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter()
	}

	pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
		self.particles.iter_mut()
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
pub(super) fn test_particle(x: f64, y: f64, life: f64, decay: f64) -> Particle {
	Particle {
		x,
		y,
		vx: 0.0,
		vy: 0.0,
		size: 2.0,
		color: Color::rgb(255, 255, 255),
		life,
		decay,
	}
}
