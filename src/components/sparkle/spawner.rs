//! Burst creation on pointer presses.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SparkleConfig;
use super::particles::{Particle, ParticleStore};

/// What the pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
	/// Empty page area: sparkles allowed.
	Surface,
	/// An interactive control or the lightbox overlay.
	Exempt,
}

/// Creates randomized bursts of sparkles.
pub struct Spawner {
	rng: StdRng,
}

impl Spawner {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Inserts a burst at `(x, y)` and returns its size. Exempt targets spawn nothing.
	pub fn spawn(
		&mut self,
		store: &mut ParticleStore,
		config: &SparkleConfig,
		x: f64,
		y: f64,
		target: PointerTarget,
	) -> usize {
		if target == PointerTarget::Exempt {
			return 0;
		}

		let count = self.rng.gen_range(config.burst_min..=config.burst_max);
		let half_spread = config.spread / 2.0;

		for _ in 0..count {
			let vx = self.sample(-half_spread, half_spread);
			let vy = self.sample(-half_spread, half_spread) - config.lift;
			let size = self.sample(config.size_min, config.size_max);
			let color = config
				.palette
				.get(self.rng.gen_range(0..config.palette.len()));
			let decay = self.sample(config.decay_min, config.decay_max);

			store.insert(Particle {
				x,
				y,
				vx,
				vy,
				size,
				color,
				life: 1.0,
				decay,
			});
		}

		count
	}

	/// Uniform in `min..max`, or `min` when the range is degenerate.
	fn sample(&mut self, min: f64, max: f64) -> f64 {
		if min < max {
			self.rng.gen_range(min..max)
		} else {
			min
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_lands_in_configured_ranges() {
		let config = SparkleConfig::default();
		let mut spawner = Spawner::new(7);

		for _ in 0..50 {
			let mut store = ParticleStore::new();
			let count = spawner.spawn(&mut store, &config, 100.0, 100.0, PointerTarget::Surface);

			assert!((8..=13).contains(&count));
			assert_eq!(store.len(), count);
			for p in store.iter() {
				assert_eq!((p.x, p.y), (100.0, 100.0));
				assert_eq!(p.life, 1.0);
				assert!((-3.0..3.0).contains(&p.vx));
				assert!((-5.0..1.0).contains(&p.vy));
				assert!((1.0..4.0).contains(&p.size));
				assert!((0.015..0.035).contains(&p.decay));
				assert!(config.palette.colors.contains(&p.color));
			}
		}
	}

	#[test]
	fn bursts_pop_upward_on_average() {
		let config = SparkleConfig::default();
		let mut spawner = Spawner::new(11);
		let mut store = ParticleStore::new();
		for _ in 0..40 {
			spawner.spawn(&mut store, &config, 0.0, 0.0, PointerTarget::Surface);
		}

		let mean_vy = store.iter().map(|p| p.vy).sum::<f64>() / store.len() as f64;
		assert!(mean_vy < -1.0, "mean vy {mean_vy} should be biased upward");
	}

	#[test]
	fn exempt_target_spawns_nothing() {
		let config = SparkleConfig::default();
		let mut spawner = Spawner::new(3);
		let mut store = ParticleStore::new();

		assert_eq!(
			spawner.spawn(&mut store, &config, 10.0, 10.0, PointerTarget::Exempt),
			0
		);
		assert!(store.is_empty());
	}

	#[test]
	fn spawn_adds_to_existing_particles() {
		let config = SparkleConfig {
			burst_min: 10,
			burst_max: 10,
			..SparkleConfig::default()
		};
		let mut spawner = Spawner::new(5);
		let mut store = ParticleStore::new();

		spawner.spawn(&mut store, &config, 0.0, 0.0, PointerTarget::Surface);
		spawner.spawn(&mut store, &config, 50.0, 50.0, PointerTarget::Surface);

		assert_eq!(store.len(), 20);
	}

	#[test]
	fn degenerate_ranges_use_the_minimum() {
		let config = SparkleConfig {
			burst_min: 1,
			burst_max: 1,
			spread: 0.0,
			lift: 2.0,
			size_min: 3.0,
			size_max: 3.0,
			decay_min: 0.25,
			decay_max: 0.25,
			..SparkleConfig::default()
		};
		let mut store = ParticleStore::new();
		Spawner::new(0).spawn(&mut store, &config, 1.0, 2.0, PointerTarget::Surface);

		let p = store.iter().next().unwrap();
		assert_eq!((p.vx, p.vy, p.size, p.decay), (0.0, -2.0, 3.0, 0.25));
	}

	#[test]
	fn same_seed_same_burst() {
		let config = SparkleConfig::default();
		let (mut a, mut b) = (ParticleStore::new(), ParticleStore::new());
		Spawner::new(42).spawn(&mut a, &config, 0.0, 0.0, PointerTarget::Surface);
		Spawner::new(42).spawn(&mut b, &config, 0.0, 0.0, PointerTarget::Surface);

		assert!(a.iter().eq(b.iter()));
	}
}
