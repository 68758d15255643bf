//! The sparkle engine: one value owning the store, the simulation pieces and
//! the surface, driven by intents and frame ticks from the host.
//!
//! All calls happen on one thread in host event order. An intent dispatched
//! before a frame is visible to that frame; one dispatched after waits for
//! the next.

use log::{debug, info, warn};

use super::config::SparkleConfig;
use super::particles::ParticleStore;
use super::physics::Integrator;
use super::render::Renderer;
use super::spawner::{PointerTarget, Spawner};
use super::surface::{Surface, SurfaceManager};

/// Frame loop lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Constructed, not yet started. Also the permanent state under reduced motion.
	Idle,
	/// Stepping and rendering once per display refresh.
	Running,
	/// Torn down. Terminal.
	Stopped,
}

/// A host notification translated into engine terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
	/// Pointer press at surface coordinates.
	Spawn { x: f64, y: f64, target: PointerTarget },
	/// Viewport now has these dimensions.
	Resize { width: u32, height: u32 },
}

/// Owns every piece of sparkle state for one page.
pub struct SparkleEngine<S> {
	config: SparkleConfig,
	store: ParticleStore,
	spawner: Spawner,
	integrator: Integrator,
	renderer: Renderer,
	surface: SurfaceManager<S>,
	state: LoopState,
}

impl<S: Surface> SparkleEngine<S> {
	/// Builds an idle engine. A config that fails validation is replaced by
	/// the defaults so spawning can never hit an empty sampling range.
	pub fn new(config: SparkleConfig, surface: S, seed: u64) -> Self {
		let config = match config.validate() {
			Ok(()) => config,
			Err(e) => {
				warn!("sparkle: invalid config, using defaults: {e}");
				SparkleConfig::default()
			}
		};
		Self {
			store: ParticleStore::new(),
			spawner: Spawner::new(seed),
			integrator: Integrator::new(config.gravity),
			renderer: Renderer::new(config.inner_radius_ratio),
			surface: SurfaceManager::new(surface),
			state: LoopState::Idle,
			config,
		}
	}

	/// Leaves `Idle` for `Running` unless reduced motion is preferred.
	/// The preference is read only here.
	pub fn start(&mut self, prefers_reduced_motion: bool) -> LoopState {
		if self.state != LoopState::Idle {
			return self.state;
		}
		if prefers_reduced_motion {
			info!("sparkle: reduced motion preferred, effect disabled");
		} else {
			self.state = LoopState::Running;
			info!("sparkle: engine running");
		}
		self.state
	}

	/// Applies an intent immediately. Ignored unless running.
	pub fn dispatch(&mut self, intent: Intent) {
		if self.state != LoopState::Running {
			return;
		}
		match intent {
			Intent::Spawn { x, y, target } => {
				let count = self
					.spawner
					.spawn(&mut self.store, &self.config, x, y, target);
				if count > 0 {
					debug!("sparkle: burst of {count} at ({x}, {y})");
				}
			}
			Intent::Resize { width, height } => self.surface.resize(width, height),
		}
	}

	/// One loop iteration: integrate, then render. Returns whether the host
	/// should schedule another frame.
	pub fn frame(&mut self) -> bool {
		if self.state != LoopState::Running {
			return false;
		}
		self.integrator.step(&mut self.store);
		self.renderer
			.render(&self.store, self.surface.surface_mut());
		true
	}

	/// Moves to the terminal state and drops every particle.
	pub fn stop(&mut self) {
		if self.state == LoopState::Stopped {
			return;
		}
		self.state = LoopState::Stopped;
		self.store = ParticleStore::new();
		info!("sparkle: engine stopped");
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn store(&self) -> &ParticleStore {
		&self.store
	}

	pub fn config(&self) -> &SparkleConfig {
		&self.config
	}

	pub fn surface(&self) -> &S {
		self.surface.surface()
	}
}
