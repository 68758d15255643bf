//! Click-triggered sparkle particle effect.
//!
//! A press on empty page area spawns a burst of star-shaped sparkles that pop
//! upward, fall under gravity and fade out over roughly half a second to a
//! second. Pieces, leaf first:
//! - [`ParticleStore`]: the live sparkles
//! - [`Spawner`]: randomized bursts at the pointer
//! - [`Integrator`]: per-frame Euler motion and fade
//! - [`Renderer`]: clear, then one four-pointed star per sparkle
//! - [`SurfaceManager`]: keeps the canvas the size of the viewport
//! - [`SparkleEngine`]: owns all of the above and runs the frame loop
//!
//! # Example
//!
//! ```ignore
//! use sparkle_fx::{SparkleCanvas, SparkleConfig};
//!
//! view! { <SparkleCanvas config=SparkleConfig::default() /> }
//! ```

mod component;
pub mod config;
mod engine;
mod error;
mod particles;
mod physics;
mod render;
mod spawner;
mod surface;
pub mod theme;

pub use component::SparkleCanvas;
pub use config::SparkleConfig;
pub use engine::{Intent, LoopState, SparkleEngine};
pub use error::{BootError, ConfigError};
pub use particles::{Particle, ParticleStore};
pub use physics::Integrator;
pub use render::{Renderer, star_points};
pub use spawner::{PointerTarget, Spawner};
pub use surface::{CanvasSurface, Surface, SurfaceManager};
pub use theme::{Color, Palette};
