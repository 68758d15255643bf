//! Error types for the sparkle engine.
//!
//! Neither error ever reaches the page: boot failures disable the effect and
//! config failures fall back to defaults. Both are only logged.

use thiserror::Error;

/// Host environment cannot support the effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootError {
	#[error("no window available")]
	NoWindow,

	#[error("no document available")]
	NoDocument,

	#[error("no drawing surface available")]
	NoSurface,

	#[error("drawing surface has no 2d context: {0}")]
	NoContext(String),
}

/// Rejected sparkle configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("invalid color {0:?}, expected #rrggbb")]
	InvalidColor(String),

	#[error("palette must contain at least one color")]
	EmptyPalette,

	#[error("{name} range is empty or inverted: {min}..{max}")]
	InvalidRange {
		name: &'static str,
		min: f64,
		max: f64,
	},

	#[error("{name} must be positive, got {value}")]
	NotPositive { name: &'static str, value: f64 },

	#[error("{name} must not be negative, got {value}")]
	Negative { name: &'static str, value: f64 },
}
