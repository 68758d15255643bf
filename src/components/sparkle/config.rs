//! Tunable parameters for bursts, motion and drawing.
//!
//! Every field has a default, so a page may override any subset through a
//! JSON `<script id="sparkle-config">` element.

use serde::Deserialize;

use super::error::ConfigError;
use super::theme::Palette;

/// Targets that never trigger a burst: interactive controls and the lightbox overlay.
pub const DEFAULT_EXEMPT_SELECTOR: &str = "button, a, input, select, textarea, .lightbox";

/// Complete sparkle configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
	/// Smallest burst size (inclusive).
	pub burst_min: usize,
	/// Largest burst size (inclusive).
	pub burst_max: usize,
	/// Width of the symmetric range both velocity components are drawn from.
	pub spread: f64,
	/// Upward bias subtracted from every initial `vy`.
	pub lift: f64,
	pub size_min: f64,
	pub size_max: f64,
	/// Per-frame life loss, drawn from `decay_min..decay_max`.
	pub decay_min: f64,
	pub decay_max: f64,
	/// Added to `vy` every frame.
	pub gravity: f64,
	/// Inner star radius as a fraction of the outer one.
	pub inner_radius_ratio: f64,
	pub palette: Palette,
	/// CSS selector matched with `closest()` against the click target.
	pub exempt_selector: String,
}

impl Default for SparkleConfig {
	fn default() -> Self {
		Self {
			burst_min: 8,
			burst_max: 13,
			spread: 6.0,
			lift: 2.0,
			size_min: 1.0,
			size_max: 4.0,
			decay_min: 0.015,
			decay_max: 0.035,
			gravity: 0.08,
			inner_radius_ratio: 0.4,
			palette: Palette::default(),
			exempt_selector: DEFAULT_EXEMPT_SELECTOR.to_string(),
		}
	}
}

impl SparkleConfig {
	/// Parses and validates a JSON override. Missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigSourceError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that every sampled range is non-empty and every particle it
	/// can produce has positive size and decay.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.palette.is_empty() {
			return Err(ConfigError::EmptyPalette);
		}
		if self.burst_max == 0 || self.burst_min > self.burst_max {
			return Err(ConfigError::InvalidRange {
				name: "burst",
				min: self.burst_min as f64,
				max: self.burst_max as f64,
			});
		}
		positive("size_min", self.size_min)?;
		range("size", self.size_min, self.size_max)?;
		positive("decay_min", self.decay_min)?;
		range("decay", self.decay_min, self.decay_max)?;
		non_negative("spread", self.spread)?;
		positive("gravity", self.gravity)?;
		positive("inner_radius_ratio", self.inner_radius_ratio)?;
		Ok(())
	}

	/// Longest possible particle lifetime, in frames.
	pub fn max_lifetime_frames(&self) -> u32 {
		(1.0 / self.decay_min).ceil() as u32
	}
}

/// Why a JSON config override was not applied.
#[derive(thiserror::Error, Debug)]
pub enum ConfigSourceError {
	#[error("malformed sparkle config: {0}")]
	Parse(#[from] serde_json::Error),

	#[error(transparent)]
	Invalid(#[from] ConfigError),
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
	if value > 0.0 && value.is_finite() {
		Ok(())
	} else {
		Err(ConfigError::NotPositive { name, value })
	}
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
	if value >= 0.0 && value.is_finite() {
		Ok(())
	} else {
		Err(ConfigError::Negative { name, value })
	}
}

fn range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
	if min <= max && max.is_finite() {
		Ok(())
	} else {
		Err(ConfigError::InvalidRange { name, min, max })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let config = SparkleConfig::default();
		assert_eq!(config.validate(), Ok(()));
		assert_eq!(config.burst_min, 8);
		assert_eq!(config.burst_max, 13);
		assert_eq!(config.palette.len(), 5);
	}

	#[test]
	fn worst_case_lifetime_is_bounded() {
		// 1 / 0.015 = 66.67 frames, a bit over a second at 60 Hz
		assert_eq!(SparkleConfig::default().max_lifetime_frames(), 67);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = SparkleConfig::from_json(r#"{ "gravity": 0.2, "burst_max": 20 }"#).unwrap();
		assert_eq!(config.gravity, 0.2);
		assert_eq!(config.burst_max, 20);
		assert_eq!(config.burst_min, 8);
		assert_eq!(config.exempt_selector, DEFAULT_EXEMPT_SELECTOR);
	}

	#[test]
	fn json_palette_override() {
		let config = SparkleConfig::from_json(r##"{ "palette": ["#123456"] }"##).unwrap();
		assert_eq!(config.palette.len(), 1);
		assert_eq!(config.palette.get(0).to_css_rgb(), "#123456");
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		assert!(matches!(
			SparkleConfig::from_json("{ gravity: "),
			Err(ConfigSourceError::Parse(_))
		));
		assert!(matches!(
			SparkleConfig::from_json(r#"{ "palette": ["pink"] }"#),
			Err(ConfigSourceError::Parse(_))
		));
	}

	#[test]
	fn rejects_inverted_and_degenerate_ranges() {
		let inverted = SparkleConfig {
			burst_min: 10,
			burst_max: 4,
			..SparkleConfig::default()
		};
		assert!(matches!(
			inverted.validate(),
			Err(ConfigError::InvalidRange { name: "burst", .. })
		));

		let no_decay = SparkleConfig {
			decay_min: 0.0,
			..SparkleConfig::default()
		};
		assert_eq!(
			no_decay.validate(),
			Err(ConfigError::NotPositive {
				name: "decay_min",
				value: 0.0
			})
		);

		let empty = SparkleConfig {
			palette: Palette { colors: Vec::new() },
			..SparkleConfig::default()
		};
		assert_eq!(empty.validate(), Err(ConfigError::EmptyPalette));

		let upward = SparkleConfig {
			gravity: -1.0,
			..SparkleConfig::default()
		};
		assert!(matches!(
			upward.validate(),
			Err(ConfigError::NotPositive { name: "gravity", .. })
		));

		let weightless = SparkleConfig {
			gravity: 0.0,
			..SparkleConfig::default()
		};
		assert_eq!(
			weightless.validate(),
			Err(ConfigError::NotPositive {
				name: "gravity",
				value: 0.0
			})
		);

		let scattered = SparkleConfig {
			spread: -1.0,
			..SparkleConfig::default()
		};
		assert!(matches!(
			scattered.validate(),
			Err(ConfigError::Negative { name: "spread", .. })
		));
	}

	#[test]
	fn invalid_json_values_are_rejected_after_parsing() {
		assert!(matches!(
			SparkleConfig::from_json(r#"{ "size_min": 5.0, "size_max": 1.0 }"#),
			Err(ConfigSourceError::Invalid(ConfigError::InvalidRange { name: "size", .. }))
		));
	}
}
