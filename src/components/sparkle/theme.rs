//! Sparkle colors and the palette bursts draw from.

use serde::Deserialize;

use super::error::ConfigError;

/// Opaque RGB color. Opacity comes from particle life at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses `#rrggbb` (case-insensitive).
	pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
		let digits = hex
			.strip_prefix('#')
			.filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
			.ok_or_else(|| ConfigError::InvalidColor(hex.to_string()))?;
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&digits[range], 16)
				.map_err(|_| ConfigError::InvalidColor(hex.to_string()))
		};
		Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl TryFrom<String> for Color {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_hex(&value)
	}
}

/// The fixed set of colors a burst picks from.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Hot pink, violet, cyan, amber and white.
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::rgb(0xff, 0x2d, 0x95), // Hot pink
				Color::rgb(0xa8, 0x55, 0xf7), // Violet
				Color::rgb(0x00, 0xe5, 0xff), // Cyan
				Color::rgb(0xfb, 0xbf, 0x24), // Amber
				Color::rgb(0xff, 0xff, 0xff), // White
			],
		}
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color at `index`, wrapping around the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::neon()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_colors() {
		assert_eq!(Color::from_hex("#ff2d95").unwrap(), Color::rgb(255, 45, 149));
		assert_eq!(Color::from_hex("#A855F7").unwrap(), Color::rgb(168, 85, 247));
	}

	#[test]
	fn rejects_malformed_hex() {
		for bad in ["ff2d95", "#ff2d9", "#gg0000", "#ff2d95aa", "", "#+f+f+f", "#-1ffff"] {
			assert!(
				matches!(Color::from_hex(bad), Err(ConfigError::InvalidColor(_))),
				"{bad:?} should be rejected"
			);
		}
	}

	#[test]
	fn css_output_is_lowercase_hex() {
		assert_eq!(Color::rgb(0, 229, 255).to_css_rgb(), "#00e5ff");
	}

	#[test]
	fn palette_deserializes_from_hex_list() {
		let palette: Palette = serde_json::from_str(r##"["#000000", "#ffffff"]"##).unwrap();
		assert_eq!(palette.len(), 2);
		assert_eq!(palette.get(3), Color::rgb(255, 255, 255));
	}

	#[test]
	fn neon_palette_has_five_colors() {
		let palette = Palette::default();
		assert_eq!(palette.len(), 5);
		assert_eq!(palette.get(0).to_css_rgb(), "#ff2d95");
		assert_eq!(palette.get(4).to_css_rgb(), "#ffffff");
	}
}
