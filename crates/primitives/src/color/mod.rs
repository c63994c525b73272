//! RGBA colors.
//!
//! Colors parse from `#RRGGBB`, `#RRGGBBAA` or a small set of names
//! (`white`, `gray`, `clear`, ...). Names ignore case and the separators
//! `-`, `_` and space, so `dark-gray`, `Dark Gray` and `darkgray` agree.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// An 8-bit-per-channel color with straight alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	/// Opacity, `0` transparent to `255` opaque.
	pub a: u8,
}

/// Error returned when a string is not a recognized color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0:?}")]
pub struct ColorParseError(pub String);

impl Color {
	pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const DARK_GRAY: Self = Self::rgb(85, 85, 85);
	/// Neutral 50% gray.
	pub const GRAY: Self = Self::rgb(128, 128, 128);
	pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const RED: Self = Self::rgb(255, 0, 0);
	pub const GREEN: Self = Self::rgb(0, 255, 0);
	pub const BLUE: Self = Self::rgb(0, 0, 255);
	pub const CYAN: Self = Self::rgb(0, 255, 255);
	pub const YELLOW: Self = Self::rgb(255, 255, 0);
	pub const MAGENTA: Self = Self::rgb(255, 0, 255);
	pub const ORANGE: Self = Self::rgb(255, 128, 0);
	pub const PURPLE: Self = Self::rgb(128, 0, 128);
	pub const BROWN: Self = Self::rgb(153, 102, 51);

	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::rgba(r, g, b, 255)
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Returns the same color with the alpha channel replaced.
	#[must_use]
	pub const fn with_alpha(self, a: u8) -> Self {
		Self { a, ..self }
	}

	/// Alpha as a fraction in `[0.0, 1.0]`.
	pub fn alpha(self) -> f32 {
		f32::from(self.a) / 255.0
	}

	pub fn is_opaque(self) -> bool {
		self.a == 255
	}

	fn from_name(name: &str) -> Option<Self> {
		let normalized: String = name
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.map(|c| c.to_ascii_lowercase())
			.collect();
		let color = match normalized.as_str() {
			"clear" | "transparent" => Self::CLEAR,
			"black" => Self::BLACK,
			"darkgray" | "darkgrey" => Self::DARK_GRAY,
			"gray" | "grey" => Self::GRAY,
			"lightgray" | "lightgrey" => Self::LIGHT_GRAY,
			"white" => Self::WHITE,
			"red" => Self::RED,
			"green" => Self::GREEN,
			"blue" => Self::BLUE,
			"cyan" => Self::CYAN,
			"yellow" => Self::YELLOW,
			"magenta" => Self::MAGENTA,
			"orange" => Self::ORANGE,
			"purple" => Self::PURPLE,
			"brown" => Self::BROWN,
			_ => return None,
		};
		Some(color)
	}

	fn from_hex(hex: &str) -> Option<Self> {
		if !hex.is_ascii() {
			return None;
		}
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
		match hex.len() {
			6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
			8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
			_ => None,
		}
	}
}

impl FromStr for Color {
	type Err = ColorParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let parsed = match trimmed.strip_prefix('#') {
			Some(hex) => Self::from_hex(hex),
			None => Self::from_name(trimmed),
		};
		parsed.ok_or_else(|| ColorParseError(s.to_string()))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
		if !self.is_opaque() {
			write!(f, "{:02x}", self.a)?;
		}
		Ok(())
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
