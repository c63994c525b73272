//! Fonts and font lookup.
//!
//! A [`Font`] is a resolved family plus point size. Lookups go through a
//! [`FontBook`]; its [`FontBook::resolve`] never fails and falls back to the
//! system font at the requested size when a family is unknown.

use std::collections::HashSet;

/// Family name used for the platform system font.
pub const SYSTEM_FAMILY: &str = "system-ui";

/// Stroke weight of a font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontWeight {
	#[default]
	Regular,
	Medium,
	Semibold,
	Bold,
}

/// A resolved font.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
	/// Family name as registered with the font book.
	pub family: String,
	/// Size in points.
	pub point_size: f64,
	pub weight: FontWeight,
	pub italic: bool,
}

impl Font {
	/// Creates a regular, upright font.
	pub fn new(family: impl Into<String>, point_size: f64) -> Self {
		Self {
			family: family.into(),
			point_size,
			weight: FontWeight::Regular,
			italic: false,
		}
	}

	/// The system font at `point_size`.
	pub fn system(point_size: f64) -> Self {
		Self::new(SYSTEM_FAMILY, point_size)
	}

	#[must_use]
	pub fn with_weight(mut self, weight: FontWeight) -> Self {
		self.weight = weight;
		self
	}

	#[must_use]
	pub fn italic(mut self) -> Self {
		self.italic = true;
		self
	}

	pub fn is_system(&self) -> bool {
		self.family == SYSTEM_FAMILY
	}
}

/// Semantic text styles with platform-defined sizes.
///
/// Sizes follow the ten-foot (television) type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TextStyle {
	Title1,
	Title2,
	Title3,
	Headline,
	Subheadline,
	Body,
	Callout,
	Footnote,
	Caption1,
	Caption2,
}

impl TextStyle {
	/// Point size of the style.
	pub const fn point_size(self) -> f64 {
		match self {
			Self::Title1 => 76.0,
			Self::Title2 => 57.0,
			Self::Title3 => 48.0,
			Self::Headline => 38.0,
			Self::Subheadline => 29.0,
			Self::Body => 29.0,
			Self::Callout => 31.0,
			Self::Footnote => 23.0,
			Self::Caption1 => 25.0,
			Self::Caption2 => 23.0,
		}
	}

	pub const fn weight(self) -> FontWeight {
		match self {
			Self::Headline => FontWeight::Semibold,
			Self::Title1 | Self::Title2 | Self::Title3 => FontWeight::Medium,
			_ => FontWeight::Regular,
		}
	}
}

/// Font lookup provided by the host platform.
pub trait FontBook {
	/// Looks up a font by family name, returning `None` if the family is unknown.
	fn font(&self, family: &str, point_size: f64) -> Option<Font>;

	/// The system font at `point_size`.
	fn system_font(&self, point_size: f64) -> Font {
		Font::system(point_size)
	}

	/// The font for a semantic text style.
	fn preferred_font(&self, style: TextStyle) -> Font {
		Font::system(style.point_size()).with_weight(style.weight())
	}

	/// Looks up `family`, falling back to the system font at the same size.
	fn resolve(&self, family: &str, point_size: f64) -> Font {
		match self.font(family, point_size) {
			Some(font) => font,
			None => {
				tracing::debug!(family, point_size, "font.fallback");
				self.system_font(point_size)
			}
		}
	}
}

/// A font book backed by a set of registered family names.
///
/// The system family is always registered.
#[derive(Debug, Clone)]
pub struct SystemFonts {
	families: HashSet<String>,
}

impl Default for SystemFonts {
	fn default() -> Self {
		Self::new()
	}
}

impl SystemFonts {
	pub fn new() -> Self {
		Self {
			families: HashSet::from([SYSTEM_FAMILY.to_string()]),
		}
	}

	/// Registers an additional family (builder pattern).
	#[must_use]
	pub fn with_family(mut self, family: impl Into<String>) -> Self {
		self.families.insert(family.into());
		self
	}

	pub fn contains(&self, family: &str) -> bool {
		self.families.contains(family)
	}
}

impl FontBook for SystemFonts {
	fn font(&self, family: &str, point_size: f64) -> Option<Font> {
		self.contains(family)
			.then(|| Font::new(family, point_size))
	}
}
