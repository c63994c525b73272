//! Remote-control button glyphs.
//!
//! Each [`RemoteButton`] maps to one image resource named
//! `{GLYPH_IMAGE_PREFIX}{Name}.{GLYPH_IMAGE_EXTENSION}`, e.g.
//! `tvosToastMenuWhite.png`.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tvtoast_primitives::{ImageBundle, Rect};

use crate::attributed::AttributedText;

/// Prefix shared by every glyph resource name.
pub const GLYPH_IMAGE_PREFIX: &str = "tvosToast";
/// File extension of glyph resources.
pub const GLYPH_IMAGE_EXTENSION: &str = "png";

/// Visual variant of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphTint {
	/// Dark glyph for light backgrounds.
	Black,
	/// Light glyph for dark backgrounds.
	White,
}

/// A physical button on the remote, in a black and a white variant.
///
/// Parsing accepts the variant name in any ASCII case.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RemoteButton {
	MenuBlack,
	MenuWhite,
	/// Home (TV) button.
	ScreenBlack,
	ScreenWhite,
	PlayPauseBlack,
	PlayPauseWhite,
	/// Voice assistant button.
	SiriBlack,
	SiriWhite,
	VolumeBlack,
	VolumeWhite,
}

impl RemoteButton {
	/// Iterates over every glyph in declaration order.
	pub fn all() -> impl Iterator<Item = Self> {
		Self::iter()
	}

	/// The identifier name, e.g. `"MenuWhite"`.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// The image resource this glyph is drawn from.
	pub fn image_name(self) -> String {
		format!(
			"{GLYPH_IMAGE_PREFIX}{}.{GLYPH_IMAGE_EXTENSION}",
			self.name()
		)
	}

	pub fn tint(self) -> GlyphTint {
		match self {
			Self::MenuBlack
			| Self::ScreenBlack
			| Self::PlayPauseBlack
			| Self::SiriBlack
			| Self::VolumeBlack => GlyphTint::Black,
			Self::MenuWhite
			| Self::ScreenWhite
			| Self::PlayPauseWhite
			| Self::SiriWhite
			| Self::VolumeWhite => GlyphTint::White,
		}
	}

	/// Attributed text holding only this glyph.
	///
	/// Sizing is left to the caller: without `bounds` the glyph keeps the
	/// image's natural size.
	pub fn attributed_text(self, bounds: Option<Rect>, bundle: &dyn ImageBundle) -> AttributedText {
		AttributedText::image(&self.image_name(), bounds, bundle)
	}
}
