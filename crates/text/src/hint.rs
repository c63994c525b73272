//! Hint text: strings interleaved with remote-button glyphs.

use tvtoast_primitives::{Color, Font, ImageBundle, Rect};

use crate::attributed::AttributedText;
use crate::glyph::RemoteButton;

/// Points added to the font size to get a glyph's edge length.
pub const GLYPH_SIZE_PADDING: f64 = 30.0;

/// One element of a hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HintElement {
	Text(String),
	Glyph(RemoteButton),
}

impl From<&str> for HintElement {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for HintElement {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<RemoteButton> for HintElement {
	fn from(button: RemoteButton) -> Self {
		Self::Glyph(button)
	}
}

/// An ordered sequence of hint elements.
///
/// Usually built with [`hint_text!`](crate::hint_text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HintText {
	elements: Vec<HintElement>,
}

impl HintText {
	pub fn new<I>(elements: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<HintElement>,
	{
		Self {
			elements: elements.into_iter().map(Into::into).collect(),
		}
	}

	pub fn elements(&self) -> &[HintElement] {
		&self.elements
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Bounds given to a glyph next to text set in `font`.
	///
	/// The glyph is a square `point_size + 30` on a side, lowered by a
	/// quarter of its size so it centers against the surrounding text.
	pub fn glyph_bounds(font: &Font) -> Rect {
		let size = font.point_size + GLYPH_SIZE_PADDING;
		Rect::new(0.0, -size / 4.0, size, size)
	}

	/// Composes the elements, in order, into one attributed text.
	///
	/// Strings take `font` and `color`; glyphs are sized by
	/// [`HintText::glyph_bounds`] and looked up in `bundle`.
	pub fn build(&self, font: &Font, color: Color, bundle: &dyn ImageBundle) -> AttributedText {
		self.elements
			.iter()
			.map(|element| match element {
				HintElement::Text(text) => AttributedText::styled(text.as_str(), font.clone(), color),
				HintElement::Glyph(button) => {
					button.attributed_text(Some(Self::glyph_bounds(font)), bundle)
				}
			})
			.collect()
	}
}

impl FromIterator<HintElement> for HintText {
	fn from_iter<T: IntoIterator<Item = HintElement>>(iter: T) -> Self {
		Self {
			elements: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tvtoast_primitives::{Image, Size, StaticBundle};

	use super::*;
	use crate::attributed::{Attachment, Run};
	use crate::hint_text;

	#[test]
	fn glyph_between_text_is_sized_from_font() {
		let font = Font::system(20.0);
		let hint = hint_text!["Press ", RemoteButton::MenuWhite, " to exit"];
		let built = hint.build(&font, Color::WHITE, &StaticBundle::new());

		let expected = AttributedText::concat([
			&AttributedText::styled("Press ", font.clone(), Color::WHITE),
			&AttributedText::attachment(Attachment::new(
				Image::placeholder("tvosToastMenuWhite.png"),
				Some(Rect::new(0.0, -12.5, 50.0, 50.0)),
			)),
			&AttributedText::styled(" to exit", font, Color::WHITE),
		]);
		assert_eq!(built, expected);
		assert_eq!(built.runs().len(), 3);
		assert!(matches!(built.runs()[1], Run::Attachment(_)));
	}

	#[test]
	fn glyph_keeps_bundle_image_but_hint_sizing() {
		let bundle = StaticBundle::new().with_image("tvosToastPlayPauseWhite.png", Size::new(90.0, 90.0));
		let hint = hint_text![RemoteButton::PlayPauseWhite];
		let built = hint.build(&Font::system(38.0), Color::WHITE, &bundle);

		let attachment = built.attachments().next().cloned();
		assert_eq!(
			attachment,
			Some(Attachment::new(
				Image::new("tvosToastPlayPauseWhite.png", Size::new(90.0, 90.0)),
				Some(Rect::new(0.0, -17.0, 68.0, 68.0)),
			))
		);
	}

	#[test]
	fn order_is_preserved() {
		let hint = hint_text![RemoteButton::VolumeWhite, "a", RemoteButton::MenuBlack, "b"];
		let built = hint.build(&Font::system(10.0), Color::BLACK, &StaticBundle::new());
		assert_eq!(built.plain_text(), "\u{FFFC}a\u{FFFC}b");
	}

	#[test]
	fn empty_hint_builds_empty_text() {
		let built = HintText::default().build(&Font::system(10.0), Color::BLACK, &StaticBundle::new());
		assert!(built.is_empty());
	}

	#[test]
	fn new_accepts_homogeneous_iterators() {
		let hint = HintText::new(["a", "b"]);
		assert_eq!(
			hint.elements(),
			[HintElement::from("a"), HintElement::from("b")]
		);
	}
}
