//! Toast styling and default resolution.
//!
//! A [`ToastStyle`] holds caller overrides; every field is optional. At
//! presentation it is resolved against the defaults into a complete
//! [`ResolvedStyle`]. Resolution is a pure function of the overrides and
//! the font book.

use std::time::Duration;

use tvtoast_primitives::{Color, Font, FontBook, TextStyle};

use crate::position::Position;

/// How long a toast stays up, measured from the start of its fade-in.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::GRAY;
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
/// Text style whose preferred font is used when no font is set.
pub const DEFAULT_TEXT_STYLE: TextStyle = TextStyle::Headline;

/// Caller overrides for a toast's appearance and timing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStyle {
	pub position: Option<Position>,
	pub duration: Option<Duration>,
	pub background_color: Option<Color>,
	pub corner_radius: Option<f64>,
	pub font: Option<Font>,
	pub text_color: Option<Color>,
}

impl ToastStyle {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn position(mut self, position: Position) -> Self {
		self.position = Some(position);
		self
	}

	#[must_use]
	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration = Some(duration);
		self
	}

	#[must_use]
	pub fn background_color(mut self, color: Color) -> Self {
		self.background_color = Some(color);
		self
	}

	#[must_use]
	pub fn corner_radius(mut self, radius: f64) -> Self {
		self.corner_radius = Some(radius);
		self
	}

	#[must_use]
	pub fn font(mut self, font: Font) -> Self {
		self.font = Some(font);
		self
	}

	#[must_use]
	pub fn text_color(mut self, color: Color) -> Self {
		self.text_color = Some(color);
		self
	}

	/// Fills every unset field with its default.
	pub fn resolve(&self, fonts: &dyn FontBook) -> ResolvedStyle {
		ResolvedStyle {
			position: self.position.unwrap_or_default(),
			duration: self.duration.unwrap_or(DEFAULT_DURATION),
			background_color: self.background_color.unwrap_or(DEFAULT_BACKGROUND_COLOR),
			corner_radius: self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS),
			font: self
				.font
				.clone()
				.unwrap_or_else(|| fonts.preferred_font(DEFAULT_TEXT_STYLE)),
			text_color: self.text_color.unwrap_or(DEFAULT_TEXT_COLOR),
		}
	}
}

/// A fully resolved style, fixed for the lifetime of a presented toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
	pub position: Position,
	pub duration: Duration,
	pub background_color: Color,
	pub corner_radius: f64,
	pub font: Font,
	pub text_color: Color,
}

#[cfg(test)]
mod tests;
