use std::time::Duration;

use pretty_assertions::assert_eq;
use tvtoast_primitives::{Color, Font, FontBook, FontWeight, SystemFonts, TextStyle};

use super::*;
use crate::position::{Anchor, Position};

/// Font book whose headline is a custom family, to prove the default comes
/// from the book rather than a constant.
struct BrandFonts;

impl FontBook for BrandFonts {
	fn font(&self, family: &str, point_size: f64) -> Option<Font> {
		(family == "Brand").then(|| Font::new(family, point_size))
	}

	fn preferred_font(&self, style: TextStyle) -> Font {
		Font::new("Brand", style.point_size())
	}
}

#[test]
fn unset_fields_resolve_to_defaults() {
	let resolved = ToastStyle::new().resolve(&SystemFonts::new());

	assert_eq!(
		resolved,
		ResolvedStyle {
			position: Position::new(Anchor::BottomCenter, 20.0),
			duration: Duration::from_secs(3),
			background_color: Color::GRAY,
			corner_radius: 10.0,
			font: Font::system(38.0).with_weight(FontWeight::Semibold),
			text_color: Color::WHITE,
		}
	);
}

#[test]
fn default_font_is_the_books_headline() {
	let resolved = ToastStyle::new().resolve(&BrandFonts);
	assert_eq!(resolved.font, Font::new("Brand", 38.0));
}

#[test]
fn overrides_win_field_by_field() {
	let style = ToastStyle::new()
		.position(Position::top_right(40.0))
		.text_color(Color::YELLOW);
	let resolved = style.resolve(&SystemFonts::new());

	assert_eq!(resolved.position, Position::top_right(40.0));
	assert_eq!(resolved.text_color, Color::YELLOW);
	assert_eq!(resolved.background_color, Color::GRAY);
	assert_eq!(resolved.duration, Duration::from_secs(3));
}

#[test]
fn fully_overridden_style_ignores_defaults() {
	let font = Font::new("Avenir", 30.0);
	let style = ToastStyle::new()
		.position(Position::bottom_left(0.0))
		.duration(Duration::from_millis(1500))
		.background_color(Color::BLACK.with_alpha(200))
		.corner_radius(0.0)
		.font(font.clone())
		.text_color(Color::RED);

	assert_eq!(
		style.resolve(&BrandFonts),
		ResolvedStyle {
			position: Position::bottom_left(0.0),
			duration: Duration::from_millis(1500),
			background_color: Color::rgba(0, 0, 0, 200),
			corner_radius: 0.0,
			font,
			text_color: Color::RED,
		}
	);
}

#[test]
fn resolve_does_not_consume_overrides() {
	let style = ToastStyle::new().corner_radius(4.0);
	let first = style.resolve(&SystemFonts::new());
	let second = style.resolve(&SystemFonts::new());
	assert_eq!(first, second);
	assert_eq!(style.corner_radius, Some(4.0));
}
