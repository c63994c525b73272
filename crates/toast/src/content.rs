//! What a toast shows.

use std::fmt;

use tvtoast_primitives::Rect;
use tvtoast_text::{AttributedText, HintText};

/// Arbitrary caller-provided content shown inside a toast.
///
/// The view is mounted into the toast's content area when the toast is
/// attached to a host and unmounted when it detaches.
pub trait ContentView: fmt::Debug {
	/// Called once on attach. `bounds` are in the toast's own coordinates.
	fn mount(&mut self, bounds: Rect) {
		let _ = bounds;
	}

	/// Called once on detach.
	fn unmount(&mut self) {}
}

/// The single content source of a toast.
#[derive(Debug, Default)]
pub enum ToastContent {
	#[default]
	None,
	/// Plain text, styled with the resolved font and text color.
	Text(String),
	/// Rich text, shown as-is.
	RichText(AttributedText),
	/// Hint text, built with the resolved font and text color.
	HintText(HintText),
	Custom(Box<dyn ContentView>),
}

impl ToastContent {
	/// Picks one content source out of independently optional ones.
	///
	/// Hint text wins over rich text, which wins over plain text. The
	/// losing sources are dropped.
	pub fn from_sources(
		text: Option<String>,
		rich_text: Option<AttributedText>,
		hint_text: Option<HintText>,
	) -> Self {
		match (hint_text, rich_text, text) {
			(Some(hint), _, _) => Self::HintText(hint),
			(None, Some(rich), _) => Self::RichText(rich),
			(None, None, Some(text)) => Self::Text(text),
			(None, None, None) => Self::None,
		}
	}

	pub fn custom(view: impl ContentView + 'static) -> Self {
		Self::Custom(Box::new(view))
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// True for the variants rendered through the toast's label.
	pub fn is_textual(&self) -> bool {
		matches!(self, Self::Text(_) | Self::RichText(_) | Self::HintText(_))
	}
}

impl From<&str> for ToastContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for ToastContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<AttributedText> for ToastContent {
	fn from(text: AttributedText) -> Self {
		Self::RichText(text)
	}
}

impl From<HintText> for ToastContent {
	fn from(hint: HintText) -> Self {
		Self::HintText(hint)
	}
}

#[cfg(test)]
mod tests {
	use tvtoast_primitives::{Color, Font};
	use tvtoast_text::{RemoteButton, hint_text};

	use super::*;

	#[test]
	fn hint_wins_over_rich_and_plain_text() {
		let hint = hint_text!["Press ", RemoteButton::MenuWhite];
		let content = ToastContent::from_sources(
			Some("plain".into()),
			Some(AttributedText::styled("rich", Font::system(20.0), Color::RED)),
			Some(hint.clone()),
		);
		assert!(matches!(content, ToastContent::HintText(h) if h == hint));
	}

	#[test]
	fn rich_wins_over_plain_text() {
		let rich = AttributedText::styled("rich", Font::system(20.0), Color::RED);
		let content = ToastContent::from_sources(Some("plain".into()), Some(rich.clone()), None);
		assert!(matches!(content, ToastContent::RichText(r) if r == rich));
	}

	#[test]
	fn plain_text_alone() {
		let content = ToastContent::from_sources(Some("plain".into()), None, None);
		assert!(matches!(content, ToastContent::Text(t) if t == "plain"));
	}

	#[test]
	fn nothing_set_is_none() {
		assert!(ToastContent::from_sources(None, None, None).is_none());
	}

	#[test]
	fn custom_is_not_textual() {
		#[derive(Debug)]
		struct Spinner;
		impl ContentView for Spinner {}

		let content = ToastContent::custom(Spinner);
		assert!(!content.is_textual());
		assert!(!content.is_none());
		assert!(ToastContent::from("hi").is_textual());
	}
}
