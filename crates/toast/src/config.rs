//! TOML description of a toast.
//!
//! Every key is optional and uses kebab-case:
//!
//! ```toml
//! text = "Saved"
//! hint = ["Press ", { glyph = "MenuWhite" }, " to exit"]
//!
//! [style]
//! position = { anchor = "top-left", inset = 20.0 }
//! duration = 3.0
//! background-color = "#808080"
//! corner-radius = 10.0
//! text-color = "white"
//! font = { text-style = "headline" }
//! ```
//!
//! Hint entries that are neither strings nor known glyphs are skipped.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tvtoast_primitives::{Color, Font, FontBook, Rect, TextStyle};
use tvtoast_text::{HintElement, HintText, RemoteButton};

use crate::content::ToastContent;
use crate::error::{ConfigError, Result};
use crate::position::Position;
use crate::style::ToastStyle;
use crate::toast::Toast;

/// Parsed toast configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToastConfig {
	#[serde(default)]
	pub style: StyleConfig,
	pub text: Option<String>,
	pub hint: Option<Vec<HintEntry>>,
}

/// The `[style]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleConfig {
	pub position: Option<Position>,
	/// Seconds.
	pub duration: Option<f64>,
	pub background_color: Option<Color>,
	pub corner_radius: Option<f64>,
	pub font: Option<FontConfig>,
	pub text_color: Option<Color>,
}

/// A font given by semantic style or by family name and size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontConfig {
	TextStyle {
		#[serde(rename = "text-style")]
		text_style: TextStyle,
	},
	Named {
		name: String,
		size: f64,
	},
}

impl FontConfig {
	pub fn resolve(&self, fonts: &dyn FontBook) -> Font {
		match self {
			Self::TextStyle { text_style } => fonts.preferred_font(*text_style),
			Self::Named { name, size } => fonts.resolve(name, *size),
		}
	}
}

/// One entry of a `hint` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HintEntry {
	Text(String),
	Glyph { glyph: String },
	/// Anything else; skipped when building the hint.
	Other(serde::de::IgnoredAny),
}

impl HintEntry {
	/// The hint element this entry denotes, if any.
	pub fn to_element(&self) -> Option<HintElement> {
		match self {
			Self::Text(text) => Some(HintElement::Text(text.clone())),
			Self::Glyph { glyph } => match glyph.parse::<RemoteButton>() {
				Ok(button) => Some(HintElement::Glyph(button)),
				Err(_) => {
					tracing::debug!(glyph = %glyph, "hint.skip");
					None
				}
			},
			Self::Other(_) => {
				tracing::debug!("hint.skip");
				None
			}
		}
	}
}

impl ToastConfig {
	/// Parses and validates a configuration.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&input)
	}

	fn validate(&self) -> Result<()> {
		let style = &self.style;
		if let Some(position) = style.position {
			non_negative("style.position.inset", position.inset)?;
		}
		if let Some(duration) = style.duration {
			non_negative("style.duration", duration)?;
		}
		if let Some(radius) = style.corner_radius {
			non_negative("style.corner-radius", radius)?;
		}
		if let Some(FontConfig::Named { size, .. }) = &style.font {
			non_negative("style.font.size", *size)?;
		}
		Ok(())
	}

	/// The hint elements, with unknown entries dropped.
	pub fn hint_text(&self) -> Option<HintText> {
		self.hint
			.as_ref()
			.map(|entries| entries.iter().filter_map(HintEntry::to_element).collect())
	}

	/// Style overrides with fonts resolved through `fonts`.
	pub fn toast_style(&self, fonts: &dyn FontBook) -> Result<ToastStyle> {
		let style = &self.style;
		let duration = style
			.duration
			.map(Duration::try_from_secs_f64)
			.transpose()
			.map_err(|err| ConfigError::Invalid {
				field: "style.duration",
				reason: err.to_string(),
			})?;

		Ok(ToastStyle {
			position: style.position,
			duration,
			background_color: style.background_color,
			corner_radius: style.corner_radius,
			font: style.font.as_ref().map(|font| font.resolve(fonts)),
			text_color: style.text_color,
		})
	}

	/// Builds a toast of `frame`'s size.
	///
	/// Hint text takes priority over plain text.
	pub fn into_toast(self, frame: Rect, fonts: &dyn FontBook) -> Result<Toast> {
		let style = self.toast_style(fonts)?;
		let hint = self.hint_text();
		let content = ToastContent::from_sources(self.text, None, hint);
		Ok(Toast::with_style(frame, style).content(content))
	}
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
	if !value.is_finite() {
		return Err(ConfigError::Invalid {
			field,
			reason: format!("{value} is not finite"),
		});
	}
	if value < 0.0 {
		return Err(ConfigError::Invalid {
			field,
			reason: format!("{value} is negative"),
		});
	}
	Ok(())
}
