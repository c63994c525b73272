//! Immutable attributed text.
//!
//! An [`AttributedText`] is a sequence of [`Run`]s: styled text runs and
//! inline image attachments. Composition always produces a new value and
//! keeps every run's own styling; adjacent text runs with identical
//! attributes are coalesced so that equality compares content rather than
//! how the value was assembled.

use tvtoast_primitives::{Color, Font, FontBook, ImageBundle, Image, Rect};

/// Character that stands in for an attachment in [`AttributedText::plain_text`].
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Visual attributes of a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
	pub font: Font,
	/// Foreground color.
	pub color: Color,
}

/// A contiguous run of text sharing one set of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
	pub text: String,
	pub attributes: Attributes,
}

/// An inline image.
///
/// Without explicit bounds the image is laid out at its natural size. The
/// bounds origin offsets the image relative to the text baseline; a
/// negative `y` lowers it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
	pub image: Image,
	pub bounds: Option<Rect>,
}

impl Attachment {
	pub fn new(image: Image, bounds: Option<Rect>) -> Self {
		Self { image, bounds }
	}

	/// The explicit bounds, or the natural size at the origin.
	pub fn effective_bounds(&self) -> Rect {
		self.bounds
			.unwrap_or_else(|| Rect::from_size(self.image.size()))
	}
}

/// One element of attributed text.
#[derive(Debug, Clone, PartialEq)]
pub enum Run {
	Text(TextRun),
	Attachment(Attachment),
}

/// Styled text with inline attachments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
	runs: Vec<Run>,
}

impl AttributedText {
	/// Empty text.
	pub fn new() -> Self {
		Self::default()
	}

	/// Text in a single font and foreground color.
	pub fn styled(text: impl Into<String>, font: Font, color: Color) -> Self {
		let mut out = Self::new();
		out.push(Run::Text(TextRun {
			text: text.into(),
			attributes: Attributes { font, color },
		}));
		out
	}

	/// Text in the named font, resolved through `fonts`.
	///
	/// Unknown families fall back to the system font at `point_size`.
	pub fn with_font_name(
		text: impl Into<String>,
		family: &str,
		point_size: f64,
		color: Color,
		fonts: &dyn FontBook,
	) -> Self {
		Self::styled(text, fonts.resolve(family, point_size), color)
	}

	/// A single inline image looked up in `bundle`.
	///
	/// A missing resource yields an empty placeholder attachment.
	pub fn image(name: &str, bounds: Option<Rect>, bundle: &dyn ImageBundle) -> Self {
		Self::attachment(Attachment::new(bundle.image_or_placeholder(name), bounds))
	}

	pub fn attachment(attachment: Attachment) -> Self {
		Self {
			runs: vec![Run::Attachment(attachment)],
		}
	}

	/// Concatenates `parts` in order.
	pub fn concat<'a, I>(parts: I) -> Self
	where
		I: IntoIterator<Item = &'a AttributedText>,
	{
		let mut out = Self::new();
		for part in parts {
			out.extend_runs(part.runs.iter().cloned());
		}
		out
	}

	/// Returns `self` followed by `other`.
	#[must_use]
	pub fn appending(&self, other: &AttributedText) -> Self {
		Self::concat([self, other])
	}

	pub fn runs(&self) -> &[Run] {
		&self.runs
	}

	pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
		self.runs.iter().filter_map(|run| match run {
			Run::Attachment(attachment) => Some(attachment),
			Run::Text(_) => None,
		})
	}

	/// The text content, with [`OBJECT_REPLACEMENT`] for each attachment.
	pub fn plain_text(&self) -> String {
		let mut out = String::new();
		for run in &self.runs {
			match run {
				Run::Text(run) => out.push_str(&run.text),
				Run::Attachment(_) => out.push(OBJECT_REPLACEMENT),
			}
		}
		out
	}

	/// Length in characters, counting each attachment as one.
	pub fn char_count(&self) -> usize {
		self.runs
			.iter()
			.map(|run| match run {
				Run::Text(run) => run.text.chars().count(),
				Run::Attachment(_) => 1,
			})
			.sum()
	}

	pub fn is_empty(&self) -> bool {
		self.runs.is_empty()
	}

	fn extend_runs(&mut self, runs: impl IntoIterator<Item = Run>) {
		for run in runs {
			self.push(run);
		}
	}

	fn push(&mut self, run: Run) {
		match run {
			Run::Text(run) if run.text.is_empty() => {}
			Run::Text(run) => {
				if let Some(Run::Text(last)) = self.runs.last_mut()
					&& last.attributes == run.attributes
				{
					last.text.push_str(&run.text);
					return;
				}
				self.runs.push(Run::Text(run));
			}
			attachment @ Run::Attachment(_) => self.runs.push(attachment),
		}
	}
}

impl FromIterator<AttributedText> for AttributedText {
	fn from_iter<T: IntoIterator<Item = AttributedText>>(iter: T) -> Self {
		let mut out = Self::new();
		for part in iter {
			out.extend_runs(part.runs);
		}
		out
	}
}
