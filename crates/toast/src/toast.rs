//! Toast construction and presentation.

use std::fmt;
use std::time::Duration;

use tvtoast_primitives::Rect;
use tvtoast_text::AttributedText;

use crate::content::{ContentView, ToastContent};
use crate::host::Host;
use crate::style::{ResolvedStyle, ToastStyle};
use crate::timeline::{Timeline, ToastPhase};

/// Identifies a presented toast within its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub(crate) u64);

impl fmt::Display for ToastId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "toast#{}", self.0)
	}
}

/// Horizontal alignment of label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlignment {
	Left,
	#[default]
	Center,
	Right,
}

/// The text element of a presented toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
	pub text: AttributedText,
	pub alignment: TextAlignment,
	/// Maximum number of lines; `None` is unlimited.
	pub max_lines: Option<usize>,
}

impl Label {
	/// A centered label with no line limit.
	pub fn new(text: AttributedText) -> Self {
		Self {
			text,
			alignment: TextAlignment::Center,
			max_lines: None,
		}
	}
}

/// A toast that has not been presented yet.
///
/// Presentation consumes the toast, so a toast can be presented at most
/// once.
///
/// ```
/// use std::time::Duration;
/// use tvtoast::{Host, Position, Toast, ToastStyle};
/// use tvtoast_primitives::Rect;
///
/// let mut host = Host::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
/// let id = Toast::with_style(
/// 	Rect::new(0.0, 0.0, 800.0, 140.0),
/// 	ToastStyle::new().position(Position::top_center(40.0)),
/// )
/// .content("Saved")
/// .present_on(&mut host);
///
/// assert_eq!(host.get(id).map(|t| t.frame().top()), Some(40.0));
/// ```
#[derive(Debug)]
pub struct Toast {
	frame: Rect,
	style: ToastStyle,
	content: ToastContent,
}

impl Toast {
	/// A toast of `frame`'s size with the default style and no content.
	///
	/// Only the frame's size is kept on presentation; its origin is
	/// recomputed from the position.
	pub fn new(frame: Rect) -> Self {
		Self::with_style(frame, ToastStyle::default())
	}

	pub fn with_style(frame: Rect, style: ToastStyle) -> Self {
		Self {
			frame,
			style,
			content: ToastContent::None,
		}
	}

	/// Replaces the style overrides (builder pattern).
	#[must_use]
	pub fn style(mut self, style: ToastStyle) -> Self {
		self.style = style;
		self
	}

	/// Sets the content, replacing any previous content (builder pattern).
	#[must_use]
	pub fn content(mut self, content: impl Into<ToastContent>) -> Self {
		self.content = content.into();
		self
	}

	/// Sets custom content (builder pattern).
	#[must_use]
	pub fn custom(self, view: impl ContentView + 'static) -> Self {
		self.content(ToastContent::custom(view))
	}

	pub fn frame(&self) -> Rect {
		self.frame
	}

	pub fn style_overrides(&self) -> &ToastStyle {
		&self.style
	}

	pub fn content_ref(&self) -> &ToastContent {
		&self.content
	}

	pub fn phase(&self) -> ToastPhase {
		ToastPhase::Constructed
	}

	/// Attaches the toast to `host` and starts its fade-in.
	///
	/// Resolves the style, builds the label from the content, places the
	/// frame at the resolved position and mounts custom content. The host
	/// detaches the toast on its own once the fade-out completes.
	pub fn present_on(self, host: &mut Host) -> ToastId {
		let style = self.style.resolve(host.fonts());
		let frame = style.position.place(self.frame, host.bounds());

		let (label, content_view) = match self.content {
			ToastContent::None => (None, None),
			ToastContent::Text(text) => (
				Some(Label::new(AttributedText::styled(
					text,
					style.font.clone(),
					style.text_color,
				))),
				None,
			),
			ToastContent::RichText(text) => (Some(Label::new(text)), None),
			ToastContent::HintText(hint) => (
				Some(Label::new(hint.build(
					&style.font,
					style.text_color,
					host.images(),
				))),
				None,
			),
			ToastContent::Custom(mut view) => {
				view.mount(frame.bounds());
				(None, Some(view))
			}
		};

		let id = host.issue_id();
		tracing::debug!(
			id = %id,
			anchor = ?style.position.anchor,
			x = frame.x,
			y = frame.y,
			duration_ms = duration_millis(style.duration),
			"toast.present"
		);

		let timeline = Timeline::new(style.duration);
		host.attach(PresentedToast {
			id,
			frame,
			style,
			label,
			content_view,
			timeline,
		});
		id
	}
}

/// Milliseconds for logging, saturating at `u64::MAX`.
fn duration_millis(duration: Duration) -> u64 {
	u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// A toast attached to a host.
#[derive(Debug)]
pub struct PresentedToast {
	id: ToastId,
	frame: Rect,
	style: ResolvedStyle,
	label: Option<Label>,
	content_view: Option<Box<dyn ContentView>>,
	pub(crate) timeline: Timeline,
}

impl PresentedToast {
	pub fn id(&self) -> ToastId {
		self.id
	}

	/// Frame in host coordinates.
	pub fn frame(&self) -> Rect {
		self.frame
	}

	pub fn style(&self) -> &ResolvedStyle {
		&self.style
	}

	/// The text element, absent for custom or empty content.
	pub fn label(&self) -> Option<&Label> {
		self.label.as_ref()
	}

	pub fn content_view(&self) -> Option<&dyn ContentView> {
		self.content_view.as_deref()
	}

	pub fn opacity(&self) -> f32 {
		self.timeline.opacity()
	}

	pub fn phase(&self) -> ToastPhase {
		self.timeline.phase()
	}

	pub fn timeline(&self) -> &Timeline {
		&self.timeline
	}

	/// Toasts never take input.
	pub fn is_user_interaction_enabled(&self) -> bool {
		false
	}

	pub(crate) fn detach(&mut self) {
		if let Some(view) = self.content_view.as_mut() {
			view.unmount();
		}
		tracing::debug!(id = %self.id, "toast.detach");
	}
}
