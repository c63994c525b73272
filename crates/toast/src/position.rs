//! Screen anchors and frame placement.

use serde::{Deserialize, Serialize};
use tvtoast_primitives::Rect;

/// Inset applied when no position is configured.
pub const DEFAULT_INSET: f64 = 20.0;

/// One of the six screen positions a toast can be anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
	TopCenter,
	TopLeft,
	TopRight,
	#[default]
	BottomCenter,
	BottomLeft,
	BottomRight,
}

impl Anchor {
	pub const ALL: [Self; 6] = [
		Self::TopCenter,
		Self::TopLeft,
		Self::TopRight,
		Self::BottomCenter,
		Self::BottomLeft,
		Self::BottomRight,
	];

	pub fn is_top(self) -> bool {
		matches!(self, Self::TopCenter | Self::TopLeft | Self::TopRight)
	}
}

/// An anchor together with its inset from the anchored edges.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
	pub anchor: Anchor,
	/// Distance from each anchored edge. Centered anchors ignore it
	/// horizontally.
	#[serde(default = "default_inset")]
	pub inset: f64,
}

fn default_inset() -> f64 {
	DEFAULT_INSET
}

impl Default for Position {
	/// Bottom center, 20 points up from the bottom edge.
	fn default() -> Self {
		Self::bottom_center(DEFAULT_INSET)
	}
}

impl Position {
	pub const fn new(anchor: Anchor, inset: f64) -> Self {
		Self { anchor, inset }
	}

	pub const fn top_center(inset: f64) -> Self {
		Self::new(Anchor::TopCenter, inset)
	}

	pub const fn top_left(inset: f64) -> Self {
		Self::new(Anchor::TopLeft, inset)
	}

	pub const fn top_right(inset: f64) -> Self {
		Self::new(Anchor::TopRight, inset)
	}

	pub const fn bottom_center(inset: f64) -> Self {
		Self::new(Anchor::BottomCenter, inset)
	}

	pub const fn bottom_left(inset: f64) -> Self {
		Self::new(Anchor::BottomLeft, inset)
	}

	pub const fn bottom_right(inset: f64) -> Self {
		Self::new(Anchor::BottomRight, inset)
	}

	/// Moves `frame` to this position inside `host`, keeping its size.
	///
	/// Each anchor fixes one vertical and one horizontal line: the top or
	/// bottom edge at `inset` from the host's, and either the host's
	/// horizontal center or the left/right edge at `inset`. The result is
	/// not clamped to the host.
	pub fn place(self, frame: Rect, host: Rect) -> Rect {
		let inset = self.inset;
		let frame = if self.anchor.is_top() {
			frame.with_top(host.top() + inset)
		} else {
			frame.with_bottom(host.bottom() - inset)
		};

		match self.anchor {
			Anchor::TopCenter | Anchor::BottomCenter => frame.with_center_x(host.center_x()),
			Anchor::TopLeft | Anchor::BottomLeft => frame.with_left(host.left() + inset),
			Anchor::TopRight | Anchor::BottomRight => frame.with_right(host.right() - inset),
		}
	}
}
