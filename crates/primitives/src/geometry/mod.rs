//! Floating-point geometry in host coordinates.
//!
//! The origin is the top-left corner of the host surface; `y` grows
//! downward. Edge accessors follow the same convention as frame-based view
//! layout: `right = x + width`, `bottom = y + height`.

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downward.
	pub y: f64,
}

impl Point {
	/// The origin.
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// An empty size.
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Creates a size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Returns true if either dimension is zero or negative.
	pub fn is_empty(self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}
}

/// An axis-aligned rectangle.
///
/// Edge setters (`with_top`, `with_right`, ...) move the rectangle so the
/// named edge lands on the given coordinate while keeping its size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Rect {
	/// The empty rectangle at the origin.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

	/// Creates a rectangle from its origin and size components.
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Creates a rectangle of the given size anchored at the origin.
	pub const fn from_size(size: Size) -> Self {
		Self::new(0.0, 0.0, size.width, size.height)
	}

	pub const fn origin(self) -> Point {
		Point::new(self.x, self.y)
	}

	pub const fn size(self) -> Size {
		Size::new(self.width, self.height)
	}

	pub fn left(self) -> f64 {
		self.x
	}

	pub fn right(self) -> f64 {
		self.x + self.width
	}

	pub fn top(self) -> f64 {
		self.y
	}

	pub fn bottom(self) -> f64 {
		self.y + self.height
	}

	pub fn center_x(self) -> f64 {
		self.x + self.width / 2.0
	}

	pub fn center_y(self) -> f64 {
		self.y + self.height / 2.0
	}

	/// Returns the rectangle translated so its left edge is at `left`.
	#[must_use]
	pub fn with_left(mut self, left: f64) -> Self {
		self.x = left;
		self
	}

	/// Returns the rectangle translated so its right edge is at `right`.
	#[must_use]
	pub fn with_right(mut self, right: f64) -> Self {
		self.x = right - self.width;
		self
	}

	/// Returns the rectangle translated so its top edge is at `top`.
	#[must_use]
	pub fn with_top(mut self, top: f64) -> Self {
		self.y = top;
		self
	}

	/// Returns the rectangle translated so its bottom edge is at `bottom`.
	#[must_use]
	pub fn with_bottom(mut self, bottom: f64) -> Self {
		self.y = bottom - self.height;
		self
	}

	/// Returns the rectangle translated so its vertical center line is at `center_x`.
	#[must_use]
	pub fn with_center_x(mut self, center_x: f64) -> Self {
		self.x = center_x - self.width / 2.0;
		self
	}

	/// Returns the same rectangle moved to the origin (local bounds).
	#[must_use]
	pub fn bounds(self) -> Self {
		Self::from_size(self.size())
	}

	/// Returns true if `point` lies inside; the origin edges are inclusive,
	/// the far edges exclusive.
	pub fn contains(self, point: Point) -> bool {
		point.x >= self.left()
			&& point.x < self.right()
			&& point.y >= self.top()
			&& point.y < self.bottom()
	}
}
