//! Image resources and bundle lookup.

use std::collections::HashMap;

use crate::geometry::Size;

/// A named image resource with its natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
	name: String,
	size: Size,
}

impl Image {
	pub fn new(name: impl Into<String>, size: Size) -> Self {
		Self {
			name: name.into(),
			size,
		}
	}

	/// An empty stand-in for a resource that could not be found.
	pub fn placeholder(name: impl Into<String>) -> Self {
		Self::new(name, Size::ZERO)
	}

	/// Resource name the image was looked up by.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Natural size of the image.
	pub fn size(&self) -> Size {
		self.size
	}

	pub fn is_placeholder(&self) -> bool {
		self.size.is_empty()
	}
}

/// Image lookup by resource name.
pub trait ImageBundle {
	/// Looks up an image, returning `None` if the bundle has no such resource.
	fn image(&self, name: &str) -> Option<Image>;

	/// Looks up an image, substituting an empty placeholder when missing.
	fn image_or_placeholder(&self, name: &str) -> Image {
		self.image(name).unwrap_or_else(|| {
			tracing::debug!(name, "image.placeholder");
			Image::placeholder(name)
		})
	}
}

/// An in-memory bundle mapping resource names to natural sizes.
#[derive(Debug, Clone, Default)]
pub struct StaticBundle {
	images: HashMap<String, Size>,
}

impl StaticBundle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a resource (builder pattern).
	#[must_use]
	pub fn with_image(mut self, name: impl Into<String>, size: Size) -> Self {
		self.insert(name, size);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, size: Size) {
		self.images.insert(name.into(), size);
	}

	pub fn len(&self) -> usize {
		self.images.len()
	}

	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}
}

impl ImageBundle for StaticBundle {
	fn image(&self, name: &str) -> Option<Image> {
		self.images.get(name).map(|&size| Image::new(name, size))
	}
}
