//! Core value types for toast presentation: geometry, colors, fonts and images.
//!
//! The [`FontBook`] and [`ImageBundle`] traits are the seams toward the host
//! UI platform. Both expose total lookups that fall back to a system font or
//! an empty placeholder image instead of failing.

/// RGBA colors and color parsing.
pub mod color;
/// Font descriptors, text styles and font lookup.
pub mod font;
/// Points, sizes and rectangles measured in points.
pub mod geometry;
/// Image resources and bundle lookup.
pub mod image;

pub use color::{Color, ColorParseError};
pub use font::{Font, FontBook, FontWeight, SYSTEM_FAMILY, SystemFonts, TextStyle};
pub use geometry::{Point, Rect, Size};
pub use image::{Image, ImageBundle, StaticBundle};
