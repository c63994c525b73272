//! Label text for toasts.
//!
//! - [`AttributedText`]: immutable styled text with inline image attachments,
//!   composable by concatenation.
//! - [`RemoteButton`]: the catalog of remote-control button glyphs.
//! - [`HintText`]: an ordered mix of strings and glyphs composed into one
//!   [`AttributedText`] against a caller-supplied font and color.
//!
//! ```
//! use tvtoast_primitives::{Color, Font, StaticBundle};
//! use tvtoast_text::{RemoteButton, hint_text};
//!
//! let hint = hint_text!["Press ", RemoteButton::MenuWhite, " to exit"];
//! let text = hint.build(&Font::system(20.0), Color::WHITE, &StaticBundle::new());
//! assert_eq!(text.runs().len(), 3);
//! ```

pub mod attributed;
pub mod glyph;
pub mod hint;
mod macros;

pub use attributed::{Attachment, AttributedText, Attributes, OBJECT_REPLACEMENT, Run, TextRun};
pub use glyph::{GLYPH_IMAGE_EXTENSION, GLYPH_IMAGE_PREFIX, GlyphTint, RemoteButton};
pub use hint::{GLYPH_SIZE_PADDING, HintElement, HintText};
