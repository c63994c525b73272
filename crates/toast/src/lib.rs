//! Transient, auto-dismissing toast overlays.
//!
//! A [`Toast`] is built detached, with optional [`ToastStyle`] overrides and
//! one [`ToastContent`], then presented onto a [`Host`]. Presentation
//! resolves the style, places the frame at one of six anchors, and starts a
//! fixed fade-in / hold / fade-out [`Timeline`]. The host's
//! [`Host::advance`] drives every attached toast and detaches each one once
//! its fade-out completes.
//!
//! ```
//! use std::time::Duration;
//! use tvtoast::{Host, Toast, ToastPhase};
//! use tvtoast_primitives::Rect;
//! use tvtoast_text::{RemoteButton, hint_text};
//!
//! let mut host = Host::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
//! let id = Toast::new(Rect::new(0.0, 0.0, 800.0, 140.0))
//!     .content(hint_text!["Press ", RemoteButton::MenuWhite, " to exit"])
//!     .present_on(&mut host);
//!
//! host.advance(Duration::from_millis(3300));
//! assert_eq!(host.phase(id), Some(ToastPhase::Removed));
//! ```

pub mod animation;
pub mod config;
mod content;
mod error;
mod host;
mod position;
mod style;
mod timeline;
mod toast;

pub use config::{FontConfig, HintEntry, StyleConfig, ToastConfig};
pub use content::{ContentView, ToastContent};
pub use error::{ConfigError, Result};
pub use host::{Host, Screen};
pub use position::{Anchor, DEFAULT_INSET, Position};
pub use style::{
	DEFAULT_BACKGROUND_COLOR, DEFAULT_CORNER_RADIUS, DEFAULT_DURATION, DEFAULT_TEXT_COLOR,
	DEFAULT_TEXT_STYLE, ResolvedStyle, ToastStyle,
};
pub use timeline::{FADE_DURATION, Timeline, ToastPhase};
pub use toast::{Label, PresentedToast, TextAlignment, Toast, ToastId};
