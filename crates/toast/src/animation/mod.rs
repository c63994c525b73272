//! Animation primitives for opacity transitions.
//!
//! Provides the [`Animatable`] trait for interpolated values, [`Easing`]
//! curves (including a damped [`Spring`]) and [`Tween`], which is evaluated
//! against a logical clock rather than wall time so that the host's refresh
//! callback fully determines progress.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tvtoast::animation::{Easing, Spring, Tween};
//!
//! let fade = Tween::new(0.0f32, 1.0f32, Duration::from_millis(300))
//!     .with_easing(Easing::Spring(Spring::CRITICAL));
//!
//! assert_eq!(fade.value_at(Duration::ZERO), 0.0);
//! assert_eq!(fade.value_at(Duration::from_millis(300)), 1.0);
//! ```

mod easing;
mod lerp;
mod spring;
mod tween;

pub use easing::Easing;
pub use lerp::Animatable;
pub use spring::{STIFFNESS, Spring};
pub use tween::Tween;
