//! Easing functions for animation curves.

use super::spring::Spring;

/// Easing function for controlling animation curves.
///
/// Transforms linear progress `t ∈ [0.0, 1.0]` into curved progress.
///
/// # Example
///
/// ```
/// use tvtoast::animation::{Easing, Spring};
///
/// let eased = Easing::Spring(Spring::CRITICAL).apply(0.5);
/// assert!(eased > 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
	/// Constant speed.
	#[default]
	Linear,

	/// Damped spring response. Only under-damped springs overshoot.
	Spring(Spring),
}

impl Easing {
	/// Apply the easing function to linear progress.
	///
	/// Input `t` is clamped to `[0.0, 1.0]`. Every curve maps 0 to 0 and 1 to 1.
	#[inline]
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::Spring(spring) => spring.apply(t),
		}
	}
}
