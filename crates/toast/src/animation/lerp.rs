//! The [`Animatable`] trait for types that support interpolation.

/// A type that can be linearly interpolated.
///
/// ```
/// use tvtoast::animation::Animatable;
///
/// assert_eq!(0.0f32.lerp(&1.0, 0.25), 0.25);
/// ```
pub trait Animatable: Clone {
	/// Linearly interpolate between `self` and `target`.
	///
	/// `t = 0.0` returns `self`, `t = 1.0` returns `target`. Implementations
	/// clamp `t` to `[0.0, 1.0]`.
	fn lerp(&self, target: &Self, t: f32) -> Self;
}

/// Opacity.
impl Animatable for f32 {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		self + (target - self) * t
	}
}
