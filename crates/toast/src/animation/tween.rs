//! Tweening against a logical clock.

use std::time::Duration;

use super::easing::Easing;
use super::lerp::Animatable;

/// Animates a value from `start` to `end`.
///
/// The tween is scheduled at `begin` on a caller-owned clock and queried
/// with the clock's elapsed time. Before `begin` it holds `start`; after
/// `begin + duration` it holds `end`.
///
/// ```
/// use std::time::Duration;
/// use tvtoast::animation::{Easing, Tween};
///
/// let tween = Tween::new(0.0f32, 100.0f32, Duration::from_millis(500))
///     .starting_at(Duration::from_secs(1))
///     .with_easing(Easing::Linear);
///
/// assert_eq!(tween.value_at(Duration::from_millis(500)), 0.0);
/// assert_eq!(tween.value_at(Duration::from_millis(1250)), 50.0);
/// assert!(tween.is_complete_at(Duration::from_millis(1500)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Animatable> {
	/// Starting value.
	pub start: T,
	/// Target value.
	pub end: T,
	/// Clock time the animation starts at.
	pub begin: Duration,
	/// Total animation duration.
	pub duration: Duration,
	/// Easing function to apply.
	pub easing: Easing,
}

impl<T: Animatable> Tween<T> {
	/// Creates a linear tween starting at clock time zero.
	pub fn new(start: T, end: T, duration: Duration) -> Self {
		Self {
			start,
			end,
			begin: Duration::ZERO,
			duration,
			easing: Easing::Linear,
		}
	}

	/// Schedules the tween to start at `begin` (builder pattern).
	#[must_use]
	pub fn starting_at(mut self, begin: Duration) -> Self {
		self.begin = begin;
		self
	}

	/// Sets the easing function (builder pattern).
	#[must_use]
	pub fn with_easing(mut self, easing: Easing) -> Self {
		self.easing = easing;
		self
	}

	/// Clock time the animation completes at, saturating at `Duration::MAX`.
	pub fn end_time(&self) -> Duration {
		self.begin.saturating_add(self.duration)
	}

	/// Linear progress (0.0 to 1.0) at clock time `elapsed`.
	#[inline]
	pub fn progress_at(&self, elapsed: Duration) -> f32 {
		if elapsed < self.begin {
			return 0.0;
		}
		if self.duration.is_zero() {
			return 1.0;
		}
		let run = (elapsed - self.begin).as_secs_f32();
		(run / self.duration.as_secs_f32()).min(1.0)
	}

	/// Interpolated value at clock time `elapsed`.
	#[inline]
	pub fn value_at(&self, elapsed: Duration) -> T {
		let eased = self.easing.apply(self.progress_at(elapsed));
		self.start.lerp(&self.end, eased)
	}

	#[inline]
	pub fn is_complete_at(&self, elapsed: Duration) -> bool {
		elapsed >= self.end_time()
	}
}
