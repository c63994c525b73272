//! The fade-in / hold / fade-out schedule of a presented toast.
//!
//! Both fades are scheduled against one logical clock anchored at the start
//! of presentation: the fade-in at zero and the fade-out at the toast's
//! duration. The fade-out is therefore *not* chained after the fade-in; a
//! toast with a three second duration starts fading out three seconds after
//! it started fading in. The toast is removed when the fade-out completes.

use std::time::Duration;

use crate::animation::{Easing, Spring, Tween};

/// Length of each fade.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToastPhase {
	/// Built but not yet presented.
	#[default]
	Constructed,
	/// Attached and fading in.
	Presenting,
	/// Fully shown and holding.
	Visible,
	/// Fading out.
	Dismissing,
	/// Detached from its host. Terminal.
	Removed,
}

/// Opacity schedule driven by [`Timeline::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
	elapsed: Duration,
	hold: Duration,
	fade_in: Tween<f32>,
	fade_out: Tween<f32>,
}

impl Timeline {
	/// A timeline at clock zero for a toast shown for `hold`.
	pub fn new(hold: Duration) -> Self {
		let easing = Easing::Spring(Spring::CRITICAL);
		let fade_in = Tween::new(0.0, 1.0, FADE_DURATION).with_easing(easing);
		// A hold shorter than the fade-in interrupts it.
		let fade_out = Tween::new(fade_in.value_at(hold), 0.0, FADE_DURATION)
			.starting_at(hold)
			.with_easing(easing);

		Self {
			elapsed: Duration::ZERO,
			hold,
			fade_in,
			fade_out,
		}
	}

	/// Moves the clock forward by `delta` and returns the new phase.
	pub fn advance(&mut self, delta: Duration) -> ToastPhase {
		self.elapsed = self.elapsed.saturating_add(delta);
		self.phase()
	}

	/// Time since presentation started.
	pub fn elapsed(&self) -> Duration {
		self.elapsed
	}

	pub fn hold(&self) -> Duration {
		self.hold
	}

	/// Clock time at which the fade-out starts. Equals the hold duration.
	pub fn fade_out_start(&self) -> Duration {
		self.fade_out.begin
	}

	/// Total time from presentation to removal.
	pub fn lifetime(&self) -> Duration {
		self.fade_out.end_time()
	}

	pub fn opacity(&self) -> f32 {
		self.opacity_at(self.elapsed)
	}

	pub fn opacity_at(&self, t: Duration) -> f32 {
		if t < self.hold {
			self.fade_in.value_at(t)
		} else {
			self.fade_out.value_at(t)
		}
	}

	pub fn phase(&self) -> ToastPhase {
		self.phase_at(self.elapsed)
	}

	pub fn phase_at(&self, t: Duration) -> ToastPhase {
		if t < FADE_DURATION.min(self.hold) {
			ToastPhase::Presenting
		} else if t < self.hold {
			ToastPhase::Visible
		} else if !self.fade_out.is_complete_at(t) {
			ToastPhase::Dismissing
		} else {
			ToastPhase::Removed
		}
	}

	/// True once the fade-out has completed.
	pub fn is_finished(&self) -> bool {
		self.fade_out.is_complete_at(self.elapsed)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn ms(millis: u64) -> Duration {
		Duration::from_millis(millis)
	}

	#[rstest]
	#[case(0, ToastPhase::Presenting)]
	#[case(150, ToastPhase::Presenting)]
	#[case(300, ToastPhase::Visible)]
	#[case(2999, ToastPhase::Visible)]
	#[case(3000, ToastPhase::Dismissing)]
	#[case(3299, ToastPhase::Dismissing)]
	#[case(3300, ToastPhase::Removed)]
	fn phases_for_three_second_hold(#[case] at: u64, #[case] expected: ToastPhase) {
		assert_eq!(Timeline::new(ms(3000)).phase_at(ms(at)), expected);
	}

	#[test]
	fn fade_out_is_scheduled_from_fade_in_start() {
		let timeline = Timeline::new(ms(3000));
		assert_eq!(timeline.fade_out_start(), ms(3000));
		assert_eq!(timeline.lifetime(), ms(3300));
	}

	#[test]
	fn opacity_endpoints() {
		let timeline = Timeline::new(ms(3000));
		assert_eq!(timeline.opacity_at(ms(0)), 0.0);
		assert_eq!(timeline.opacity_at(ms(300)), 1.0);
		assert_eq!(timeline.opacity_at(ms(2999)), 1.0);
		assert_eq!(timeline.opacity_at(ms(3000)), 1.0);
		assert!(timeline.opacity_at(ms(3150)) < 1.0);
		assert_eq!(timeline.opacity_at(ms(3300)), 0.0);
	}

	#[test]
	fn short_hold_interrupts_fade_in() {
		let timeline = Timeline::new(ms(100));
		let reached = timeline.opacity_at(ms(99));
		assert!(reached > 0.0 && reached < 1.0);

		assert_eq!(timeline.phase_at(ms(50)), ToastPhase::Presenting);
		assert_eq!(timeline.phase_at(ms(100)), ToastPhase::Dismissing);
		let interrupted = timeline.opacity_at(ms(100));
		assert!(interrupted < 1.0);
		assert!(timeline.opacity_at(ms(250)) < interrupted);
		assert_eq!(timeline.lifetime(), ms(400));
	}

	#[test]
	fn zero_hold_never_becomes_visible() {
		let timeline = Timeline::new(Duration::ZERO);
		assert_eq!(timeline.phase_at(Duration::ZERO), ToastPhase::Dismissing);
		assert_eq!(timeline.opacity_at(ms(150)), 0.0);
		assert_eq!(timeline.phase_at(ms(300)), ToastPhase::Removed);
	}

	#[test]
	fn advance_accumulates() {
		let mut timeline = Timeline::new(ms(1000));
		assert_eq!(timeline.advance(ms(200)), ToastPhase::Presenting);
		assert_eq!(timeline.advance(ms(200)), ToastPhase::Visible);
		assert_eq!(timeline.advance(ms(600)), ToastPhase::Dismissing);
		assert!(!timeline.is_finished());
		assert_eq!(timeline.advance(ms(300)), ToastPhase::Removed);
		assert!(timeline.is_finished());
		assert_eq!(timeline.elapsed(), ms(1300));
	}

	#[test]
	fn unbounded_hold_does_not_overflow() {
		let mut timeline = Timeline::new(Duration::MAX);
		assert_eq!(timeline.lifetime(), Duration::MAX);
		assert_eq!(timeline.advance(ms(1000)), ToastPhase::Visible);
		assert_eq!(timeline.opacity(), 1.0);
		assert_eq!(timeline.advance(Duration::MAX), ToastPhase::Removed);
		assert!(timeline.is_finished());
	}

	proptest! {
		#[test]
		fn opacity_stays_in_unit_range(hold in 0u64..10_000, at in 0u64..12_000) {
			let opacity = Timeline::new(ms(hold)).opacity_at(ms(at));
			prop_assert!((0.0..=1.0).contains(&opacity));
		}

		#[test]
		fn phase_never_goes_back(hold in 0u64..10_000, a in 0u64..12_000, b in 0u64..12_000) {
			let timeline = Timeline::new(ms(hold));
			let (early, late) = if a <= b { (a, b) } else { (b, a) };
			prop_assert!(timeline.phase_at(ms(early)) <= timeline.phase_at(ms(late)));
		}

		#[test]
		fn removal_follows_fade_out(hold in 0u64..10_000) {
			let timeline = Timeline::new(ms(hold));
			prop_assert_eq!(timeline.phase_at(ms(hold + 299)), ToastPhase::Dismissing);
			prop_assert_eq!(timeline.phase_at(ms(hold + 300)), ToastPhase::Removed);
		}
	}
}
