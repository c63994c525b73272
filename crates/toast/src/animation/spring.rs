//! Damped spring curve.
//!
//! Models the step response of a unit-mass spring released from 0 toward a
//! rest position of 1, evaluated on normalized time. The natural frequency
//! is fixed by [`STIFFNESS`] so that a critically damped spring settles
//! within the transition.

/// Natural angular frequency of the spring, per unit of normalized time.
pub const STIFFNESS: f64 = 12.0;

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	/// `1.0` is critically damped, below overshoots, above is sluggish.
	pub damping_ratio: f32,
	/// Initial velocity, in progress units per normalized time.
	pub initial_velocity: f32,
}

impl Default for Spring {
	fn default() -> Self {
		Self::CRITICAL
	}
}

impl Spring {
	/// Critically damped spring at rest: the fastest curve without overshoot.
	pub const CRITICAL: Self = Self::new(1.0, 0.0);

	pub const fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
		Self {
			damping_ratio,
			initial_velocity,
		}
	}

	/// Evaluates the spring at normalized time `t`.
	///
	/// Endpoints are exact: 0 at `t <= 0`, 1 at `t >= 1`.
	pub fn apply(self, t: f32) -> f32 {
		if t <= 0.0 {
			return 0.0;
		}
		if t >= 1.0 {
			return 1.0;
		}

		let t = f64::from(t);
		let zeta = f64::from(self.damping_ratio.max(0.0));
		let v0 = f64::from(self.initial_velocity);
		let omega = STIFFNESS;

		// Displacement from rest; starts at -1.
		let offset = if (zeta - 1.0).abs() < 1e-6 {
			(-1.0 + (v0 - omega) * t) * (-omega * t).exp()
		} else if zeta < 1.0 {
			let damped = omega * (1.0 - zeta * zeta).sqrt();
			let c = (v0 - zeta * omega) / damped;
			(-zeta * omega * t).exp() * (-(damped * t).cos() + c * (damped * t).sin())
		} else {
			let root = (zeta * zeta - 1.0).sqrt();
			let r1 = -omega * (zeta - root);
			let r2 = -omega * (zeta + root);
			let a = (v0 + r2) / (r1 - r2);
			let b = -1.0 - a;
			a * (r1 * t).exp() + b * (r2 * t).exp()
		};

		(1.0 + offset) as f32
	}
}
