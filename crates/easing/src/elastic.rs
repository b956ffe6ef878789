//! Elastic ease-in-out interpolation.
//!
//! The curve accelerates out of the start value, oscillates past the target
//! like a spring, and settles at the end value. Shape reference:
//! <https://easings.net/#easeInOutElastic>.

use std::f64::consts::TAU;

/// Elastic ease-in-out over an absolute time span.
///
/// Maps current time `t` in `[0, d]` to an eased value that starts at `b`
/// and ends at `b + c`. The first half of the duration eases in, the second
/// half eases out, with spring-like overshoot on both sides of the
/// crossover.
///
/// # Arguments
///
/// - `t`: current time, expected in `[0, d]`.
/// - `b`: beginning value.
/// - `c`: change in value (the curve travels from `b` to `b + c`).
/// - `d`: total duration. Must be non-zero: `d == 0` divides by zero and
///   the result degenerates to `NaN` under IEEE-754 rules instead of
///   panicking. Validating the duration is the caller's job.
///
/// Exact at the boundaries: `t == 0` returns `b` and `t == d` returns
/// `b + c`, with no floating-point drift.
#[inline]
pub fn ease_in_out_elastic(t: f64, b: f64, c: f64, d: f64) -> f64 {
	if t == 0.0 {
		return b;
	}
	// Normalize against half the duration; 2.0 marks the very end.
	let t = t / (d / 2.0);
	if t == 2.0 {
		return b + c;
	}
	let p = d * (0.3 * 1.5);
	let a = c;
	// `a` always equals `c` here: negative deltas take the quarter-period
	// offset, everything else the arcsine.
	let s = if a < c.abs() {
		p / 4.0
	} else {
		p / TAU * (c / a).asin()
	};
	if t < 1.0 {
		let t = t - 1.0;
		-0.5 * (a * (10.0 * t).exp2() * ((t * d - s) * TAU / p).sin()) + b
	} else {
		let t = t - 1.0;
		a * (-10.0 * t).exp2() * ((t * d - s) * TAU / p).sin() * 0.5 + c + b
	}
}
