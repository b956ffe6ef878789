//! Name-based lookup of easing curves.
//!
//! The animation driver resolves a curve by its registered name when a
//! tween starts, then calls it with `(t, b, c, d)` every tick. The mapping
//! is a static table owned by this crate.

use thiserror::Error;

use crate::elastic::ease_in_out_elastic;

/// An easing curve: `(t, b, c, d)` to eased value.
///
/// - `t`: current time in `[0, d]`.
/// - `b`: beginning value.
/// - `c`: change in value.
/// - `d`: total duration (non-zero).
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Name the elastic ease-in-out curve is registered under.
pub const EASE_IN_OUT_ELASTIC: &str = "easeInOutElastic";

static CURVES: &[(&str, EasingFn)] = &[(EASE_IN_OUT_ELASTIC, ease_in_out_elastic)];

/// A curve name with no registered entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing curve: {0}")]
pub struct UnknownCurve(pub String);

/// Resolves an easing curve by its registered name.
pub fn lookup(name: &str) -> Result<EasingFn, UnknownCurve> {
	CURVES
		.iter()
		.find(|&&(n, _)| n == name)
		.map(|&(_, f)| f)
		.ok_or_else(|| UnknownCurve(name.to_owned()))
}

/// Iterates over all registered curve names.
pub fn names() -> impl Iterator<Item = &'static str> {
	CURVES.iter().map(|&(n, _)| n)
}
