//! Elastic easing for tween animation.
//!
//! A single interpolation curve, [`ease_in_out_elastic`], mapping a time
//! parameter to an eased value with spring-like overshoot, plus the
//! name-based [`lookup`] an animation driver resolves it from.
//!
//! # Example
//!
//! ```
//! use tween_easing::{EASE_IN_OUT_ELASTIC, ease_in_out_elastic, lookup};
//!
//! // Animate a property from 10.0 by +80.0 over half a second.
//! let value = ease_in_out_elastic(0.125, 10.0, 80.0, 0.5);
//! assert!(value.is_finite());
//!
//! // Or resolve the curve by the name it is registered under.
//! let curve = lookup(EASE_IN_OUT_ELASTIC).unwrap();
//! assert_eq!(curve(0.125, 10.0, 80.0, 0.5), value);
//! ```

/// The elastic ease-in-out curve.
mod elastic;
/// Curve-name registry and lookup.
mod registry;

pub use elastic::ease_in_out_elastic;
pub use registry::{EASE_IN_OUT_ELASTIC, EasingFn, UnknownCurve, lookup, names};
