//! Easing curves over an absolute time range and value range.
//!
//! Each function here takes the elapsed time `t`, the `from` and `to` values
//! and the total `duration`, and returns
//! `from + (to - from) * f(t / duration)`, where `f` is the curve with the
//! same name in [`normalized`](crate::normalized).
//!
//! `duration` must be nonzero. A zero duration is not guarded against and
//! yields NaN or infinity per IEEE-754.
//!
//! # Example
//!
//! ```
//! use openracing_easing::ranged;
//!
//! // Halfway through a 100 ms transition from 10 to 100
//! let value = ranged::cubic_in_out(50.0, 10.0, 100.0, 100.0);
//! assert!((value - 55.0).abs() < 1e-12);
//! ```

use crate::normalized;
use crate::table::NormalizedFn;

/// Evaluate `easing` at `t / duration` and remap the result into
/// `[from, to]`.
///
/// The named functions in this module are all thin wrappers around this.
#[inline]
pub fn interpolate(easing: NormalizedFn, t: f64, from: f64, to: f64, duration: f64) -> f64 {
    from + (to - from) * easing(t / duration)
}

macro_rules! range_easings {
    ($($name:ident),+ $(,)?) => {
        $(
            #[doc = concat!(
                "[`normalized::", stringify!($name), "`] remapped from `[0, duration]` to `[from, to]`."
            )]
            #[inline]
            pub fn $name(t: f64, from: f64, to: f64, duration: f64) -> f64 {
                interpolate(normalized::$name, t, from, to, duration)
            }
        )+
    };
}

range_easings!(
    sine_in,
    sine_out,
    sine_in_out,
    quadratic_in,
    quadratic_out,
    quadratic_in_out,
    cubic_in,
    cubic_out,
    cubic_in_out,
    quartic_in,
    quartic_out,
    quartic_in_out,
    quintic_in,
    quintic_out,
    quintic_in_out,
    exponential_in,
    exponential_out,
    exponential_in_out,
    circular_in,
    circular_out,
    circular_in_out,
    back_in,
    back_out,
    back_in_out,
    elastic_in,
    elastic_out,
    elastic_in_out,
    bounce_in,
    bounce_out,
    bounce_in_out,
    perlin_in_out,
);
