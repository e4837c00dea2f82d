//! Easing curves over normalized time.
//!
//! Every function in this module maps a normalized time `t` in `[0,1]` to an
//! eased value. All curves satisfy `f(0) = 0` and `f(1) = 1`. Back and elastic
//! curves overshoot `[0,1]` between the endpoints; every other curve stays
//! inside it.
//!
//! Inputs outside `[0,1]` are accepted and evaluated by the same formula. Only
//! the exponential family special-cases its boundaries, so that the endpoints
//! are hit exactly instead of landing on `2^-10`.
//!
//! # Example
//!
//! ```
//! use openracing_easing::normalized;
//!
//! assert_eq!(normalized::quadratic_in(0.5), 0.25);
//! assert_eq!(normalized::quadratic_out(0.5), 0.75);
//! assert_eq!(normalized::perlin_in_out(0.5), 0.5);
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

/// Angular frequency of the elastic curves, `13π/2`.
const ELASTIC_FREQUENCY: f64 = 13.0 * FRAC_PI_2;

/// Starts slowly and accelerates. The softest of the ease-in curves.
#[inline]
pub fn sine_in(t: f64) -> f64 {
    ((t - 1.0) * FRAC_PI_2).sin() + 1.0
}

/// Starts quickly and decelerates. The softest of the ease-out curves.
#[inline]
pub fn sine_out(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

/// Accelerates until the midpoint, then decelerates. A very soft S-curve.
#[inline]
pub fn sine_in_out(t: f64) -> f64 {
    0.5 * (1.0 - (t * PI).cos())
}

/// Quadratic ease-in, `t²`. Slightly sharper than [`sine_in`].
#[inline]
pub fn quadratic_in(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out. Slightly sharper than [`sine_out`].
#[inline]
pub fn quadratic_out(t: f64) -> f64 {
    -(t * (t - 2.0))
}

/// Quadratic S-curve. Slightly sharper than [`sine_in_out`].
#[inline]
pub fn quadratic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -2.0 * t * t + 4.0 * t - 1.0
    }
}

/// Cubic ease-in, `t³`.
#[inline]
pub fn cubic_in(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease-out.
#[inline]
pub fn cubic_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f + 1.0
}

/// Cubic S-curve.
#[inline]
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// Quartic ease-in, `t⁴`.
#[inline]
pub fn quartic_in(t: f64) -> f64 {
    t * t * t * t
}

/// Quartic ease-out.
#[inline]
pub fn quartic_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f * (1.0 - t) + 1.0
}

/// Quartic S-curve.
#[inline]
pub fn quartic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let f = t - 1.0;
        -8.0 * f * f * f * f + 1.0
    }
}

/// Quintic ease-in, `t⁵`.
#[inline]
pub fn quintic_in(t: f64) -> f64 {
    t * t * t * t * t
}

/// Quintic ease-out.
#[inline]
pub fn quintic_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f * f * f + 1.0
}

/// Quintic S-curve.
#[inline]
pub fn quintic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

/// Exponential ease-in. Sharper than [`quintic_in`].
///
/// Returns `t` unchanged for `t <= 0`, so that `exponential_in(0.0)` is
/// exactly zero rather than `2^-10`.
#[inline]
pub fn exponential_in(t: f64) -> f64 {
    if t <= 0.0 {
        t
    } else {
        (10.0 * (t - 1.0)).exp2()
    }
}

/// Exponential ease-out. Sharper than [`quintic_out`].
///
/// Returns `t` unchanged for `t >= 1`, so that `exponential_out(1.0)` is
/// exactly one rather than `1 - 2^-10`.
#[inline]
pub fn exponential_out(t: f64) -> f64 {
    if t >= 1.0 {
        t
    } else {
        1.0 - (-10.0 * t).exp2()
    }
}

/// Exponential S-curve.
///
/// Returns `t` unchanged outside the open interval `(0,1)`.
#[inline]
pub fn exponential_in_out(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    if t < 0.5 {
        0.5 * (20.0 * t - 10.0).exp2()
    } else {
        -0.5 * (-20.0 * t + 10.0).exp2() + 1.0
    }
}

/// Quarter-circle ease-in: slow start, then a very sharp acceleration.
#[inline]
pub fn circular_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

/// Quarter-circle ease-out: very fast start, then a sharp deceleration.
#[inline]
pub fn circular_out(t: f64) -> f64 {
    ((2.0 - t) * t).sqrt()
}

/// Two quarter circles joined at the midpoint.
#[inline]
pub fn circular_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * (t * t)).sqrt())
    } else {
        0.5 * ((-(2.0 * t - 3.0) * (2.0 * t - 1.0)).sqrt() + 1.0)
    }
}

/// `f³ - f·sin(fπ)`, the swing shared by the back curves.
#[inline]
fn back_swing(f: f64) -> f64 {
    f * f * f - f * (f * PI).sin()
}

/// Swings backwards below zero, then accelerates to the end.
#[inline]
pub fn back_in(t: f64) -> f64 {
    back_swing(t)
}

/// Runs fast and swings past one before settling.
#[inline]
pub fn back_out(t: f64) -> f64 {
    1.0 - back_swing(1.0 - t)
}

/// Swings backwards at the start and past the end point at the finish.
#[inline]
pub fn back_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * back_swing(2.0 * t)
    } else {
        let f = 1.0 - (2.0 * t - 1.0);
        0.5 * (1.0 - back_swing(f)) + 0.5
    }
}

/// Oscillates with growing amplitude, then snaps to the end point.
#[inline]
pub fn elastic_in(t: f64) -> f64 {
    (ELASTIC_FREQUENCY * t).sin() * (10.0 * (t - 1.0)).exp2()
}

/// Reaches the end point quickly and springs around it while settling.
#[inline]
pub fn elastic_out(t: f64) -> f64 {
    (-ELASTIC_FREQUENCY * (t + 1.0)).sin() * (-10.0 * t).exp2() + 1.0
}

/// Springs around the start, crosses the midpoint fast, and springs around
/// the end.
#[inline]
pub fn elastic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (ELASTIC_FREQUENCY * (2.0 * t)).sin() * (10.0 * (2.0 * t - 1.0)).exp2()
    } else {
        0.5 * ((-ELASTIC_FREQUENCY * (2.0 * t - 1.0 + 1.0)).sin()
            * (-10.0 * (2.0 * t - 1.0)).exp2()
            + 2.0)
    }
}

/// Four bounces of decreasing height; the apex of the last one is the end
/// point.
///
/// Piecewise quadratic with breakpoints at `4/11`, `8/11` and `9/10`. The
/// pieces meet continuously at each breakpoint.
#[inline]
pub fn bounce_out(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        121.0 * t * t / 16.0
    } else if t < 8.0 / 11.0 {
        363.0 / 40.0 * t * t - 99.0 / 10.0 * t + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        4356.0 / 361.0 * t * t - 35442.0 / 1805.0 * t + 16061.0 / 1805.0
    } else {
        54.0 / 5.0 * t * t - 513.0 / 25.0 * t + 268.0 / 25.0
    }
}

/// Mirror of [`bounce_out`]: three growing bounces, then a fall into the end
/// point.
#[inline]
pub fn bounce_in(t: f64) -> f64 {
    1.0 - bounce_out(1.0 - t)
}

/// [`bounce_in`] over the first half and [`bounce_out`] over the second.
#[inline]
pub fn bounce_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * bounce_in(t * 2.0)
    } else {
        0.5 * bounce_out(t * 2.0 - 1.0) + 0.5
    }
}

/// Perlin's smootherstep, `6t⁵ - 15t⁴ + 10t³`.
///
/// Both the first and the second derivative are zero at the endpoints.
#[inline]
pub fn perlin_in_out(t: f64) -> f64 {
    let t3 = t * t * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    6.0 * t5 - 15.0 * t4 + 10.0 * t3
}
