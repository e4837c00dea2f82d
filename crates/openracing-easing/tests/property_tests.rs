//! Property-based tests for easing curves.
//!
//! These tests verify mathematical properties that should hold for every curve
//! or for whole families of curves.

use openracing_easing::{
    EASING_COUNT, Easing, NORMALIZED_EASINGS, NormalizedFn, RANGE_EASINGS, normalized,
};
use quickcheck_macros::quickcheck;

/// Ease-in, ease-out and ease-in-out curve of each family.
///
/// Each ease-out curve is the point reflection of its ease-in curve, and
/// each ease-in-out curve is the ease-in curve over the first half followed
/// by the ease-out curve over the second, both scaled by one half.
const FAMILIES: [(NormalizedFn, NormalizedFn, NormalizedFn); 10] = [
    (
        normalized::sine_in,
        normalized::sine_out,
        normalized::sine_in_out,
    ),
    (
        normalized::quadratic_in,
        normalized::quadratic_out,
        normalized::quadratic_in_out,
    ),
    (
        normalized::cubic_in,
        normalized::cubic_out,
        normalized::cubic_in_out,
    ),
    (
        normalized::quartic_in,
        normalized::quartic_out,
        normalized::quartic_in_out,
    ),
    (
        normalized::quintic_in,
        normalized::quintic_out,
        normalized::quintic_in_out,
    ),
    (
        normalized::exponential_in,
        normalized::exponential_out,
        normalized::exponential_in_out,
    ),
    (
        normalized::circular_in,
        normalized::circular_out,
        normalized::circular_in_out,
    ),
    (
        normalized::back_in,
        normalized::back_out,
        normalized::back_in_out,
    ),
    (
        normalized::elastic_in,
        normalized::elastic_out,
        normalized::elastic_in_out,
    ),
    (
        normalized::bounce_in,
        normalized::bounce_out,
        normalized::bounce_in_out,
    ),
];

/// Curves that never decrease over `[0,1]`.
const MONOTONIC: [Easing; 22] = [
    Easing::SineIn,
    Easing::SineOut,
    Easing::SineInOut,
    Easing::QuadraticIn,
    Easing::QuadraticOut,
    Easing::QuadraticInOut,
    Easing::CubicIn,
    Easing::CubicOut,
    Easing::CubicInOut,
    Easing::QuarticIn,
    Easing::QuarticOut,
    Easing::QuarticInOut,
    Easing::QuinticIn,
    Easing::QuinticOut,
    Easing::QuinticInOut,
    Easing::ExponentialIn,
    Easing::ExponentialOut,
    Easing::ExponentialInOut,
    Easing::CircularIn,
    Easing::CircularOut,
    Easing::CircularInOut,
    Easing::PerlinInOut,
];

/// Map an arbitrary f64 into `[0,1]`.
fn unit(v: f64) -> f64 {
    if v.is_finite() { v.abs().fract() } else { 0.5 }
}

#[quickcheck]
fn prop_out_mirrors_in(t: f64) -> bool {
    let t = unit(t);

    FAMILIES.iter().all(|(ease_in, ease_out, _)| {
        let reflected = 1.0 - ease_in(1.0 - t);
        (ease_out(t) - reflected).abs() < 1e-9
    })
}

#[quickcheck]
fn prop_in_out_joins_in_and_out(t: f64) -> bool {
    let t = unit(t);

    FAMILIES.iter().all(|(ease_in, ease_out, ease_in_out)| {
        let composed = if t < 0.5 {
            0.5 * ease_in(2.0 * t)
        } else {
            0.5 * ease_out(2.0 * t - 1.0) + 0.5
        };
        (ease_in_out(t) - composed).abs() < 1e-12
    })
}

#[quickcheck]
fn prop_curves_finite_in_domain(t: f64) -> bool {
    let t = unit(t);
    NORMALIZED_EASINGS.iter().all(|(_, f)| f(t).is_finite())
}

#[quickcheck]
fn prop_easing_evaluate_matches_table(t: f64) -> bool {
    let t = unit(t);
    Easing::ALL
        .iter()
        .zip(NORMALIZED_EASINGS.iter())
        .all(|(easing, (_, f))| easing.evaluate(t).to_bits() == f(t).to_bits())
}

mod proptest_curves {
    use super::*;
    use proptest::prelude::*;

    fn scale(from: f64, to: f64) -> f64 {
        1.0 + from.abs() + to.abs()
    }

    fn non_zero_duration() -> impl Strategy<Value = f64> {
        prop_oneof![1e-3f64..1e6, -1e6f64..-1e-3]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn range_curves_start_at_from(
            index in 0..EASING_COUNT,
            from in -1e6f64..1e6,
            to in -1e6f64..1e6,
            duration in non_zero_duration(),
        ) {
            let (name, g) = RANGE_EASINGS[index];
            let value = g(0.0, from, to, duration);
            prop_assert!(
                (value - from).abs() <= 1e-9 * scale(from, to),
                "{}(0, {}, {}, {}) returned {}", name, from, to, duration, value
            );
        }

        #[test]
        fn range_curves_end_at_to(
            index in 0..EASING_COUNT,
            from in -1e6f64..1e6,
            to in -1e6f64..1e6,
            duration in non_zero_duration(),
        ) {
            let (name, g) = RANGE_EASINGS[index];
            let value = g(duration, from, to, duration);
            prop_assert!(
                (value - to).abs() <= 1e-9 * scale(from, to),
                "{}({}, {}, {}, {}) returned {}", name, duration, from, to, duration, value
            );
        }

        #[test]
        fn normalized_curves_within_sane_bounds(index in 0..EASING_COUNT, t in 0.0f64..=1.0) {
            let (name, f) = NORMALIZED_EASINGS[index];
            let value = f(t);
            prop_assert!(value.is_finite(), "{} produced {} at {}", name, value, t);
            prop_assert!((-1.0..=2.0).contains(&value), "{} produced {} at {}", name, value, t);
        }

        #[test]
        fn non_overshooting_curves_within_unit(index in 0..EASING_COUNT, t in 0.0f64..=1.0) {
            let easing = Easing::ALL[index];
            prop_assume!(!easing.overshoots());
            let value = easing.evaluate(t);
            prop_assert!(
                (-1e-12..=1.0 + 1e-12).contains(&value),
                "{} left [0,1]: {} at {}", easing, value, t
            );
        }

        #[test]
        fn in_out_curves_compose_from_halves(family in 0..FAMILIES.len(), t in 0.0f64..=1.0) {
            let (ease_in, ease_out, ease_in_out) = FAMILIES[family];
            let composed = if t < 0.5 {
                0.5 * ease_in(2.0 * t)
            } else {
                0.5 * ease_out(2.0 * t - 1.0) + 0.5
            };
            let value = ease_in_out(t);
            prop_assert!(
                (value - composed).abs() < 1e-12,
                "family {} at {}: {} vs {}", family, t, value, composed
            );
        }

        #[test]
        fn monotonic_curves_never_decrease(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in MONOTONIC {
                prop_assert!(
                    easing.evaluate(lo) <= easing.evaluate(hi) + 1e-12,
                    "{} decreases between {} and {}", easing, lo, hi
                );
            }
        }

        #[test]
        fn range_is_affine_in_endpoints(
            index in 0..EASING_COUNT,
            t in 0.0f64..=1.0,
            from in -1e3f64..1e3,
            to in -1e3f64..1e3,
        ) {
            let easing = Easing::ALL[index];
            let expected = from + (to - from) * easing.evaluate(t);
            let value = easing.evaluate_range(t * 8.0, from, to, 8.0);
            prop_assert!(
                (value - expected).abs() <= 1e-9 * scale(from, to),
                "{} at {}: {} vs {}", easing, t, value, expected
            );
        }
    }
}
