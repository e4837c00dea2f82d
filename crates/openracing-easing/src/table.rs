//! Static name tables for enumerating every easing curve.
//!
//! The `for_each_easing` list below is the single place where curves are
//! registered. The [`Easing`] enum and both tables below are generated from
//! it, so the set of curves, their names and the set of tested curves cannot
//! drift apart.

use crate::easing::Easing;
use crate::{normalized, ranged};

/// Signature of a curve over normalized time.
pub type NormalizedFn = fn(f64) -> f64;

/// Signature of a curve over a time and value range: `(t, from, to, duration)`.
pub type RangeFn = fn(f64, f64, f64, f64) -> f64;

/// Number of easing curves.
pub const EASING_COUNT: usize = 31;

/// Invoke `$callback!` with every `Variant => function_name` pair.
macro_rules! for_each_easing {
    ($callback:ident) => {
        $callback! {
            SineIn => sine_in,
            SineOut => sine_out,
            SineInOut => sine_in_out,
            QuadraticIn => quadratic_in,
            QuadraticOut => quadratic_out,
            QuadraticInOut => quadratic_in_out,
            CubicIn => cubic_in,
            CubicOut => cubic_out,
            CubicInOut => cubic_in_out,
            QuarticIn => quartic_in,
            QuarticOut => quartic_out,
            QuarticInOut => quartic_in_out,
            QuinticIn => quintic_in,
            QuinticOut => quintic_out,
            QuinticInOut => quintic_in_out,
            ExponentialIn => exponential_in,
            ExponentialOut => exponential_out,
            ExponentialInOut => exponential_in_out,
            CircularIn => circular_in,
            CircularOut => circular_out,
            CircularInOut => circular_in_out,
            BackIn => back_in,
            BackOut => back_out,
            BackInOut => back_in_out,
            ElasticIn => elastic_in,
            ElasticOut => elastic_out,
            ElasticInOut => elastic_in_out,
            BounceIn => bounce_in,
            BounceOut => bounce_out,
            BounceInOut => bounce_in_out,
            PerlinInOut => perlin_in_out,
        }
    };
}

pub(crate) use for_each_easing;

macro_rules! name_tables {
    ($($variant:ident => $name:ident),+ $(,)?) => {
        /// Every normalized curve, keyed by its snake_case name.
        pub const NORMALIZED_EASINGS: [(&str, NormalizedFn); EASING_COUNT] =
            [$((stringify!($name), normalized::$name as NormalizedFn)),+];

        /// Every ranged curve, keyed by its snake_case name.
        pub const RANGE_EASINGS: [(&str, RangeFn); EASING_COUNT] =
            [$((stringify!($name), ranged::$name as RangeFn)),+];
    };
}

for_each_easing!(name_tables);

/// Look up a normalized curve by name.
///
/// Accepts the same spellings as [`Easing::from_str`](std::str::FromStr).
/// Returns `None` for unknown names.
pub fn normalized_by_name(name: &str) -> Option<NormalizedFn> {
    name.parse::<Easing>().ok().map(Easing::function)
}

/// Look up a ranged curve by name.
///
/// Accepts the same spellings as [`Easing::from_str`](std::str::FromStr).
/// Returns `None` for unknown names.
pub fn range_by_name(name: &str) -> Option<RangeFn> {
    name.parse::<Easing>().ok().map(Easing::range_function)
}
