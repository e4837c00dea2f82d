//! The closed set of easing curves as a value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;
use crate::lut::EasingLut;
use crate::table::{EASING_COUNT, NormalizedFn, RangeFn, for_each_easing};
use crate::{normalized, ranged};

macro_rules! easing_enum {
    ($($variant:ident => $name:ident),+ $(,)?) => {
        /// Identifies one easing curve.
        ///
        /// `Easing` is a plain `Copy` tag. It serializes as the snake_case curve
        /// name, so it can be stored directly in profiles and other
        /// configuration documents.
        ///
        /// # Example
        ///
        /// ```
        /// use openracing_easing::Easing;
        ///
        /// let easing: Easing = "cubic_in_out".parse()?;
        /// assert_eq!(easing, Easing::CubicInOut);
        /// assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-12);
        /// # Ok::<(), openracing_easing::EasingError>(())
        /// ```
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Easing {
            $(
                #[doc = concat!("See [`normalized::", stringify!($name), "`].")]
                $variant,
            )+
        }

        impl Easing {
            /// Every curve, in registration order.
            pub const ALL: [Easing; EASING_COUNT] = [$(Easing::$variant),+];

            /// The snake_case name of this curve.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Easing::$variant => stringify!($name),)+
                }
            }

            /// The normalized form of this curve.
            pub fn function(self) -> NormalizedFn {
                match self {
                    $(Easing::$variant => normalized::$name,)+
                }
            }

            /// The ranged form of this curve.
            pub fn range_function(self) -> RangeFn {
                match self {
                    $(Easing::$variant => ranged::$name,)+
                }
            }
        }
    };
}

for_each_easing!(easing_enum);

impl Easing {
    /// Number of curves. Alias of [`EASING_COUNT`](crate::EASING_COUNT).
    pub const COUNT: usize = EASING_COUNT;

    /// Evaluate the curve at normalized time `t`.
    #[inline]
    pub fn evaluate(self, t: f64) -> f64 {
        (self.function())(t)
    }

    /// Evaluate the curve at time `t` of `duration`, remapped into
    /// `[from, to]`.
    #[inline]
    pub fn evaluate_range(self, t: f64, from: f64, to: f64, duration: f64) -> f64 {
        (self.range_function())(t, from, to, duration)
    }

    /// Whether the curve leaves `[0,1]` between its endpoints.
    ///
    /// True for the back and elastic families.
    pub const fn overshoots(self) -> bool {
        matches!(
            self,
            Easing::BackIn
                | Easing::BackOut
                | Easing::BackInOut
                | Easing::ElasticIn
                | Easing::ElasticOut
                | Easing::ElasticInOut
        )
    }

    /// Sample this curve into a lookup table.
    pub fn to_lut(self) -> EasingLut {
        EasingLut::from_easing(self)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::SineInOut
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase `name` and drop separators, so that `quadratic_in`,
/// `quadratic-in` and `QuadraticIn` compare equal.
fn canonical(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|c| !matches!(*c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Easing::ALL
            .into_iter()
            .find(|easing| canonical(easing.name()).eq(canonical(trimmed)))
            .ok_or_else(|| {
                tracing::debug!(name = trimmed, "unknown easing name");
                EasingError::UnknownEasing {
                    name: trimmed.to_string(),
                }
            })
    }
}

impl TryFrom<&str> for Easing {
    type Error = EasingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
