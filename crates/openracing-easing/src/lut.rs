//! Pre-computed lookup table for a single easing curve.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::EasingError;

/// A curve sampled at 256 evenly spaced points over `[0,1]`.
///
/// Lookup is O(1), with linear interpolation between neighbouring samples and
/// no transcendental functions. It suits callers that evaluate the same curve
/// at a very high rate and can accept a small approximation error.
///
/// The input index is clamped to the sampled range, but output values are
/// stored unclamped, so overshooting curves keep their overshoot.
///
/// # Example
///
/// ```
/// use openracing_easing::{Easing, EasingLut};
///
/// let lut = EasingLut::from_easing(Easing::QuadraticIn);
/// assert!((lut.lookup(0.5) - 0.25).abs() < 1e-4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EasingLut {
    table: [f64; 256],
}

impl EasingLut {
    /// Number of samples.
    pub const SIZE: usize = 256;

    /// Sample `easing` over `[0,1]`.
    pub fn from_easing(easing: Easing) -> Self {
        tracing::trace!(easing = %easing, size = Self::SIZE, "building easing LUT");
        Self::from_fn(easing.function())
    }

    /// Sample an arbitrary function over `[0,1]`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut table = [0.0f64; Self::SIZE];

        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(Self::sample_time(i));
        }

        Self { table }
    }

    /// Normalized time of sample `index`. The last sample is exactly 1.0.
    fn sample_time(index: usize) -> f64 {
        index as f64 / (Self::SIZE - 1) as f64
    }

    /// Interpolated value at normalized time `t`.
    ///
    /// `t` is clamped to `[0,1]`; NaN reads the first sample.
    #[inline]
    pub fn lookup(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (Self::SIZE - 1) as f64;
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let fraction = scaled - index_low as f64;

        let low_value = self.table[index_low];
        let high_value = self.table[index_low + 1];

        low_value + fraction * (high_value - low_value)
    }

    /// The raw samples.
    pub fn table(&self) -> &[f64; 256] {
        &self.table
    }

    /// Whether the samples never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|pair| match pair {
            [a, b] => b >= a,
            _ => true,
        })
    }

    /// Smallest sample.
    pub fn min_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample.
    pub fn max_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Default for EasingLut {
    fn default() -> Self {
        Self::from_easing(Easing::default())
    }
}

impl Serialize for EasingLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EasingLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<f64> = Vec::deserialize(deserializer)?;
        let table: [f64; 256] = vec.try_into().map_err(|rejected: Vec<f64>| {
            serde::de::Error::custom(EasingError::InvalidLutSize {
                expected: Self::SIZE,
                actual: rejected.len(),
            })
        })?;
        Ok(EasingLut { table })
    }
}
