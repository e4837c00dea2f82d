//! A single eased transition as a configuration record.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::EasingError;

/// An eased transition from `from` to `to` over `duration`.
///
/// `Tween` bundles the arguments of a [`ranged`](crate::ranged) call so that
/// a transition can be described in configuration and validated once at load
/// time. Evaluation itself goes straight to the ranged curve and performs no
/// checks.
///
/// # Example
///
/// ```
/// use openracing_easing::{Easing, Tween};
///
/// let tween = Tween::new(Easing::CubicInOut, 10.0, 100.0, 100.0)?;
/// assert!((tween.value_at(50.0) - 55.0).abs() < 1e-12);
/// assert!(tween.is_complete(100.0));
/// # Ok::<(), openracing_easing::EasingError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Curve shaping the transition.
    #[serde(default)]
    pub easing: Easing,
    /// Value at time zero.
    pub from: f64,
    /// Value at `duration`.
    pub to: f64,
    /// Length of the transition, in the caller's time unit.
    pub duration: f64,
}

impl Tween {
    /// Create a validated tween.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::NonFiniteValue`] if `from` or `to` is NaN or
    /// infinite, and [`EasingError::InvalidDuration`] if `duration` is zero or
    /// not finite.
    pub fn new(easing: Easing, from: f64, to: f64, duration: f64) -> Result<Self, EasingError> {
        let tween = Self {
            easing,
            from,
            to,
            duration,
        };
        tween.validate()?;
        Ok(tween)
    }

    /// Check the endpoints and duration.
    ///
    /// Use this after deserializing a tween, since serde bypasses
    /// [`Tween::new`].
    ///
    /// # Errors
    ///
    /// Same as [`Tween::new`].
    pub fn validate(&self) -> Result<(), EasingError> {
        for (field, value) in [("from", self.from), ("to", self.to)] {
            if !value.is_finite() {
                tracing::debug!(field, value, "rejected tween endpoint");
                return Err(EasingError::NonFiniteValue { field, value });
            }
        }

        if !self.duration.is_finite() || self.duration == 0.0 {
            tracing::debug!(duration = self.duration, "rejected tween duration");
            return Err(EasingError::InvalidDuration {
                duration: self.duration,
            });
        }

        Ok(())
    }

    /// Eased value at elapsed time `t`.
    ///
    /// `t` is not clamped; times past `duration` extrapolate along the curve.
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        self.easing.evaluate_range(t, self.from, self.to, self.duration)
    }

    /// Normalized time `t / duration`.
    #[inline]
    pub fn progress(&self, t: f64) -> f64 {
        t / self.duration
    }

    /// Whether `t` has reached the end of the transition.
    #[inline]
    pub fn is_complete(&self, t: f64) -> bool {
        self.progress(t) >= 1.0
    }
}
