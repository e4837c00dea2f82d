//! Error types for easing lookups and tween configuration.
//!
//! The curve functions themselves are total and never fail. Errors only arise
//! when resolving a curve by name, validating a [`Tween`](crate::Tween) or
//! deserializing an [`EasingLut`](crate::EasingLut).

/// Error type for easing operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    /// No curve is registered under the given name.
    #[error("Unknown easing '{name}'")]
    UnknownEasing {
        /// The name that failed to resolve.
        name: String,
    },

    /// Tween duration is zero or not finite.
    #[error("Tween duration must be finite and non-zero, got {duration}")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// A tween endpoint is NaN or infinite.
    #[error("Tween {field} value must be finite, got {value}")]
    NonFiniteValue {
        /// Which endpoint was rejected ("from" or "to").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Serialized lookup table has the wrong number of entries.
    #[error("Expected {expected} entries in EasingLut, got {actual}")]
    InvalidLutSize {
        /// Required number of entries.
        expected: usize,
        /// Number of entries found.
        actual: usize,
    },
}
