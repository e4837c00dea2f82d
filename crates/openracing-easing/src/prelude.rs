//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use openracing_easing::prelude::*;
//!
//! let tween = Tween::new(Easing::SineOut, 0.0, 1.0, 1.0)?;
//! assert!((tween.value_at(1.0) - normalized::sine_out(1.0)).abs() < 1e-12);
//! # Ok::<(), EasingError>(())
//! ```

pub use crate::{
    easing::Easing,
    error::EasingError,
    lut::EasingLut,
    normalized, ranged,
    table::{NormalizedFn, RangeFn},
    tween::Tween,
};
