//! Easing Curves for OpenRacing
//!
//! This crate provides stateless easing functions that reshape a linear
//! progress value into a non-linear one, for animated transitions such as LED
//! sweeps, UI motion and ramped effect parameters.
//!
//! # Overview
//!
//! The crate has two layers of plain functions:
//! - [`normalized`]: `f(t)` for normalized time `t` in `[0,1]`, returning the
//!   eased value. Every curve maps 0 to 0 and 1 to 1.
//! - [`ranged`]: `g(t, from, to, duration)`, which normalizes `t` by
//!   `duration`, applies the curve of the same name and remaps the result into
//!   `[from, to]`.
//!
//! 31 curves are provided: sine, quadratic, cubic, quartic, quintic,
//! exponential, circular, back, elastic and bounce, each in `in`, `out` and
//! `in_out` form, plus Perlin's smootherstep (`perlin_in_out`).
//!
//! Back and elastic curves overshoot `[0,1]` between the endpoints. All other
//! curves stay inside it.
//!
//! On top of the functions:
//! - [`Easing`] names a curve as a serializable `Copy` value.
//! - [`NORMALIZED_EASINGS`] and [`RANGE_EASINGS`] enumerate every curve by
//!   name.
//! - [`Tween`] describes one validated transition for configuration files.
//! - [`EasingLut`] samples a curve for O(1) lookup.
//!
//! # RT Safety
//!
//! Every function in [`normalized`] and [`ranged`] is pure: no allocation, no
//! locking, no I/O and bounded execution time. They can be called from any
//! thread, including the RT path. Name lookup may log through `tracing` on
//! failure and should happen at load time.
//!
//! # Example
//!
//! ```
//! use openracing_easing::{Easing, normalized, ranged};
//!
//! assert_eq!(normalized::quadratic_in(0.5), 0.25);
//!
//! // 50 ms into a 100 ms fade from 10 to 100
//! let value = ranged::cubic_in_out(50.0, 10.0, 100.0, 100.0);
//! assert!((value - 55.0).abs() < 1e-12);
//!
//! // Curves picked by name, e.g. from a profile
//! let easing: Easing = "bounce_out".parse()?;
//! assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-12);
//! # Ok::<(), openracing_easing::EasingError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod easing;
pub mod error;
pub mod lut;
pub mod normalized;
pub mod prelude;
pub mod ranged;
pub mod table;
pub mod tween;

pub use easing::Easing;
pub use error::EasingError;
pub use lut::EasingLut;
pub use table::{
    EASING_COUNT, NORMALIZED_EASINGS, NormalizedFn, RANGE_EASINGS, RangeFn, normalized_by_name,
    range_by_name,
};
pub use tween::Tween;
