// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::box_collection)] // Warns on boxed `Vec`, `String`, etc.
#![warn(clippy::vec_box)] // Avoids using `Vec<Box<T>>` when unnecessary
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # Spectral Descriptors
//!
//! Per-frame spectral descriptors for onset detection and timbre analysis,
//! built on a small, checked numeric vector type.
//!
//! ## Overview
//!
//! The crate is organised in three layers:
//!
//! - **Vectors**: [`RealVector`] is a fixed-length buffer of real samples
//!   whose indexed accessors are checked through an [`AccessPolicy`].
//! - **Utilities**: sizing, pitch and bin conversions, phase wrapping, level
//!   measures ([`audio_math`]), quadratic peak interpolation
//!   ([`interpolation`]) and named window functions ([`window`]).
//! - **Descriptors**: [`operations::SpecDesc`] reduces a stream of
//!   [`SpectralFrame`]s (magnitude and phase per bin) to one value per frame.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! spectral_descriptors = "0.1.0"
//! ```
//!
//! ## Checked Access
//!
//! Out-of-range indices and absent vector references are never undefined
//! behaviour. What happens instead depends on the policy:
//!
//! - [`Strict`] (default with `debug_assertions`): logs through `tracing` and panics.
//! - [`Lenient`] (default in release builds): logs a warning, reads yield `0`
//!   and writes are dropped.
//!
//! ```rust
//! use spectral_descriptors::{Lenient, RealVector};
//!
//! let mut v = RealVector::<f32>::new(4).unwrap();
//! v.set_with::<Lenient>(10, 1.0); // dropped
//! assert_eq!(v.get_with::<Lenient>(10), 0.0);
//! assert_eq!(v.sum(), 0.0);
//! ```
//!
//! ## Error Handling
//!
//! Construction and configuration errors use a hierarchical error type:
//!
//! ```rust
//! use spectral_descriptors::{ConfigurationError, DescriptorError};
//! use spectral_descriptors::operations::SpecDesc;
//!
//! match SpecDesc::<f32>::new("nonsense", 1024) {
//!     Ok(_) => unreachable!(),
//!     Err(DescriptorError::Configuration(ConfigurationError::UnknownMode(name))) => {
//!         assert_eq!(name, "nonsense");
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use spectral_descriptors::{RealVector, SpectralFrame};
//! use spectral_descriptors::operations::{SpecDesc, SpectralDescriptor};
//!
//! let mut hfc = SpecDesc::<f64>::new("hfc", 8).unwrap();
//! let frame = SpectralFrame::from_parts(
//!     RealVector::from_vec(vec![0.0, 1.0, 0.0, 0.0, 0.0]).unwrap(),
//!     RealVector::new(5).unwrap(),
//! )
//! .unwrap();
//!
//! let mut output = RealVector::new(1).unwrap();
//! hfc.process(&frame, &mut output);
//! assert_eq!(output.get(0), 2.0);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (debug on construction and reset, warn on
//! lenient access violations and fallbacks, trace per processed frame) and
//! never installs a subscriber itself.
//!
//! ## License
//!
//! MIT License

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst, NumCast};

mod error;
pub mod operations;
pub mod policy;
mod repr;
pub mod spectrum;
pub mod utils;

pub use crate::error::{ConfigurationError, DescriptorError, DescriptorResult, ParameterError};
pub use crate::policy::{AccessPolicy, AccessViolation, DefaultPolicy, Lenient, Strict};
pub use crate::repr::{RealVector, get_sample, get_sample_with, set_sample, set_sample_with};
pub use crate::spectrum::{SpectralFrame, bins_for_window};
pub use crate::utils::{audio_math, interpolation, window};

/// Marker trait for real floating-point types (f32, f64)
pub trait RealFloat:
    Float + FloatConst + NumCast + Default + Debug + Display + Send + Sync + 'static
{
}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Converts a numeric value into the working precision `F`.
///
/// This abstracts over floating-point precision in generic code, so a single
/// implementation serves both `f32` and `f64` without explicit `as` casts.
///
/// Values that cannot be represented in `F` become NaN.
///
/// # Examples
/// ```
/// use spectral_descriptors::to_precision;
///
/// let value_f32: f32 = to_precision(42usize);
/// assert_eq!(value_f32, 42.0);
///
/// let value_f64: f64 = to_precision(0.5f32);
/// assert_eq!(value_f64, 0.5);
/// ```
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat,
    T: NumCast,
{
    NumCast::from(value).unwrap_or_else(F::nan)
}
