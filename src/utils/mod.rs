//! Utility functions supporting the descriptor engine and its callers.
//!
//! # Modules
//!
//! - [`audio_math`] - Sizing, pitch/frequency/bin conversions, phase wrapping and level measures
//! - [`interpolation`] - Quadratic peak interpolation with boundary-safe neighbour access
//! - [`window`] - Named window functions

pub mod audio_math;
pub mod interpolation;
pub mod window;

pub use audio_math::*;
pub use interpolation::*;
pub use window::{UnknownWindow, WindowType, set_window, window};
