//! Spectral descriptor operations.
//!
//! This module reduces spectral frames to scalar descriptors, one value per
//! frame. Descriptors are selected by name at construction and then driven
//! through the [`SpectralDescriptor`] trait.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`types`] - Descriptor modes and configuration
//! - [`spectral_descriptor`] - The stateful [`SpecDesc`] engine
//! - [`onset_detection`] - History-aware novelty functions
//!   (energy, HFC, complex, phase, KL, MKL, flux)
//! - [`statistics`] - Spectral shape statistics
//!   (rolloff, centroid, spread, skewness, kurtosis, slope, decrease)
//!
//! ## Quick Start
//!
//! ```rust
//! use spectral_descriptors::SpectralFrame;
//! use spectral_descriptors::operations::{
//!     DescriptorMode, SpecDesc, SpecDescConfig, SpectralDescriptor,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config =
//!     SpecDescConfig::<f64>::new(DescriptorMode::Rolloff, 1024).with_rolloff_fraction(0.85);
//! let mut rolloff = SpecDesc::<f64>::from_config(&config)?;
//!
//! let mut frame = SpectralFrame::for_window(1024)?;
//! frame.magnitude_mut().set(100, 1.0);
//! assert_eq!(rolloff.compute(&frame), 100.0);
//! # Ok(())
//! # }
//! ```

pub mod onset_detection;
pub mod spectral_descriptor;
pub mod statistics;
pub mod traits;
pub mod types;

pub use onset_detection::FrameHistory;
pub use spectral_descriptor::SpecDesc;
pub use traits::SpectralDescriptor;
pub use types::{
    DEFAULT_KL_EPSILON, DEFAULT_ROLLOFF_FRACTION, DEFAULT_WINDOW_SIZE, DescriptorMode,
    SpecDescConfig,
};
