//! The stateful spectral descriptor engine.
//!
//! [`SpecDesc`] binds one [`DescriptorMode`] to a window size at construction
//! and then reduces a stream of [`SpectralFrame`]s to one value per frame. The
//! history buffers are updated after every frame regardless of the mode, so
//! switching a pipeline between modes never changes what the history holds.
//!
//! # Example
//!
//! ```rust
//! use spectral_descriptors::{RealVector, SpectralFrame};
//! use spectral_descriptors::operations::{SpecDesc, SpectralDescriptor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut flux = SpecDesc::<f32>::new("specflux", 1024)?;
//! let mut frame = SpectralFrame::for_window(1024)?;
//! let mut output = RealVector::new(1)?;
//!
//! flux.process(&frame, &mut output);
//! assert_eq!(output.get(0), 0.0);
//!
//! frame.set_all_magnitude(0.5)?;
//! flux.process(&frame, &mut output);
//! assert!(output.get(0) > 0.0);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::onset_detection::{self, FrameHistory};
use super::statistics;
use super::traits::SpectralDescriptor;
use super::types::{DescriptorMode, SpecDescConfig};
use crate::policy::{AccessPolicy, DefaultPolicy};
use crate::{DescriptorResult, RealFloat, SpectralFrame};

/// Spectral descriptor engine.
///
/// `P` selects how out-of-range history accesses are handled when a frame's
/// length differs from the configured bin count; see [`crate::policy`].
pub struct SpecDesc<F: RealFloat, P: AccessPolicy = DefaultPolicy> {
    config: SpecDescConfig<F>,
    history: FrameHistory<F>,
    frames_processed: u64,
    _policy: PhantomData<P>,
}

impl<F: RealFloat> SpecDesc<F> {
    /// Creates a descriptor for the mode called `mode_name` over windows of
    /// `window_size` samples.
    ///
    /// # Errors
    /// - [`crate::ConfigurationError::UnknownMode`] for unrecognised names.
    /// - [`crate::ParameterError`] when `window_size` is zero.
    pub fn new(mode_name: &str, window_size: usize) -> DescriptorResult<Self> {
        Self::from_config(&SpecDescConfig::from_name(mode_name, window_size)?)
    }
}

impl<F: RealFloat, P: AccessPolicy> SpecDesc<F, P> {
    /// Creates a descriptor from a full configuration.
    ///
    /// # Errors
    /// Returns [`crate::ParameterError`] when the configuration fails
    /// [`SpecDescConfig::validate`].
    pub fn from_config(config: &SpecDescConfig<F>) -> DescriptorResult<Self> {
        config.validate()?;
        let history = FrameHistory::new(config.bins())?;
        tracing::debug!(
            mode = %config.mode,
            window_size = config.window_size,
            bins = config.bins(),
            policy = P::NAME,
            "created spectral descriptor"
        );
        Ok(Self {
            config: config.clone(),
            history,
            frames_processed: 0,
            _policy: PhantomData,
        })
    }

    /// Creates a descriptor for `mode` with default constants.
    ///
    /// # Errors
    /// Returns [`crate::ParameterError`] when `window_size` is zero.
    pub fn with_mode(mode: DescriptorMode, window_size: usize) -> DescriptorResult<Self> {
        Self::from_config(&SpecDescConfig::new(mode, window_size))
    }

    /// The configuration this descriptor was built from.
    pub const fn config(&self) -> &SpecDescConfig<F> {
        &self.config
    }

    /// Analysis window size.
    pub const fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Number of bins expected per frame.
    pub const fn bins(&self) -> usize {
        self.config.bins()
    }

    /// Number of frames seen since construction or the last reset.
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Spectral state carried from previous frames.
    pub const fn history(&self) -> &FrameHistory<F> {
        &self.history
    }

    fn evaluate(&self, frame: &SpectralFrame<F>) -> F {
        let history = &self.history;
        match self.config.mode {
            DescriptorMode::Energy => onset_detection::energy(frame),
            DescriptorMode::HighFrequencyContent => onset_detection::high_frequency_content(frame),
            DescriptorMode::Complex => onset_detection::complex_domain::<F, P>(frame, history),
            DescriptorMode::Phase => onset_detection::phase_deviation::<F, P>(frame, history),
            DescriptorMode::KullbackLeibler => {
                onset_detection::kullback_leibler::<F, P>(frame, history, self.config.kl_epsilon)
            }
            DescriptorMode::ModifiedKullbackLeibler => {
                onset_detection::modified_kullback_leibler::<F, P>(
                    frame,
                    history,
                    self.config.kl_epsilon,
                )
            }
            DescriptorMode::Rolloff => statistics::rolloff(frame, self.config.rolloff_fraction),
            DescriptorMode::SpectralFlux => onset_detection::spectral_flux::<F, P>(frame, history),
            DescriptorMode::Centroid => statistics::centroid(frame),
            DescriptorMode::Spread => statistics::spread(frame),
            DescriptorMode::Skewness => statistics::skewness(frame),
            DescriptorMode::Kurtosis => statistics::kurtosis(frame),
            DescriptorMode::Slope => statistics::slope(frame),
            DescriptorMode::Decrease => statistics::decrease(frame),
        }
    }
}

impl<F: RealFloat, P: AccessPolicy> SpectralDescriptor<F> for SpecDesc<F, P> {
    fn compute(&mut self, frame: &SpectralFrame<F>) -> F {
        if frame.len() != self.bins() {
            tracing::warn!(
                mode = %self.config.mode,
                expected = self.bins(),
                actual = frame.len(),
                "frame length differs from descriptor bin count"
            );
        }

        let mut value = self.evaluate(frame);
        if value.is_nan() {
            tracing::warn!(
                mode = %self.config.mode,
                frame = self.frames_processed,
                "descriptor produced NaN, using 0"
            );
            value = F::zero();
        }

        self.history.push::<P>(frame);
        self.frames_processed += 1;
        tracing::trace!(mode = %self.config.mode, frame = self.frames_processed, value = ?value);
        value
    }

    fn reset(&mut self) {
        self.history.clear();
        self.frames_processed = 0;
        tracing::debug!(mode = %self.config.mode, "reset spectral descriptor");
    }

    fn mode(&self) -> DescriptorMode {
        self.config.mode
    }
}

impl<F: RealFloat, P: AccessPolicy> Clone for SpecDesc<F, P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            history: self.history.clone(),
            frames_processed: self.frames_processed,
            _policy: PhantomData,
        }
    }
}

impl<F: RealFloat, P: AccessPolicy> fmt::Debug for SpecDesc<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecDesc")
            .field("mode", &self.config.mode)
            .field("window_size", &self.config.window_size)
            .field("policy", &P::NAME)
            .field("frames_processed", &self.frames_processed)
            .finish()
    }
}
