//! Polar spectral frames.
//!
//! A [`SpectralFrame`] holds the one-sided spectrum of one analysis frame as a
//! pair of equally long [`RealVector`]s: magnitudes (never negative) and phases
//! in radians. It is the input type of the descriptor engine in
//! [`crate::operations`].

use num_complex::Complex;

use crate::{DescriptorError, DescriptorResult, ParameterError, RealFloat, RealVector};

/// Magnitude/phase representation of one transformed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralFrame<F: RealFloat> {
    magnitude: RealVector<F>,
    phase: RealVector<F>,
}

/// Number of one-sided bins produced by a transform of `window_size` samples.
#[inline]
pub const fn bins_for_window(window_size: usize) -> usize {
    window_size / 2 + 1
}

impl<F: RealFloat> SpectralFrame<F> {
    /// Creates a silent frame with `bins` bins.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `bins` is zero.
    pub fn new(bins: usize) -> DescriptorResult<Self> {
        Ok(Self {
            magnitude: RealVector::new(bins)?,
            phase: RealVector::new(bins)?,
        })
    }

    /// Creates a silent frame sized for a transform of `window_size` samples,
    /// i.e. with `window_size / 2 + 1` bins.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `window_size` is zero.
    pub fn for_window(window_size: usize) -> DescriptorResult<Self> {
        if window_size == 0 {
            return Err(
                ParameterError::invalid_value("window_size", "must be greater than 0").into(),
            );
        }
        Self::new(bins_for_window(window_size))
    }

    /// Builds a frame from separate magnitude and phase vectors.
    ///
    /// # Errors
    /// - [`DescriptorError::DimensionMismatch`] if the lengths differ.
    /// - [`ParameterError`] if any magnitude is negative or NaN.
    pub fn from_parts(magnitude: RealVector<F>, phase: RealVector<F>) -> DescriptorResult<Self> {
        if magnitude.len() != phase.len() {
            return Err(DescriptorError::dimension_mismatch(
                magnitude.len(),
                phase.len(),
            ));
        }
        if let Some(k) = magnitude.iter().position(|&m| m.is_nan() || m < F::zero()) {
            return Err(ParameterError::invalid_value(
                "magnitude",
                format!("bin {k} is negative or NaN"),
            )
            .into());
        }
        Ok(Self { magnitude, phase })
    }

    /// Converts the first `bins` complex transform outputs to polar form.
    ///
    /// Only the one-sided half of a full FFT output is needed; pass
    /// `bins_for_window(fft.len())` to keep the conventional layout.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `bins` is zero or exceeds `spectrum.len()`.
    pub fn from_complex(spectrum: &[Complex<F>], bins: usize) -> DescriptorResult<Self> {
        if bins > spectrum.len() {
            return Err(ParameterError::invalid_value(
                "bins",
                format!("{bins} bins requested from a spectrum of {}", spectrum.len()),
            )
            .into());
        }
        let mut frame = Self::new(bins)?;
        frame.assign_complex(&spectrum[..bins])?;
        Ok(frame)
    }

    /// Overwrites this frame from complex bins of the same length.
    ///
    /// # Errors
    /// Returns [`DescriptorError::DimensionMismatch`] when the lengths differ.
    pub fn assign_complex(&mut self, bins: &[Complex<F>]) -> DescriptorResult<()> {
        if bins.len() != self.len() {
            return Err(DescriptorError::dimension_mismatch(self.len(), bins.len()));
        }
        for (k, c) in bins.iter().enumerate() {
            let (r, theta) = c.to_polar();
            self.magnitude.set(k, r);
            self.phase.set(k, theta);
        }
        Ok(())
    }

    /// Converts back to rectangular form.
    pub fn to_complex(&self) -> Vec<Complex<F>> {
        self.magnitude
            .iter()
            .zip(self.phase.iter())
            .map(|(&r, &theta)| Complex::from_polar(r, theta))
            .collect()
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    /// Always `false`; a frame holds at least one bin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Magnitudes, one per bin.
    pub const fn magnitude(&self) -> &RealVector<F> {
        &self.magnitude
    }

    /// Phases in radians, one per bin.
    pub const fn phase(&self) -> &RealVector<F> {
        &self.phase
    }

    /// Mutable magnitudes. Callers are responsible for keeping them non-negative.
    pub const fn magnitude_mut(&mut self) -> &mut RealVector<F> {
        &mut self.magnitude
    }

    /// Mutable phases.
    pub const fn phase_mut(&mut self) -> &mut RealVector<F> {
        &mut self.phase
    }

    /// Silences the frame: all magnitudes and phases become zero.
    pub fn zeros(&mut self) {
        self.magnitude.zeros();
        self.phase.zeros();
    }

    /// Sets every magnitude to `value`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `value` is negative or NaN.
    pub fn set_all_magnitude(&mut self, value: F) -> DescriptorResult<()> {
        if value.is_nan() || value < F::zero() {
            return Err(ParameterError::invalid_value("magnitude", "must be >= 0").into());
        }
        self.magnitude.set_all(value);
        Ok(())
    }

    /// Sets every phase to `value`.
    pub fn set_all_phase(&mut self, value: F) {
        self.phase.set_all(value);
    }

    /// Copies magnitudes and phases from `other`.
    ///
    /// # Errors
    /// Returns [`DescriptorError::DimensionMismatch`] when the lengths differ.
    pub fn copy_from(&mut self, other: &SpectralFrame<F>) -> DescriptorResult<()> {
        self.magnitude.copy_from(&other.magnitude)?;
        self.phase.copy_from(&other.phase)
    }

    /// Compresses magnitudes in place: `m = ln(lambda * m + 1)`.
    pub fn log_magnitude(&mut self, lambda: F) {
        for m in self.magnitude.iter_mut() {
            *m = (lambda * *m + F::one()).ln();
        }
    }

    /// Total energy `Σ m²` of the frame.
    pub fn energy(&self) -> F {
        self.magnitude.iter().fold(F::zero(), |acc, &m| acc + m * m)
    }
}
