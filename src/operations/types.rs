//! Supporting types for the spectral descriptor engine.
//!
//! This module contains the descriptor mode enumeration and the configuration
//! structure used to build a [`SpecDesc`](super::SpecDesc).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, DescriptorResult, ParameterError, RealFloat, to_precision};

/// Default fraction of frame energy used by the rolloff descriptor.
pub const DEFAULT_ROLLOFF_FRACTION: f64 = 0.95;

/// Default guard added to denominators and logarithm arguments of the
/// Kullback-Leibler descriptors.
pub const DEFAULT_KL_EPSILON: f64 = 1e-6;

/// Default analysis window size.
pub const DEFAULT_WINDOW_SIZE: usize = 1024;

/// Spectral descriptor algorithms.
///
/// The first seven variants are onset detection functions; the remaining ones
/// describe the shape of a single spectrum. Variants are resolved once, at
/// construction, from their short names (see [`DescriptorMode::name`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptorMode {
    /// Frame energy, `Σ m[k]²`.
    #[serde(rename = "energy")]
    Energy,
    /// High frequency content, `Σ (k + 1) m[k]`.
    #[default]
    #[serde(rename = "hfc", alias = "default")]
    HighFrequencyContent,
    /// Complex domain distance between the observed bins and a linear
    /// magnitude/phase prediction from the two previous frames.
    #[serde(rename = "complex")]
    Complex,
    /// Magnitude-weighted phase deviation from linear phase prediction.
    #[serde(rename = "phase")]
    Phase,
    /// Kullback-Leibler divergence against the previous magnitudes.
    #[serde(rename = "kl")]
    KullbackLeibler,
    /// Modified Kullback-Leibler divergence.
    #[serde(rename = "mkl")]
    ModifiedKullbackLeibler,
    /// Bin below which a fixed fraction of the frame energy lies.
    #[serde(rename = "rolloff")]
    Rolloff,
    /// Half-wave rectified magnitude difference to the previous frame.
    #[serde(rename = "specflux")]
    SpectralFlux,
    /// Spectral centroid, in bins.
    #[serde(rename = "centroid")]
    Centroid,
    /// Spectral spread (variance around the centroid), in squared bins.
    #[serde(rename = "spread")]
    Spread,
    /// Spectral skewness.
    #[serde(rename = "skewness")]
    Skewness,
    /// Spectral kurtosis.
    #[serde(rename = "kurtosis")]
    Kurtosis,
    /// Normalised least-squares slope of the magnitude spectrum.
    #[serde(rename = "slope")]
    Slope,
    /// Spectral decrease.
    #[serde(rename = "decrease")]
    Decrease,
}

impl DescriptorMode {
    /// Every supported mode.
    pub const ALL: [DescriptorMode; 14] = [
        DescriptorMode::Energy,
        DescriptorMode::HighFrequencyContent,
        DescriptorMode::Complex,
        DescriptorMode::Phase,
        DescriptorMode::KullbackLeibler,
        DescriptorMode::ModifiedKullbackLeibler,
        DescriptorMode::Rolloff,
        DescriptorMode::SpectralFlux,
        DescriptorMode::Centroid,
        DescriptorMode::Spread,
        DescriptorMode::Skewness,
        DescriptorMode::Kurtosis,
        DescriptorMode::Slope,
        DescriptorMode::Decrease,
    ];

    /// Short name accepted by [`FromStr`] and used by serde.
    pub const fn name(&self) -> &'static str {
        match self {
            DescriptorMode::Energy => "energy",
            DescriptorMode::HighFrequencyContent => "hfc",
            DescriptorMode::Complex => "complex",
            DescriptorMode::Phase => "phase",
            DescriptorMode::KullbackLeibler => "kl",
            DescriptorMode::ModifiedKullbackLeibler => "mkl",
            DescriptorMode::Rolloff => "rolloff",
            DescriptorMode::SpectralFlux => "specflux",
            DescriptorMode::Centroid => "centroid",
            DescriptorMode::Spread => "spread",
            DescriptorMode::Skewness => "skewness",
            DescriptorMode::Kurtosis => "kurtosis",
            DescriptorMode::Slope => "slope",
            DescriptorMode::Decrease => "decrease",
        }
    }

    /// Whether the mode reads the previous frame's magnitudes.
    pub const fn uses_magnitude_history(&self) -> bool {
        matches!(
            self,
            DescriptorMode::Complex
                | DescriptorMode::KullbackLeibler
                | DescriptorMode::ModifiedKullbackLeibler
                | DescriptorMode::SpectralFlux
        )
    }

    /// Whether the mode reads the two previous frames' phases.
    pub const fn uses_phase_history(&self) -> bool {
        matches!(self, DescriptorMode::Complex | DescriptorMode::Phase)
    }

    /// Whether the mode is an onset detection function (as opposed to a
    /// spectral shape statistic).
    pub const fn is_onset_function(&self) -> bool {
        matches!(
            self,
            DescriptorMode::Energy
                | DescriptorMode::HighFrequencyContent
                | DescriptorMode::Complex
                | DescriptorMode::Phase
                | DescriptorMode::KullbackLeibler
                | DescriptorMode::ModifiedKullbackLeibler
                | DescriptorMode::SpectralFlux
        )
    }
}

impl fmt::Display for DescriptorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DescriptorMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(DescriptorMode::default());
        }
        DescriptorMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ConfigurationError::UnknownMode(s.to_string()))
    }
}

/// Configuration for a [`SpecDesc`](super::SpecDesc).
///
/// Missing fields take their values from [`SpecDescConfig::default`] when
/// deserializing.
///
/// # Examples
///
/// ```rust
/// use spectral_descriptors::operations::{DescriptorMode, SpecDescConfig};
///
/// let config = SpecDescConfig::<f32>::new(DescriptorMode::Rolloff, 512)
///     .with_rolloff_fraction(0.85);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.bins(), 257);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecDescConfig<F: RealFloat> {
    /// Descriptor algorithm.
    pub mode: DescriptorMode,
    /// Analysis window size; history buffers hold `window_size / 2 + 1` bins.
    pub window_size: usize,
    /// Energy fraction, in `(0, 1]`, at which the rolloff scan stops.
    pub rolloff_fraction: F,
    /// Positive guard for the Kullback-Leibler descriptors.
    pub kl_epsilon: F,
}

impl<F: RealFloat> Default for SpecDescConfig<F> {
    fn default() -> Self {
        Self::new(DescriptorMode::default(), DEFAULT_WINDOW_SIZE)
    }
}

impl<F: RealFloat> SpecDescConfig<F> {
    /// Configuration for `mode` over windows of `window_size` samples, with
    /// default constants.
    pub fn new(mode: DescriptorMode, window_size: usize) -> Self {
        Self {
            mode,
            window_size,
            rolloff_fraction: to_precision::<F, _>(DEFAULT_ROLLOFF_FRACTION),
            kl_epsilon: to_precision::<F, _>(DEFAULT_KL_EPSILON),
        }
    }

    /// Configuration for the mode called `name`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownMode`] for unrecognised names.
    pub fn from_name(name: &str, window_size: usize) -> DescriptorResult<Self> {
        Ok(Self::new(name.parse()?, window_size))
    }

    /// Sets the rolloff energy fraction.
    pub fn with_rolloff_fraction(mut self, fraction: F) -> Self {
        self.rolloff_fraction = fraction;
        self
    }

    /// Sets the Kullback-Leibler guard.
    pub fn with_kl_epsilon(mut self, epsilon: F) -> Self {
        self.kl_epsilon = epsilon;
        self
    }

    /// Number of spectral bins implied by the window size.
    pub const fn bins(&self) -> usize {
        crate::spectrum::bins_for_window(self.window_size)
    }

    /// Checks every field.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when the window size is zero, the rolloff
    /// fraction is outside `(0, 1]`, or the epsilon is not a positive finite number.
    pub fn validate(&self) -> DescriptorResult<()> {
        if self.window_size == 0 {
            return Err(
                ParameterError::invalid_value("window_size", "must be greater than 0").into(),
            );
        }

        let fraction = self.rolloff_fraction.to_f64().unwrap_or(f64::NAN);
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ParameterError::out_of_range("rolloff_fraction", fraction, 0.0, 1.0).into());
        }

        let epsilon = self.kl_epsilon.to_f64().unwrap_or(f64::NAN);
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ParameterError::invalid_value(
                "kl_epsilon",
                format!("must be a positive finite number, got {epsilon}"),
            )
            .into());
        }

        Ok(())
    }
}
