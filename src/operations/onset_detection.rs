//! Onset detection functions over consecutive spectral frames.
//!
//! Each function reduces one [`SpectralFrame`] to a scalar novelty value. The
//! history-aware ones compare the frame against a [`FrameHistory`] holding the
//! previous magnitudes and the two previous phase vectors.
//!
//! ## Mathematical Foundation
//!
//! With `m[k]`, `φ[k]` the current magnitudes and phases, `m'[k]`, `φ'[k]` the
//! previous ones and `φ''[k]` the phases two frames back:
//!
//! - **Energy**: `Σ m[k]²`
//! - **High frequency content**: `Σ (k + 1) m[k]`
//! - **Spectral flux**: `Σ max(0, m[k] - m'[k])`
//! - **Kullback-Leibler**: `Σ m[k] log2(m[k] / (m'[k] + ε) + ε)`
//! - **Modified Kullback-Leibler**: `Σ log2(1 + m[k] / (m'[k] + ε))`
//! - **Phase deviation**: `Σ m[k] |princarg(φ[k] - 2φ'[k] + φ''[k])|`
//! - **Complex domain**: `Σ |X[k] - X̂[k]|` where `X = m e^{iφ}` and the
//!   prediction `X̂ = m' e^{i(2φ' - φ'')}` assumes steady magnitude and a
//!   constant phase advance.
//!
//! Bins past the end of the history are read through the access policy `P`;
//! under [`Lenient`](crate::Lenient) they read as zero.
//!
//! ## References
//!
//! - Bello, J.P., et al. "A tutorial on onset detection in music signals." IEEE TSALP 2005.
//! - Duxbury, C., et al. "Complex domain onset detection for musical signals." DAFx 2003.
//! - Hainsworth, S., Macleod, M. "Onset detection in musical audio signals." ICMC 2003.

use num_complex::Complex;

use crate::policy::AccessPolicy;
use crate::utils::unwrap_2pi;
use crate::{DescriptorResult, RealFloat, RealVector, SpectralFrame, to_precision};

/// Spectral state carried between frames by history-aware descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHistory<F: RealFloat> {
    old_magnitude: RealVector<F>,
    old_phase: RealVector<F>,
    older_phase: RealVector<F>,
}

impl<F: RealFloat> FrameHistory<F> {
    /// Zeroed history for frames of `bins` bins.
    ///
    /// # Errors
    /// Returns [`crate::ParameterError`] when `bins` is zero.
    pub fn new(bins: usize) -> DescriptorResult<Self> {
        Ok(Self {
            old_magnitude: RealVector::new(bins)?,
            old_phase: RealVector::new(bins)?,
            older_phase: RealVector::new(bins)?,
        })
    }

    /// Number of bins tracked.
    pub fn bins(&self) -> usize {
        self.old_magnitude.len()
    }

    /// Magnitudes of the previous frame.
    pub const fn old_magnitude(&self) -> &RealVector<F> {
        &self.old_magnitude
    }

    /// Phases of the previous frame.
    pub const fn old_phase(&self) -> &RealVector<F> {
        &self.old_phase
    }

    /// Phases from two frames back.
    pub const fn older_phase(&self) -> &RealVector<F> {
        &self.older_phase
    }

    /// Shifts `frame` into the history: the previous phases become the older
    /// ones, and the frame's phases and magnitudes become the previous ones.
    pub fn push<P: AccessPolicy>(&mut self, frame: &SpectralFrame<F>) {
        let magnitude = frame.magnitude();
        let phase = frame.phase();
        for k in 0..frame.len() {
            let previous = self.old_phase.get_with::<P>(k);
            self.older_phase.set_with::<P>(k, previous);
            self.old_phase.set_with::<P>(k, phase.get_with::<P>(k));
            self.old_magnitude.set_with::<P>(k, magnitude.get_with::<P>(k));
        }
    }

    /// Forgets every previous frame.
    pub fn clear(&mut self) {
        self.old_magnitude.zeros();
        self.old_phase.zeros();
        self.older_phase.zeros();
    }
}

/// Frame energy, `Σ m[k]²`.
pub fn energy<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    frame.energy()
}

/// High frequency content, `Σ (k + 1) m[k]`.
pub fn high_frequency_content<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    frame
        .magnitude()
        .iter()
        .enumerate()
        .fold(F::zero(), |acc, (k, &m)| acc + to_precision::<F, _>(k + 1) * m)
}

/// Half-wave rectified magnitude increase over the previous frame.
pub fn spectral_flux<F: RealFloat, P: AccessPolicy>(
    frame: &SpectralFrame<F>,
    history: &FrameHistory<F>,
) -> F {
    let mut flux = F::zero();
    for (k, &m) in frame.magnitude().iter().enumerate() {
        let diff = m - history.old_magnitude.get_with::<P>(k);
        if diff > F::zero() {
            flux = flux + diff;
        }
    }
    flux
}

/// Kullback-Leibler divergence of the current magnitudes from the previous ones.
pub fn kullback_leibler<F: RealFloat, P: AccessPolicy>(
    frame: &SpectralFrame<F>,
    history: &FrameHistory<F>,
    epsilon: F,
) -> F {
    let mut kl = F::zero();
    for (k, &m) in frame.magnitude().iter().enumerate() {
        let old = history.old_magnitude.get_with::<P>(k);
        kl = kl + m * (m / (old + epsilon) + epsilon).log2();
    }
    kl
}

/// Modified Kullback-Leibler divergence, `Σ log2(1 + m / (m' + ε))`.
pub fn modified_kullback_leibler<F: RealFloat, P: AccessPolicy>(
    frame: &SpectralFrame<F>,
    history: &FrameHistory<F>,
    epsilon: F,
) -> F {
    let mut mkl = F::zero();
    for (k, &m) in frame.magnitude().iter().enumerate() {
        let old = history.old_magnitude.get_with::<P>(k);
        mkl = mkl + (F::one() + m / (old + epsilon)).log2();
    }
    mkl
}

/// Magnitude-weighted deviation of each bin's phase from the linear
/// prediction `2φ' - φ''`.
pub fn phase_deviation<F: RealFloat, P: AccessPolicy>(
    frame: &SpectralFrame<F>,
    history: &FrameHistory<F>,
) -> F {
    let magnitude = frame.magnitude();
    let phase = frame.phase();
    let mut deviation = F::zero();
    for k in 0..frame.len() {
        let predicted = history.old_phase.get_with::<P>(k) + history.old_phase.get_with::<P>(k)
            - history.older_phase.get_with::<P>(k);
        let dev = unwrap_2pi(phase.get_with::<P>(k) - predicted);
        deviation = deviation + magnitude.get_with::<P>(k) * dev.abs();
    }
    deviation
}

/// Complex domain distance between each bin and its steady-state prediction.
pub fn complex_domain<F: RealFloat, P: AccessPolicy>(
    frame: &SpectralFrame<F>,
    history: &FrameHistory<F>,
) -> F {
    let magnitude = frame.magnitude();
    let phase = frame.phase();
    let mut distance = F::zero();
    for k in 0..frame.len() {
        let old_phase = history.old_phase.get_with::<P>(k);
        let predicted_phase = old_phase + old_phase - history.older_phase.get_with::<P>(k);
        let predicted =
            Complex::from_polar(history.old_magnitude.get_with::<P>(k), predicted_phase);
        let observed = Complex::from_polar(magnitude.get_with::<P>(k), phase.get_with::<P>(k));
        distance = distance + (observed - predicted).norm();
    }
    distance
}
