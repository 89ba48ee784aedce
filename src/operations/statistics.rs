//! Spectral shape statistics.
//!
//! These descriptors treat the magnitude spectrum of a single frame as a
//! distribution over bin indices. They carry no state between frames. Every
//! result is expressed in bins; multiply by `sample_rate / window_size` for Hz.
//!
//! A silent frame (all magnitudes zero) yields `0` for every statistic, and the
//! higher moments yield `0` whenever the spread vanishes.

use crate::{RealFloat, SpectralFrame, to_precision};

/// Magnitude sum and centroid shared by the moment based statistics.
struct Moments<F> {
    sum: F,
    centroid: F,
}

fn moments<F: RealFloat>(frame: &SpectralFrame<F>) -> Option<Moments<F>> {
    let magnitude = frame.magnitude();
    let sum = magnitude.sum();
    if sum == F::zero() {
        return None;
    }
    let weighted = magnitude
        .iter()
        .enumerate()
        .fold(F::zero(), |acc, (k, &m)| acc + to_precision::<F, _>(k) * m);
    Some(Moments {
        sum,
        centroid: weighted / sum,
    })
}

/// Magnitude weighted central moment of the given order.
fn central_moment<F: RealFloat>(frame: &SpectralFrame<F>, moments: &Moments<F>, order: i32) -> F {
    let total = frame
        .magnitude()
        .iter()
        .enumerate()
        .fold(F::zero(), |acc, (k, &m)| {
            acc + (to_precision::<F, _>(k) - moments.centroid).powi(order) * m
        });
    total / moments.sum
}

/// Spectral centroid, `Σ k m[k] / Σ m[k]`.
pub fn centroid<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    moments(frame).map_or(F::zero(), |m| m.centroid)
}

/// Spectral spread, the magnitude weighted variance around the centroid.
pub fn spread<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    moments(frame).map_or(F::zero(), |m| central_moment(frame, &m, 2))
}

/// Spectral skewness, the third central moment over `spread^1.5`.
pub fn skewness<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    let Some(m) = moments(frame) else {
        return F::zero();
    };
    let spread = central_moment(frame, &m, 2);
    if spread == F::zero() {
        return F::zero();
    }
    central_moment(frame, &m, 3) / spread.powf(to_precision::<F, _>(1.5))
}

/// Spectral kurtosis, the fourth central moment over `spread²`.
pub fn kurtosis<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    let Some(m) = moments(frame) else {
        return F::zero();
    };
    let spread = central_moment(frame, &m, 2);
    if spread == F::zero() {
        return F::zero();
    }
    central_moment(frame, &m, 4) / (spread * spread)
}

/// Least-squares slope of magnitude against bin index, normalised by the
/// magnitude sum.
///
/// `(L Σ k m - Σ k Σ m) / (L Σ k² - (Σ k)²) / Σ m`. Single-bin and silent
/// frames return `0`.
pub fn slope<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    let magnitude = frame.magnitude();
    let sum = magnitude.sum();
    let length = to_precision::<F, _>(frame.len());

    let (mut sum_k, mut sum_k2, mut sum_km) = (F::zero(), F::zero(), F::zero());
    for (k, &m) in magnitude.iter().enumerate() {
        let k = to_precision::<F, _>(k);
        sum_k = sum_k + k;
        sum_k2 = sum_k2 + k * k;
        sum_km = sum_km + k * m;
    }

    let denominator = length * sum_k2 - sum_k * sum_k;
    if sum == F::zero() || denominator == F::zero() {
        return F::zero();
    }
    (length * sum_km - sum_k * sum) / denominator / sum
}

/// Spectral decrease, `Σ_{k≥1} (m[k] - m[0]) / k / Σ_{k≥1} m[k]`.
pub fn decrease<F: RealFloat>(frame: &SpectralFrame<F>) -> F {
    let magnitude = frame.magnitude();
    let first = magnitude.iter().next().copied().unwrap_or_else(F::zero);

    let (mut numerator, mut denominator) = (F::zero(), F::zero());
    for (k, &m) in magnitude.iter().enumerate().skip(1) {
        numerator = numerator + (m - first) / to_precision::<F, _>(k);
        denominator = denominator + m;
    }

    if denominator == F::zero() {
        return F::zero();
    }
    numerator / denominator
}

/// Smallest bin index at which the cumulative energy `Σ m²` reaches
/// `fraction` of the frame total.
///
/// A silent frame returns `0`; the result never exceeds the last bin.
pub fn rolloff<F: RealFloat>(frame: &SpectralFrame<F>, fraction: F) -> F {
    let total = frame.energy();
    if total == F::zero() {
        return F::zero();
    }
    let threshold = fraction * total;
    let last = frame.len() - 1;

    let mut cumulative = F::zero();
    for (k, &m) in frame.magnitude().iter().enumerate() {
        cumulative = cumulative + m * m;
        if cumulative >= threshold {
            return to_precision::<F, _>(k);
        }
    }
    to_precision::<F, _>(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RealVector;
    use approx_eq::assert_approx_eq;

    fn frame(magnitude: &[f64]) -> SpectralFrame<f64> {
        SpectralFrame::from_parts(
            RealVector::from_vec(magnitude.to_vec()).unwrap(),
            RealVector::new(magnitude.len()).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_silent_frame_statistics_are_zero() {
        let silent = frame(&[0.0; 8]);
        for value in [
            centroid(&silent),
            spread(&silent),
            skewness(&silent),
            kurtosis(&silent),
            slope(&silent),
            decrease(&silent),
            rolloff(&silent, 0.95),
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_single_peak() {
        let mut mags = [0.0; 8];
        mags[3] = 2.0;
        let f = frame(&mags);
        assert_approx_eq!(centroid(&f), 3.0, 1e-12);
        assert_eq!(spread(&f), 0.0);
        assert_eq!(skewness(&f), 0.0);
        assert_eq!(kurtosis(&f), 0.0);
        assert_approx_eq!(rolloff(&f, 0.95), 3.0, 1e-12);
    }

    #[test]
    fn test_symmetric_pair() {
        let f = frame(&[0.0, 1.0, 0.0, 1.0, 0.0]);
        assert_approx_eq!(centroid(&f), 2.0, 1e-12);
        assert_approx_eq!(spread(&f), 1.0, 1e-12);
        assert!(skewness(&f).abs() < 1e-12);
        assert_approx_eq!(kurtosis(&f), 1.0, 1e-12);
    }

    #[test]
    fn test_skewness_sign() {
        let low_heavy = frame(&[4.0, 2.0, 1.0, 0.5, 0.25]);
        assert!(skewness(&low_heavy) > 0.0);
        let high_heavy = frame(&[0.25, 0.5, 1.0, 2.0, 4.0]);
        assert!(skewness(&high_heavy) < 0.0);
    }

    #[test]
    fn test_slope() {
        // m[k] = k over five bins: Σm = 10, regression slope 1
        let ramp = frame(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_approx_eq!(slope(&ramp), 0.1, 1e-12);

        let flat = frame(&[1.0; 6]);
        assert!(slope(&flat).abs() < 1e-12);

        let single = frame(&[3.0]);
        assert_eq!(slope(&single), 0.0);

        assert!(slope(&frame(&[4.0, 3.0, 2.0, 1.0])) < 0.0);
    }

    #[test]
    fn test_decrease() {
        let f = frame(&[1.0, 3.0, 5.0]);
        // ((3 - 1) / 1 + (5 - 1) / 2) / (3 + 5)
        assert_approx_eq!(decrease(&f), 0.5, 1e-12);

        let only_dc = frame(&[2.0, 0.0, 0.0]);
        assert_eq!(decrease(&only_dc), 0.0);
    }

    #[test]
    fn test_rolloff() {
        let mut mags = [0.0; 513];
        mags[512] = 1.0;
        assert_eq!(rolloff(&frame(&mags), 0.95), 512.0);

        let mut mags = [0.0; 16];
        mags[0] = 1.0;
        assert_eq!(rolloff(&frame(&mags), 0.95), 0.0);

        // uniform energy: 95% reached at bin ceil(0.95 * 20) - 1
        let uniform = frame(&[1.0; 20]);
        assert_eq!(rolloff(&uniform, 0.95), 18.0);
        assert_eq!(rolloff(&uniform, 1.0), 19.0);
    }
}
