//! Quadratic (parabolic) peak interpolation.
//!
//! A discrete peak found at bin `k` can be refined by fitting a parabola through
//! the samples at `k - 1`, `k` and `k + 1`. The helpers here never address a
//! neighbour outside the vector: positions whose three-sample window would
//! cross either edge fall back to the nearest in-range sample.

use crate::{RealFloat, RealVector, to_precision};

/// Interpolated magnitude of the peak at fractional `position`.
///
/// - `position` outside `[0, len - 1]` (or NaN) returns `0`.
/// - When the sample nearest to `position` is the first or last one, or the
///   vector is shorter than three samples, that sample is returned unchanged.
/// - Integral positions return the sample at that index.
/// - Otherwise the magnitude is `x1 - 0.25 * (x0 - x2) * (position - r)`, with
///   `r = round(position)` and `x0, x1, x2` the samples at `r - 1, r, r + 1`.
///
/// ```rust
/// use spectral_descriptors::{RealVector, interpolation::quadratic_peak_mag};
///
/// let ramp = RealVector::<f32>::from_vec((1..=10).map(|x| x as f32).collect()).unwrap();
/// assert_eq!(quadratic_peak_mag(&ramp, 9.0), 10.0);
/// assert_eq!(quadratic_peak_mag(&ramp, -1.0), 0.0);
/// ```
pub fn quadratic_peak_mag<F: RealFloat>(vector: &RealVector<F>, position: F) -> F {
    let last = vector.len() - 1;
    if position.is_nan() || position < F::zero() || position > to_precision::<F, _>(last) {
        return F::zero();
    }

    // position is within [0, last], so the rounded value fits in usize.
    let index = position.round().to_usize().unwrap_or(0).min(last);
    if index == 0 || index == last {
        return vector.get(index);
    }
    let offset = position - to_precision::<F, _>(index);
    if offset == F::zero() {
        return vector.get(index);
    }

    let x0 = vector.get(index - 1);
    let x1 = vector.get(index);
    let x2 = vector.get(index + 1);
    x1 - to_precision::<F, _>(0.25) * (x0 - x2) * offset
}

/// Fractional position of the parabola vertex through the samples around `index`.
///
/// Returns `index` itself for the first and last samples and for flat
/// neighbourhoods where the curvature vanishes; an `index` outside the vector
/// returns `0`.
pub fn quadratic_peak_pos<F: RealFloat>(vector: &RealVector<F>, index: usize) -> F {
    let len = vector.len();
    if index >= len {
        return F::zero();
    }
    let at = to_precision::<F, _>(index);
    if index == 0 || index == len - 1 {
        return at;
    }

    let s0 = vector.get(index - 1);
    let s1 = vector.get(index);
    let s2 = vector.get(index + 1);
    let curvature = s0 - (s1 + s1) + s2;
    if curvature == F::zero() {
        return at;
    }
    at + to_precision::<F, _>(0.5) * (s0 - s2) / curvature
}

/// Value at fractional offset `frac` of the parabola through three equally
/// spaced samples `s0`, `s1`, `s2` (placed at offsets 0, 1 and 2).
pub fn quadratic_fraction<F: RealFloat>(s0: F, s1: F, s2: F, frac: F) -> F {
    let two = to_precision::<F, _>(2.0);
    let three = to_precision::<F, _>(3.0);
    let four = to_precision::<F, _>(4.0);
    s0 + frac / two * (frac * (s0 - two * s1 + s2) - three * s0 + four * s1 - s2)
}
