//! Core real-valued vector representation.
//!
//! [`RealVector`] is the fixed-length sample buffer every other type in this crate
//! is built on. Its length is chosen at construction, is always at least one, and
//! never changes afterwards. Indexed reads and writes are checked against that
//! length through an [`AccessPolicy`]; see [`crate::policy`] for how violations
//! are handled in debug and release builds.
//!
//! Whole-vector operations (filling, copying, weighting, statistics) are total and
//! never consult the policy.

use std::fmt;

use ndarray::{Array1, ArrayView1};

use crate::policy::{AccessPolicy, DefaultPolicy, check_bounds, report_null};
use crate::{DescriptorError, DescriptorResult, ParameterError, RealFloat};

/// A fixed-length, bounds-checked buffer of real samples.
///
/// # Examples
///
/// ```rust
/// use spectral_descriptors::RealVector;
///
/// let mut v = RealVector::<f32>::new(4).unwrap();
/// v.set(2, 0.5);
/// assert_eq!(v.get(2), 0.5);
/// assert_eq!(v.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RealVector<F: RealFloat> {
    data: Array1<F>,
}

impl<F: RealFloat> RealVector<F> {
    /// Creates a zero-filled vector of `length` samples.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `length` is zero.
    pub fn new(length: usize) -> DescriptorResult<Self> {
        if length == 0 {
            return Err(ParameterError::invalid_value("length", "must be greater than 0").into());
        }
        Ok(Self {
            data: Array1::zeros(length),
        })
    }

    /// Creates a vector taking ownership of `data`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `data` is empty.
    pub fn from_vec(data: Vec<F>) -> DescriptorResult<Self> {
        Self::from_array(Array1::from_vec(data))
    }

    /// Creates a vector from an existing `ndarray` buffer.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when `data` is empty.
    pub fn from_array(data: Array1<F>) -> DescriptorResult<Self> {
        if data.is_empty() {
            return Err(ParameterError::invalid_value("data", "vector must not be empty").into());
        }
        Ok(Self { data })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a `RealVector` holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads sample `index` under the build's [`DefaultPolicy`].
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> F {
        self.get_with::<DefaultPolicy>(index)
    }

    /// Writes sample `index` under the build's [`DefaultPolicy`].
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize, value: F) {
        self.set_with::<DefaultPolicy>(index, value);
    }

    /// Reads sample `index` under policy `P`, returning zero if the policy lets an
    /// out-of-range access continue.
    #[inline]
    #[track_caller]
    pub fn get_with<P: AccessPolicy>(&self, index: usize) -> F {
        if check_bounds::<P>(index, self.data.len()) {
            self.data[index]
        } else {
            F::zero()
        }
    }

    /// Writes sample `index` under policy `P`; out-of-range writes the policy lets
    /// through are dropped.
    #[inline]
    #[track_caller]
    pub fn set_with<P: AccessPolicy>(&mut self, index: usize, value: F) {
        if check_bounds::<P>(index, self.data.len()) {
            self.data[index] = value;
        }
    }

    /// Sets every sample to zero.
    pub fn zeros(&mut self) {
        self.data.fill(F::zero());
    }

    /// Sets every sample to one.
    pub fn ones(&mut self) {
        self.data.fill(F::one());
    }

    /// Sets every sample to `value`.
    pub fn set_all(&mut self, value: F) {
        self.data.fill(value);
    }

    /// Copies the contents of `other` into `self`.
    ///
    /// # Errors
    /// Returns [`DescriptorError::DimensionMismatch`] when the lengths differ.
    pub fn copy_from(&mut self, other: &RealVector<F>) -> DescriptorResult<()> {
        if other.len() != self.len() {
            return Err(DescriptorError::dimension_mismatch(self.len(), other.len()));
        }
        self.data.assign(&other.data);
        Ok(())
    }

    /// Multiplies `self` element-wise by `weights`, e.g. to apply a window.
    ///
    /// # Errors
    /// Returns [`DescriptorError::DimensionMismatch`] when the lengths differ.
    pub fn weight(&mut self, weights: &RealVector<F>) -> DescriptorResult<()> {
        if weights.len() != self.len() {
            return Err(DescriptorError::dimension_mismatch(self.len(), weights.len()));
        }
        for (sample, &w) in self.data.iter_mut().zip(weights.data.iter()) {
            *sample = *sample * w;
        }
        Ok(())
    }

    /// Reverses the sample order in place.
    pub fn reverse(&mut self) {
        let n = self.len();
        for i in 0..n / 2 {
            self.data.swap(i, n - 1 - i);
        }
    }

    /// Swaps the two halves of the vector (zero-phase rotation).
    ///
    /// For odd lengths the middle sample ends up last, so that [`Self::ishift`]
    /// restores the original order.
    pub fn shift(&mut self) {
        let n = self.len();
        self.rotate_left((n + 1) / 2);
    }

    /// Inverse of [`Self::shift`].
    pub fn ishift(&mut self) {
        let n = self.len();
        self.rotate_left(n / 2);
    }

    fn rotate_left(&mut self, mid: usize) {
        let mut samples = self.data.to_vec();
        samples.rotate_left(mid);
        self.data = Array1::from_vec(samples);
    }

    /// Sum of all samples.
    pub fn sum(&self) -> F {
        self.data.iter().fold(F::zero(), |acc, &x| acc + x)
    }

    /// Arithmetic mean of all samples.
    pub fn mean(&self) -> F {
        self.sum() / crate::to_precision::<F, _>(self.len())
    }

    /// Largest sample value.
    pub fn max(&self) -> F {
        self.data.iter().fold(F::neg_infinity(), |acc, &x| acc.max(x))
    }

    /// Smallest sample value.
    pub fn min(&self) -> F {
        self.data.iter().fold(F::infinity(), |acc, &x| acc.min(x))
    }

    /// Index of the first largest sample.
    pub fn max_index(&self) -> usize {
        let mut best = 0;
        for (i, &x) in self.data.iter().enumerate() {
            if x > self.data[best] {
                best = i;
            }
        }
        best
    }

    /// Index of the first smallest sample.
    pub fn min_index(&self) -> usize {
        let mut best = 0;
        for (i, &x) in self.data.iter().enumerate() {
            if x < self.data[best] {
                best = i;
            }
        }
        best
    }

    /// Iterates over the samples.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.data.iter()
    }

    /// Iterates mutably over the samples.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.data.iter_mut()
    }

    /// Read-only `ndarray` view of the samples.
    pub fn view(&self) -> ArrayView1<'_, F> {
        self.data.view()
    }

    /// Borrows the backing array.
    pub const fn as_array(&self) -> &Array1<F> {
        &self.data
    }

    /// Copies the samples into a `Vec`.
    pub fn to_vec(&self) -> Vec<F> {
        self.data.to_vec()
    }
}

impl<F: RealFloat> fmt::Display for RealVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x:.6}")?;
        }
        Ok(())
    }
}

/// Reads sample `index` of a possibly absent vector under the [`DefaultPolicy`].
///
/// An absent vector is a null-reference violation; if the policy lets it
/// through, zero is returned.
#[track_caller]
pub fn get_sample<F: RealFloat>(vector: Option<&RealVector<F>>, index: usize) -> F {
    get_sample_with::<DefaultPolicy, F>(vector, index)
}

/// Writes sample `index` of a possibly absent vector under the [`DefaultPolicy`].
#[track_caller]
pub fn set_sample<F: RealFloat>(vector: Option<&mut RealVector<F>>, value: F, index: usize) {
    set_sample_with::<DefaultPolicy, F>(vector, value, index);
}

/// [`get_sample`] with an explicit policy.
#[track_caller]
pub fn get_sample_with<P: AccessPolicy, F: RealFloat>(
    vector: Option<&RealVector<F>>,
    index: usize,
) -> F {
    match vector {
        Some(v) => v.get_with::<P>(index),
        None => {
            report_null::<P>(index);
            F::zero()
        }
    }
}

/// [`set_sample`] with an explicit policy.
#[track_caller]
pub fn set_sample_with<P: AccessPolicy, F: RealFloat>(
    vector: Option<&mut RealVector<F>>,
    value: F,
    index: usize,
) {
    match vector {
        Some(v) => v.set_with::<P>(index, value),
        None => report_null::<P>(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Lenient, Strict};
    use approx_eq::assert_approx_eq;

    fn ramp(n: usize) -> RealVector<f32> {
        RealVector::from_vec((0..n).map(|i| i as f32 + 1.0).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_length() {
        assert!(RealVector::<f32>::new(0).is_err());
        assert!(RealVector::<f64>::from_vec(Vec::new()).is_err());
        let v = RealVector::<f64>::new(3).unwrap();
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_valid_access() {
        let mut v = RealVector::<f32>::new(10).unwrap();
        v.set(5, 5.0);
        assert_eq!(v.get(5), 5.0);
        v.set_with::<Strict>(9, 2.0);
        assert_eq!(v.get_with::<Strict>(9), 2.0);
    }

    #[test]
    fn test_lenient_out_of_bounds_returns_sentinel() {
        let mut v = ramp(10);
        assert_eq!(v.get_with::<Lenient>(10), 0.0);
        assert_eq!(v.get_with::<Lenient>(usize::MAX), 0.0);
        v.set_with::<Lenient>(10, 42.0);
        assert_eq!(v, ramp(10));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_strict_out_of_bounds_read_panics() {
        let v = ramp(10);
        let _ = v.get_with::<Strict>(10);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_strict_out_of_bounds_write_panics() {
        let mut v = ramp(10);
        v.set_with::<Strict>(11, 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_default_policy_is_strict_in_debug() {
        let v = ramp(4);
        let _ = v.get(4);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_default_policy_is_lenient_in_release() {
        let v = ramp(4);
        assert_eq!(v.get(4), 0.0);
    }

    #[test]
    fn test_null_reference_lenient() {
        assert_eq!(get_sample_with::<Lenient, f32>(None, 0), 0.0);
        set_sample_with::<Lenient, f32>(None, 1.0, 0);

        let mut v = ramp(3);
        set_sample_with::<Lenient, f32>(Some(&mut v), 9.0, 1);
        assert_eq!(get_sample_with::<Lenient, f32>(Some(&v), 1), 9.0);
        assert_eq!(get_sample(Some(&v), 0), 1.0);
        set_sample(Some(&mut v), 7.0, 2);
        assert_eq!(v.get(2), 7.0);
    }

    #[test]
    #[should_panic(expected = "absent vector reference")]
    fn test_null_reference_strict() {
        let _ = get_sample_with::<Strict, f64>(None, 0);
    }

    #[test]
    fn test_fill_operations() {
        let mut v = ramp(5);
        v.zeros();
        assert_eq!(v.sum(), 0.0);
        v.ones();
        assert_eq!(v.sum(), 5.0);
        v.set_all(0.25);
        assert_eq!(v.to_vec(), vec![0.25; 5]);
    }

    #[test]
    fn test_copy_and_weight() {
        let src = ramp(4);
        let mut dst = RealVector::<f32>::new(4).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);

        let mut short = RealVector::<f32>::new(3).unwrap();
        assert_eq!(
            short.copy_from(&src),
            Err(DescriptorError::dimension_mismatch(3, 4))
        );

        let weights = RealVector::from_vec(vec![0.0, 0.5, 1.0, 2.0]).unwrap();
        dst.weight(&weights).unwrap();
        assert_eq!(dst.to_vec(), vec![0.0, 1.0, 3.0, 8.0]);
        assert!(short.weight(&weights).is_err());
    }

    #[test]
    fn test_shift_and_reverse() {
        let mut v = RealVector::<f32>::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        v.shift();
        assert_eq!(v.to_vec(), vec![3.0, 4.0, 0.0, 1.0, 2.0]);
        v.ishift();
        assert_eq!(v.to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let mut even = RealVector::<f32>::from_vec(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        even.shift();
        assert_eq!(even.to_vec(), vec![2.0, 3.0, 0.0, 1.0]);

        even.reverse();
        assert_eq!(even.to_vec(), vec![1.0, 0.0, 3.0, 2.0]);
    }

    #[test]
    fn test_statistics() {
        let v = RealVector::<f64>::from_vec(vec![3.0, -1.0, 7.0, 7.0, 2.0]).unwrap();
        assert_approx_eq!(v.sum(), 18.0, 1e-12);
        assert_approx_eq!(v.mean(), 3.6, 1e-12);
        assert_eq!(v.max(), 7.0);
        assert_eq!(v.min(), -1.0);
        assert_eq!(v.max_index(), 2);
        assert_eq!(v.min_index(), 1);
    }

    #[test]
    fn test_display() {
        let v = RealVector::<f32>::from_vec(vec![1.0, 0.5]).unwrap();
        assert_eq!(v.to_string(), "1.000000 0.500000");
    }
}
