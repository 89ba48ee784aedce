//! Audio mathematics utilities and conversion functions.
//!
//! Sizing helpers for transform buffers, pitch and frequency conversions,
//! bin/frequency mapping, phase unwrapping and a handful of frame-level level
//! measures. Every function here is total: inputs outside a function's natural
//! domain map to a documented sentinel instead of producing NaN or panicking.
//!
//! # Examples
//!
//! ```rust
//! use spectral_descriptors::audio_math::{hz_to_midi, midi_to_hz, next_power_of_two};
//!
//! assert_eq!(next_power_of_two(600), 1024);
//! let a4: f64 = midi_to_hz(69.0);
//! assert!((a4 - 440.0).abs() < 1e-9);
//! assert!((hz_to_midi(a4) - 69.0).abs() < 1e-9);
//! ```

use crate::{RealFloat, RealVector, to_precision};

// =============================================================================
// SIZING
// =============================================================================

/// Returns the smallest power of two greater than or equal to `n`.
///
/// Powers of two map to themselves; `0` maps to `1`. Values above the largest
/// representable power of two saturate to it.
///
/// ```rust
/// use spectral_descriptors::audio_math::next_power_of_two;
///
/// assert_eq!(next_power_of_two(17), 32);
/// assert_eq!(next_power_of_two(32), 32);
/// ```
pub const fn next_power_of_two(n: usize) -> usize {
    match n.checked_next_power_of_two() {
        Some(p) => p,
        None => 1 << (usize::BITS - 1),
    }
}

/// Returns `true` when `n` is a power of two. Zero is not.
pub const fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

// =============================================================================
// PITCH CONVERSIONS
// =============================================================================

/// Converts a MIDI note number to frequency in Hz.
///
/// `freq = 440 * 2^((midi - 69) / 12)`. Defined for every real input; very
/// large note numbers overflow to `+inf` and very small ones underflow to `0`.
///
/// ```rust
/// use spectral_descriptors::audio_math::midi_to_hz;
///
/// let c4: f32 = midi_to_hz(60.0);
/// assert!((c4 - 261.6256).abs() < 1e-3);
/// ```
pub fn midi_to_hz<F: RealFloat>(midi: F) -> F {
    let exponent = (midi - to_precision::<F, _>(69.0)) / to_precision::<F, _>(12.0);
    to_precision::<F, _>(440.0) * exponent.exp2()
}

/// Converts a frequency in Hz to a (fractional) MIDI note number.
///
/// `midi = 69 + 12 * log2(freq / 440)` for positive frequencies. Zero, negative
/// and NaN frequencies return the sentinel `0`.
pub fn hz_to_midi<F: RealFloat>(freq_hz: F) -> F {
    if freq_hz.is_nan() || freq_hz <= F::zero() {
        return F::zero();
    }
    to_precision::<F, _>(69.0)
        + to_precision::<F, _>(12.0) * (freq_hz / to_precision::<F, _>(440.0)).log2()
}

// =============================================================================
// BIN CONVERSIONS
// =============================================================================

/// Converts an FFT bin index to its centre frequency in Hz.
///
/// Returns `0` when `fft_size` is not positive.
pub fn bin_to_hz<F: RealFloat>(bin: F, sample_rate: F, fft_size: F) -> F {
    if fft_size <= F::zero() {
        return F::zero();
    }
    (bin * sample_rate / fft_size).max(F::zero())
}

/// Converts a frequency in Hz to a fractional FFT bin index.
///
/// Returns `0` when `sample_rate` is not positive.
pub fn hz_to_bin<F: RealFloat>(freq_hz: F, sample_rate: F, fft_size: F) -> F {
    if sample_rate <= F::zero() {
        return F::zero();
    }
    (freq_hz * fft_size / sample_rate).max(F::zero())
}

/// Converts an FFT bin index to a MIDI note number.
pub fn bin_to_midi<F: RealFloat>(bin: F, sample_rate: F, fft_size: F) -> F {
    hz_to_midi(bin_to_hz(bin, sample_rate, fft_size))
}

/// Converts a MIDI note number to a fractional FFT bin index.
pub fn midi_to_bin<F: RealFloat>(midi: F, sample_rate: F, fft_size: F) -> F {
    hz_to_bin(midi_to_hz(midi), sample_rate, fft_size)
}

// =============================================================================
// PHASE
// =============================================================================

/// Wraps a phase value into `(-π, π]`.
///
/// Non-finite input is returned unchanged.
pub fn unwrap_2pi<F: RealFloat>(phase: F) -> F {
    if !phase.is_finite() {
        return phase;
    }
    let pi = F::PI();
    let two_pi = pi + pi;
    let mut wrapped = phase - two_pi * ((phase + pi) / two_pi).floor();
    // floor() places the result in [-π, π); fold the lower edge onto +π.
    if wrapped <= -pi {
        wrapped = wrapped + two_pi;
    }
    wrapped
}

// =============================================================================
// LEVEL MEASURES
// =============================================================================

/// Mean power of the vector, `Σ x² / N`.
pub fn level_lin<F: RealFloat>(vector: &RealVector<F>) -> F {
    let energy = vector.iter().fold(F::zero(), |acc, &x| acc + x * x);
    energy / to_precision::<F, _>(vector.len())
}

/// Sound pressure level of the vector in dB, `10 * log10(level_lin)`.
///
/// Silence is floored at -200 dB rather than returning `-inf`.
pub fn db_spl<F: RealFloat>(vector: &RealVector<F>) -> F {
    let level = level_lin(vector);
    if level <= F::zero() {
        return to_precision::<F, _>(-200.0);
    }
    to_precision::<F, _>(10.0) * level.log10()
}

/// Returns `true` when the vector's level is below `threshold_db`.
pub fn is_silence<F: RealFloat>(vector: &RealVector<F>, threshold_db: F) -> bool {
    db_spl(vector) < threshold_db
}

/// Fraction of adjacent sample pairs whose signs differ.
///
/// A pair counts as a crossing when one sample is negative and the other is
/// non-negative. Single-sample vectors have a rate of zero.
pub fn zero_crossing_rate<F: RealFloat>(vector: &RealVector<F>) -> F {
    if vector.len() < 2 {
        return F::zero();
    }
    let samples = vector.to_vec();
    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] < F::zero()) != (pair[1] < F::zero()))
        .count();
    to_precision::<F, _>(crossings) / to_precision::<F, _>(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(15), 16);
        assert_eq!(next_power_of_two(17), 32);
        assert_eq!(next_power_of_two(31), 32);
        assert_eq!(next_power_of_two(32), 32);
        assert_eq!(next_power_of_two(33), 64);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(usize::MAX), 1 << (usize::BITS - 1));

        for n in 1..=4096usize {
            let p = next_power_of_two(n);
            assert!(is_power_of_two(p));
            assert!(p >= n);
            assert!(p / 2 < n);
        }
    }

    #[test]
    fn test_midi_to_hz_reference_points() {
        assert_approx_eq!(midi_to_hz(69.0f64), 440.0, 1e-9);
        assert_approx_eq!(midi_to_hz(81.0f64), 880.0, 1e-9);
        assert_approx_eq!(midi_to_hz(57.0f64), 220.0, 1e-9);
        assert_approx_eq!(midi_to_hz(60.0f64), 261.625_565_3, 1e-6);
    }

    #[test]
    fn test_midi_to_hz_is_total() {
        let mut midi = -123.0f64;
        while midi < 400.0 {
            let f = midi_to_hz(midi);
            assert!(!f.is_nan());
            assert!(f >= 0.0);
            midi += 20.0;
        }
        for midi in [-69.5f64, -169.5, 140.0, 0.0, 8.2e10, -5.0e10] {
            let f = midi_to_hz(midi);
            assert!(!f.is_nan(), "midi_to_hz({midi}) = {f}");
            assert!(f >= 0.0);
        }
        // monotonic
        assert!(midi_to_hz(10.0f32) < midi_to_hz(10.5f32));
    }

    #[test]
    fn test_hz_to_midi_is_total() {
        let mut freq = 0.0f64;
        while freq < 30000.0 {
            let m = hz_to_midi(freq);
            assert!(m.is_finite());
            freq += 440.0;
        }
        for freq in [69.5f64, -69.5, -169.5, 140.0, 0.0, 8.2e10, -5.0] {
            assert!(hz_to_midi(freq).is_finite(), "hz_to_midi({freq})");
        }
        assert_eq!(hz_to_midi(0.0f32), 0.0);
        assert_eq!(hz_to_midi(-5.0f32), 0.0);
        assert_eq!(hz_to_midi(f64::NAN), 0.0);
    }

    #[test]
    fn test_midi_hz_are_inverses() {
        for midi in [0.0f64, 12.5, 45.0, 69.0, 100.25, 127.0] {
            assert_approx_eq!(hz_to_midi(midi_to_hz(midi)), midi, 1e-9);
        }
        for freq in [20.0f64, 69.5, 440.0, 1000.0, 15000.0] {
            assert_approx_eq!(midi_to_hz(hz_to_midi(freq)), freq, 1e-6);
        }
    }

    #[test]
    fn test_bin_conversions() {
        assert_approx_eq!(bin_to_hz(1.0f64, 44100.0, 1024.0), 43.06640625, 1e-9);
        assert_approx_eq!(hz_to_bin(43.06640625f64, 44100.0, 1024.0), 1.0, 1e-9);
        assert_eq!(bin_to_hz(1.0f64, 44100.0, 0.0), 0.0);
        assert_eq!(hz_to_bin(440.0f64, 0.0, 1024.0), 0.0);

        let bin = midi_to_bin(69.0f64, 44100.0, 2048.0);
        assert_approx_eq!(bin_to_midi(bin, 44100.0, 2048.0), 69.0, 1e-9);
    }

    #[test]
    fn test_unwrap_2pi() {
        assert_approx_eq!(unwrap_2pi(0.5f64), 0.5, 1e-12);
        assert_approx_eq!(unwrap_2pi(3.0 * PI - 0.1), PI - 0.1, 1e-9);
        assert_approx_eq!(unwrap_2pi(-PI), PI, 1e-12);
        assert_approx_eq!(unwrap_2pi(PI), PI, 1e-12);
        assert_approx_eq!(unwrap_2pi(2.0 * PI + 0.25), 0.25, 1e-9);
        assert_approx_eq!(unwrap_2pi(-2.0 * PI - 0.25), -0.25, 1e-9);
        for k in -50..50 {
            let w = unwrap_2pi(k as f64 * 0.7);
            assert!(w > -PI && w <= PI, "{w}");
        }
        assert!(unwrap_2pi(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_level_measures() {
        let silent = RealVector::<f64>::new(8).unwrap();
        assert_eq!(level_lin(&silent), 0.0);
        assert_eq!(db_spl(&silent), -200.0);
        assert!(is_silence(&silent, -90.0));

        let loud = RealVector::<f64>::from_vec(vec![1.0, -1.0, 1.0, -1.0]).unwrap();
        assert_approx_eq!(level_lin(&loud), 1.0, 1e-12);
        assert!(db_spl(&loud).abs() < 1e-12);
        assert!(!is_silence(&loud, -90.0));
        assert_approx_eq!(zero_crossing_rate(&loud), 0.75, 1e-12);

        let single = RealVector::<f32>::from_vec(vec![1.0]).unwrap();
        assert_eq!(zero_crossing_rate(&single), 0.0);
    }
}
