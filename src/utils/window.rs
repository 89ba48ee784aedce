//! Window functions for spectral analysis.
//!
//! Different window types provide different trade-offs between frequency
//! resolution and spectral leakage. Windows can be requested by name; unknown
//! names never fail, they fall back to [`WindowType::default`] and log a
//! warning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DescriptorResult, RealFloat, RealVector, to_precision};

/// Window shapes available through [`window`] and [`set_window`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    /// Flat window (no tapering) - best frequency resolution, highest leakage.
    Rectangle,
    /// Hamming window, `0.54 - 0.46 cos(2πn/N)`.
    Hamming,
    /// Hanning window, `0.5 - 0.5 cos(2πn/N)`.
    Hanning,
    /// Periodic ("zero-phase") Hann window, `0.5 (1 - cos(2πn/N))`.
    #[default]
    #[serde(rename = "hanningz")]
    HanningZ,
    /// Blackman window - low leakage, wider main lobe.
    Blackman,
    /// Four-term Blackman-Harris window.
    BlackmanHarris,
    /// Gaussian window with a standard deviation of 0.3 half-widths.
    Gaussian,
    /// Welch (parabolic) window.
    Welch,
    /// Parzen (triangular) window.
    Parzen,
}

impl WindowType {
    /// All supported window shapes.
    pub const ALL: [WindowType; 9] = [
        WindowType::Rectangle,
        WindowType::Hamming,
        WindowType::Hanning,
        WindowType::HanningZ,
        WindowType::Blackman,
        WindowType::BlackmanHarris,
        WindowType::Gaussian,
        WindowType::Welch,
        WindowType::Parzen,
    ];

    /// Canonical short name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            WindowType::Rectangle => "rectangle",
            WindowType::Hamming => "hamming",
            WindowType::Hanning => "hanning",
            WindowType::HanningZ => "hanningz",
            WindowType::Blackman => "blackman",
            WindowType::BlackmanHarris => "blackman_harris",
            WindowType::Gaussian => "gaussian",
            WindowType::Welch => "welch",
            WindowType::Parzen => "parzen",
        }
    }

    /// Resolves `name`, falling back to the default shape for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(
                window = name,
                fallback = WindowType::default().name(),
                "unknown window type, using default"
            );
            WindowType::default()
        })
    }

    /// Coefficient `n` of a window of `size` samples.
    fn coefficient<F: RealFloat>(&self, n: usize, size: usize) -> F {
        let two_pi = F::PI() + F::PI();
        let i = to_precision::<F, _>(n);
        let len = to_precision::<F, _>(size);
        // Symmetric windows divide by N - 1, which degenerates for N == 1.
        let span = to_precision::<F, _>(size.saturating_sub(1).max(1));
        let c = |x: f64| to_precision::<F, _>(x);

        match self {
            WindowType::Rectangle => F::one(),
            WindowType::Hamming => c(0.54) - c(0.46) * (two_pi * i / len).cos(),
            WindowType::Hanning => c(0.5) - c(0.5) * (two_pi * i / len).cos(),
            WindowType::HanningZ => c(0.5) * (F::one() - (two_pi * i / len).cos()),
            WindowType::Blackman => {
                c(0.42) - c(0.50) * (two_pi * i / span).cos()
                    + c(0.08) * (c(2.0) * two_pi * i / span).cos()
            }
            WindowType::BlackmanHarris => {
                c(0.35875) - c(0.48829) * (two_pi * i / span).cos()
                    + c(0.14128) * (c(2.0) * two_pi * i / span).cos()
                    - c(0.01168) * (c(3.0) * two_pi * i / span).cos()
            }
            WindowType::Gaussian => {
                let centre = c(0.5) * span;
                let sigma = c(0.3) * centre;
                let x = (i - centre) / sigma;
                (c(-0.5) * x * x).exp()
            }
            WindowType::Welch => {
                let x = (c(2.0) * i - len) / (len + F::one());
                F::one() - x * x
            }
            WindowType::Parzen => {
                let x = (c(2.0) * i - len) / (len + F::one());
                F::one() - x.abs()
            }
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown window name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown window type '{0}'")]
pub struct UnknownWindow(pub String);

impl FromStr for WindowType {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(WindowType::default()),
            other => WindowType::ALL
                .into_iter()
                .find(|w| w.name() == other)
                .ok_or_else(|| UnknownWindow(other.to_string())),
        }
    }
}

/// Creates a window of `length` samples with the shape called `name`.
///
/// Unknown names fall back to [`WindowType::default`].
///
/// # Errors
/// Returns [`crate::ParameterError`] only when `length` is zero.
///
/// ```rust
/// use spectral_descriptors::window::window;
///
/// let w = window::<f32>("parzen", 8).unwrap();
/// assert_eq!(w.len(), 8);
/// let fallback = window::<f32>("no-such-window", 8).unwrap();
/// assert_eq!(fallback.len(), 8);
/// ```
pub fn window<F: RealFloat>(name: &str, length: usize) -> DescriptorResult<RealVector<F>> {
    let mut win = RealVector::new(length)?;
    set_window(&mut win, WindowType::from_name_or_default(name));
    Ok(win)
}

/// Fills `vector` with the coefficients of `window_type`.
pub fn set_window<F: RealFloat>(vector: &mut RealVector<F>, window_type: WindowType) {
    let size = vector.len();
    for (n, w) in vector.iter_mut().enumerate() {
        *w = window_type.coefficient(n, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_window_lengths() {
        for name in ["default", "rectangle", "parzen", "blackman_harris", "bogus", ""] {
            for len in [1usize, 2, 8, 16, 1024] {
                let w = window::<f32>(name, len).unwrap();
                assert_eq!(w.len(), len);
                assert!(w.iter().all(|x| x.is_finite()), "{name} {len}");
            }
        }
        assert!(window::<f64>("hanning", 0).is_err());
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        let fallback = window::<f64>("not-a-window", 16).unwrap();
        let default = window::<f64>("default", 16).unwrap();
        assert_eq!(fallback, default);
        let hanningz = window::<f64>("hanningz", 16).unwrap();
        assert_eq!(default, hanningz);
    }

    #[test]
    fn test_rectangle_is_flat() {
        let mut w = RealVector::<f32>::new(16).unwrap();
        set_window(&mut w, WindowType::Rectangle);
        assert!(w.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_hanningz_shape() {
        let w = window::<f64>("hanningz", 8).unwrap();
        assert!(w.get(0).abs() < 1e-12);
        assert_approx_eq!(w.get(4), 1.0, 1e-12);
        assert_approx_eq!(w.get(2), w.get(6), 1e-12);
    }

    #[test]
    fn test_parzen_values_are_bounded() {
        let w = window::<f64>("parzen", 8).unwrap();
        for &x in w.iter() {
            assert!((0.0..=1.0).contains(&x));
        }
        assert_approx_eq!(w.get(4), 1.0, 1e-12);
    }

    #[test]
    fn test_blackman_symmetry() {
        for ty in [WindowType::Blackman, WindowType::BlackmanHarris, WindowType::Gaussian] {
            let mut w = RealVector::<f64>::new(9).unwrap();
            set_window(&mut w, ty);
            for n in 0..9 {
                assert!((w.get(n) - w.get(8 - n)).abs() < 1e-9, "{ty}");
            }
            assert_approx_eq!(w.get(4), 1.0, 1e-6);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for ty in WindowType::ALL {
            assert_eq!(ty.name().parse::<WindowType>(), Ok(ty));
            assert_eq!(ty.to_string(), ty.name());
        }
        assert_eq!("default".parse::<WindowType>(), Ok(WindowType::HanningZ));
        assert_eq!(
            "triangle".parse::<WindowType>(),
            Err(UnknownWindow("triangle".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        let ty: WindowType = serde_json::from_str("\"blackman_harris\"").unwrap();
        assert_eq!(ty, WindowType::BlackmanHarris);
        let ty: WindowType = serde_json::from_str("\"hanningz\"").unwrap();
        assert_eq!(ty, WindowType::HanningZ);
    }
}
