//! Window functions for frame analysis
//!
//! Frames are tapered with a symmetric Hann window before autocorrelation so
//! that the frame edges do not contribute a step discontinuity. The window
//! here is the "symmetric" variant (zero at both ends), identical to
//! `numpy.hanning`.

use std::f64::consts::PI;

use crate::{Error, Result, Vector};

/// Generate a symmetric Hann window of `bins` samples
///
/// `w[i] = sin(π·i / (bins - 1))²`, which is zero at both endpoints and one at
/// the center for odd `bins`.
///
/// # Errors
/// Returns [`Error::Construction`] for `bins < 2`, where the formula is
/// undefined.
///
/// # Example
/// ```
/// use formant_acf::window::hann;
///
/// let w = hann(5).unwrap();
/// assert!(w.first().abs() < 1e-12);
/// assert!((w.get(2).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn hann(bins: usize) -> Result<Vector> {
    if bins < 2 {
        return Err(Error::Construction(format!(
            "Hann window needs at least 2 bins, got {}",
            bins
        )));
    }

    let denom = (bins - 1) as f64;
    let coefficients = (0..bins)
        .map(|i| {
            let s = (PI * i as f64 / denom).sin();
            s * s
        })
        .collect();

    Vector::new(coefficients)
}

/// Apply `window` to `frame` by elementwise multiplication
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if the lengths differ.
pub fn apply(window: &Vector, frame: &Vector) -> Result<Vector> {
    window.multiply(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hann_endpoints_are_zero() {
        for bins in 2..64 {
            let w = hann(bins).unwrap();
            assert_eq!(w.len(), bins);
            assert_relative_eq!(w.first(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(w.get(bins - 1).unwrap(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hann_symmetric_and_bounded() {
        let w = hann(100).unwrap();
        for i in 0..50 {
            assert_relative_eq!(w.get(i).unwrap(), w.get(99 - i).unwrap(), epsilon = 1e-12);
        }
        assert!(w.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(w.get(49).unwrap() > 0.99);
    }

    #[test]
    fn test_hann_matches_raised_cosine() {
        // sin² form equals 0.5 - 0.5·cos(2πi/(N-1))
        let bins = 8;
        let w = hann(bins).unwrap();
        for i in 0..bins {
            let expected = 0.5 - 0.5 * (2.0 * PI * i as f64 / (bins - 1) as f64).cos();
            assert_relative_eq!(w.get(i).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hann_too_short() {
        assert!(matches!(hann(0), Err(Error::Construction(_))));
        assert!(matches!(hann(1), Err(Error::Construction(_))));
    }

    #[test]
    fn test_apply() {
        let w = hann(4).unwrap();
        let frame = Vector::filled(4, 2.0).unwrap();
        let out = apply(&w, &frame).unwrap();
        for i in 0..4 {
            assert_relative_eq!(out.get(i).unwrap(), 2.0 * w.get(i).unwrap());
        }

        let short = Vector::filled(3, 1.0).unwrap();
        assert!(matches!(
            apply(&w, &short),
            Err(Error::DimensionMismatch { expected: 4, found: 3 })
        ));
    }
}
