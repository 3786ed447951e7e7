//! Direct-sum autocorrelation
//!
//! Computes the full autocorrelation of a real sequence by explicit double
//! summation, with the same lag layout as `numpy.correlate(x, x, "full")`.
//! No transform is involved, so the result is exact up to floating-point
//! summation order and costs O(N²).

/// Compute the full raw autocorrelation of `x`
///
/// The output has length `2N - 1`. Index `N - 1` holds lag zero, index
/// `N - 1 + j` holds lag `+j` and index `N - 1 - j` holds lag `-j`. Since the
/// input is real the two halves mirror each other.
///
/// An empty input yields an empty output.
///
/// # Example
/// ```
/// use formant_acf::utils::autocorrelate;
///
/// let c = autocorrelate(&[1.0, 2.0, 3.0]);
/// assert_eq!(c, vec![3.0, 8.0, 14.0, 8.0, 3.0]);
/// ```
pub fn autocorrelate(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let mut c = vec![0.0; 2 * n - 1];

    // Negative lags: c[k] pairs the first k+1 samples with the last k+1
    for k in 0..n - 1 {
        let mut acc = 0.0;
        for i in 0..=k {
            acc += x[i] * x[n - k + i - 1];
        }
        c[k] = acc;
    }

    // Positive lags
    for lag in 1..n {
        let mut acc = 0.0;
        for i in 0..n - lag {
            acc += x[lag + i] * x[i];
        }
        c[n - 1 + lag] = acc;
    }

    // Zero lag (signal energy)
    c[n - 1] = x.iter().map(|v| v * v).sum();

    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_output_length() {
        for n in 1..20 {
            let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.3 - 1.0).collect();
            assert_eq!(autocorrelate(&x).len(), 2 * n - 1);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(autocorrelate(&[]).is_empty());
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(autocorrelate(&[-3.0]), vec![9.0]);
    }

    #[test]
    fn test_symmetry() {
        let x = [0.3, -1.2, 4.5, 2.2, -0.7, 0.0, 1.9];
        let c = autocorrelate(&x);
        let center = x.len() - 1;
        for j in 0..x.len() {
            assert_relative_eq!(c[center - j], c[center + j], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_definition() {
        let x = [1.0, -2.0, 0.5, 3.0];
        let c = autocorrelate(&x);

        // lag 0
        assert_relative_eq!(c[3], 1.0 + 4.0 + 0.25 + 9.0, epsilon = 1e-12);
        // lag 1: x1*x0 + x2*x1 + x3*x2
        assert_relative_eq!(c[4], -2.0 - 1.0 + 1.5, epsilon = 1e-12);
        // lag 3: x3*x0
        assert_relative_eq!(c[6], 3.0, epsilon = 1e-12);
        assert_relative_eq!(c[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_lag_is_maximum() {
        let x: Vec<f64> = (0..32).map(|i| (i as f64 * 0.4).sin()).collect();
        let c = autocorrelate(&x);
        let zero_lag = c[x.len() - 1];
        assert!(c.iter().all(|&v| v.abs() <= zero_lag + 1e-12));
    }
}
