//! Fixed-length real vector
//!
//! [`Vector`] is the value type the feature pipeline is written in. Its length
//! is fixed at construction and is never zero. Arithmetic is exposed as named
//! methods that return new vectors; vector-vector operations check that both
//! operands have the same length.
//!
//! Slicing follows "count from the end" rules for negative indices, the way
//! Python slices do: `slice_to(-1)` drops the last element and
//! `slice_from(-1)` keeps only the last element.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::autocorrelation;
use crate::{Error, Result};

/// A non-empty, fixed-length sequence of `f64`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a vector from owned data
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if `data` is empty.
    ///
    /// # Example
    /// ```
    /// use formant_acf::Vector;
    ///
    /// let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert!(Vector::new(Vec::new()).is_err());
    /// ```
    pub fn new(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::Construction(
                "vector dimension must be at least one".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Create a vector by copying a slice
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::new(data.to_vec())
    }

    /// Create a vector of `len` copies of `value`
    pub fn filled(len: usize, value: f64) -> Result<Self> {
        Self::new(vec![value; len])
    }

    /// Number of elements (always at least one)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; kept for parity with the standard collections
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Overwrite the element at `index`
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// The first element
    pub fn first(&self) -> f64 {
        self.data[0]
    }

    /// Borrow the elements
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Consume the vector and return its elements
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    // Elementwise vector-vector operations

    /// Elementwise product
    pub fn multiply(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise quotient
    pub fn divide(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a / b)
    }

    /// Elementwise sum
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    // Vector-scalar operations

    pub fn add_scalar(&self, value: f64) -> Vector {
        self.map(|a| a + value)
    }

    pub fn subtract_scalar(&self, value: f64) -> Vector {
        self.map(|a| a - value)
    }

    pub fn multiply_scalar(&self, value: f64) -> Vector {
        self.map(|a| a * value)
    }

    /// Divide every element by `value` (IEEE semantics, zero is not trapped)
    pub fn divide_scalar(&self, value: f64) -> Vector {
        self.map(|a| a / value)
    }

    // Reductions

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::MAX, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Inner product
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other.len())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|a| a * a).sum::<f64>().sqrt()
    }

    /// Keep a prefix of the vector
    ///
    /// A non-negative `index` keeps the first `index` elements (all of them if
    /// `index` exceeds the length). A negative `index` drops the last
    /// `|index|` elements.
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if the result would be empty.
    ///
    /// # Example
    /// ```
    /// use formant_acf::Vector;
    ///
    /// let v = Vector::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(v.slice_to(2).unwrap().as_slice(), &[1.0, 2.0]);
    /// assert_eq!(v.slice_to(-1).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn slice_to(&self, index: isize) -> Result<Vector> {
        let len = self.data.len();
        let end = if index >= 0 {
            (index as usize).min(len)
        } else {
            len.saturating_sub(index.unsigned_abs())
        };
        Vector::new(self.data[..end].to_vec())
    }

    /// Keep a suffix of the vector
    ///
    /// A non-negative `index` drops the first `index` elements. A negative
    /// `index` keeps only the last `|index|` elements (all of them if `|index|`
    /// exceeds the length).
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if the result would be empty.
    ///
    /// # Example
    /// ```
    /// use formant_acf::Vector;
    ///
    /// let v = Vector::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(v.slice_from(1).unwrap().as_slice(), &[2.0, 3.0, 4.0]);
    /// assert_eq!(v.slice_from(-1).unwrap().as_slice(), &[4.0]);
    /// ```
    pub fn slice_from(&self, index: isize) -> Result<Vector> {
        let len = self.data.len();
        let start = if index >= 0 {
            (index as usize).min(len)
        } else {
            len.saturating_sub(index.unsigned_abs())
        };
        Vector::new(self.data[start..].to_vec())
    }

    /// Full raw autocorrelation, length `2 * len() - 1`
    ///
    /// See [`crate::utils::autocorrelate`] for the lag layout.
    pub fn autocorrelate(&self) -> Vector {
        Vector {
            data: autocorrelation::autocorrelate(&self.data),
        }
    }

    fn check_len(&self, found: usize) -> Result<()> {
        if self.data.len() != found {
            return Err(Error::DimensionMismatch {
                expected: self.data.len(),
                found,
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, op: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        self.check_len(other.len())?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Vector {
        Vector {
            data: self.data.iter().map(|&a| op(a)).collect(),
        }
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Vector::new(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Renders as `[v0, v1, ...]`
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(data: &[f64]) -> Vector {
        Vector::from_slice(data).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Vector::new(Vec::new()), Err(Error::Construction(_))));
        assert!(matches!(Vector::filled(0, 1.0), Err(Error::Construction(_))));
    }

    #[test]
    fn test_add_then_subtract() {
        let a = v(&[1.5, -2.25, 3.0, 1e6, -7.125]);
        let b = v(&[0.1, 0.2, -0.3, 4.4, 1e-3]);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        for (x, y) in back.iter().zip(a.iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_elementwise_mismatch() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[1.0, 2.0]);
        for result in [a.add(&b), a.subtract(&b), a.multiply(&b), a.divide(&b)] {
            assert!(matches!(
                result,
                Err(Error::DimensionMismatch { expected: 3, found: 2 })
            ));
        }
        assert!(matches!(a.dot(&b), Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_elementwise_values() {
        let a = v(&[2.0, 6.0]);
        let b = v(&[4.0, 3.0]);
        assert_eq!(a.multiply(&b).unwrap().as_slice(), &[8.0, 18.0]);
        assert_eq!(a.divide(&b).unwrap().as_slice(), &[0.5, 2.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let a = v(&[1.0, -2.0, 4.0]);
        assert_eq!(a.add_scalar(1.0).as_slice(), &[2.0, -1.0, 5.0]);
        assert_eq!(a.subtract_scalar(1.0).as_slice(), &[0.0, -3.0, 3.0]);
        assert_eq!(a.multiply_scalar(-2.0).as_slice(), &[-2.0, 4.0, -8.0]);
        assert_eq!(a.divide_scalar(2.0).as_slice(), &[0.5, -1.0, 2.0]);
    }

    #[test]
    fn test_divide_by_zero_scalar_is_ieee() {
        let out = v(&[1.0, -1.0, 0.0]).divide_scalar(0.0);
        assert_eq!(out.get(0), Some(f64::INFINITY));
        assert_eq!(out.get(1), Some(f64::NEG_INFINITY));
        assert!(out.get(2).unwrap().is_nan());
    }

    #[test]
    fn test_reductions() {
        let a = v(&[3.0, -1.0, 4.0, 1.0, -5.0]);
        assert_relative_eq!(a.sum(), 2.0);
        assert_relative_eq!(a.mean(), 0.4);
        assert_relative_eq!(a.min(), -5.0);
        assert_relative_eq!(a.max(), 4.0);
    }

    #[test]
    fn test_dot_and_norm() {
        let a = v(&[1.0, 2.0, -3.0]);
        let b = v(&[0.5, -4.0, 2.0]);
        assert_relative_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        assert_relative_eq!(a.norm(), a.dot(&a).unwrap().sqrt(), epsilon = 1e-12);
        assert_relative_eq!(v(&[3.0, 4.0]).norm(), 5.0);
        assert!(v(&[0.0]).norm() >= 0.0);
    }

    #[test]
    fn test_slice_to() {
        let a = v(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.slice_to(-1).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(a.slice_to(-3).unwrap().as_slice(), &[1.0]);
        assert_eq!(a.slice_to(1).unwrap().as_slice(), &[1.0]);
        assert_eq!(a.slice_to(10).unwrap().len(), 4);
        assert!(matches!(a.slice_to(0), Err(Error::Construction(_))));
        assert!(matches!(a.slice_to(-4), Err(Error::Construction(_))));
        assert!(matches!(a.slice_to(-9), Err(Error::Construction(_))));
    }

    #[test]
    fn test_slice_from() {
        let a = v(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.slice_from(-1).unwrap().as_slice(), &[4.0]);
        assert_eq!(a.slice_from(-3).unwrap().as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(a.slice_from(-10).unwrap().len(), 4);
        assert_eq!(a.slice_from(0).unwrap().len(), 4);
        assert_eq!(a.slice_from(3).unwrap().as_slice(), &[4.0]);
        assert!(matches!(a.slice_from(4), Err(Error::Construction(_))));
        assert!(matches!(a.slice_from(7), Err(Error::Construction(_))));
    }

    #[test]
    fn test_get_set() {
        let mut a = v(&[0.0, 0.0]);
        a.set(1, 2.5).unwrap();
        assert_eq!(a.get(1), Some(2.5));
        assert_eq!(a.get(2), None);
        assert!(matches!(
            a.set(2, 1.0),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_autocorrelate_symmetric() {
        let a = v(&[0.5, -1.0, 2.0, 0.25, -0.75]);
        let c = a.autocorrelate();
        assert_eq!(c.len(), 2 * a.len() - 1);
        let mid = a.len() - 1;
        for j in 0..a.len() {
            assert_relative_eq!(c.get(mid - j).unwrap(), c.get(mid + j).unwrap());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(v(&[1.0, -0.5, 2.25]).to_string(), "[1, -0.5, 2.25]");
        assert_eq!(v(&[3.0]).to_string(), "[3]");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let a = v(&[1.0, 2.0]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[1.0,2.0]");
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Vector>("[]").is_err());
    }
}
