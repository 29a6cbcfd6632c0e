//! Search domains and known optima
//!
//! A [`Domain`] holds per-axis lower and upper bounds. Most functions use the same
//! interval on every axis, built with [`Domain::uniform`] which broadcasts a scalar
//! [`Bound`] to `dim` entries. Bukin N.6 and Branin hardcode asymmetric per-axis
//! vectors instead.

use crate::error::{Error, InputError, Result};
use ndarray::{Array1, ArrayView1, ArrayViewD, Ix1};
use serde::{Deserialize, Serialize};

/// A bound given either as one value for every axis or as one value per axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Scalar(value)
    }
}

impl From<Vec<f64>> for Bound {
    fn from(values: Vec<f64>) -> Self {
        Bound::Vector(values)
    }
}

impl From<&[f64]> for Bound {
    fn from(values: &[f64]) -> Self {
        Bound::Vector(values.to_vec())
    }
}

impl From<Array1<f64>> for Bound {
    fn from(values: Array1<f64>) -> Self {
        Bound::Vector(values.to_vec())
    }
}

impl Bound {
    /// Broadcast to a vector of length `dim`
    ///
    /// A scalar is repeated on every axis. A vector is accepted only if it already has
    /// `dim` entries.
    pub fn broadcast(&self, dim: usize) -> Result<Array1<f64>> {
        match self {
            Bound::Scalar(value) => Ok(Array1::from_elem(dim, *value)),
            Bound::Vector(values) if values.len() == dim => Ok(Array1::from_vec(values.clone())),
            Bound::Vector(values) => Err(Error::InvalidBounds(format!(
                "bound vector has {} entries but the function has {} dimensions",
                values.len(),
                dim
            ))),
        }
    }
}

/// Per-axis inclusive box `[lower[i], upper[i]]`
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl Domain {
    /// Build a domain from explicit per-axis bounds
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Error::InvalidBounds(format!(
                "lower bound has {} entries, upper bound has {}",
                lower.len(),
                upper.len()
            )));
        }
        if lower.is_empty() {
            return Err(Error::InvalidBounds("domain has no axes".to_string()));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            // negated so that NaN bounds are rejected too
            if !(lo <= hi) {
                return Err(Error::InvalidBounds(format!(
                    "axis {}: lower bound {} exceeds upper bound {}",
                    i, lo, hi
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Build a `dim`-dimensional domain, broadcasting scalar bounds
    pub fn uniform(dim: usize, lower: impl Into<Bound>, upper: impl Into<Bound>) -> Result<Self> {
        Self::new(lower.into().broadcast(dim)?, upper.into().broadcast(dim)?)
    }

    /// Hardcoded domains of the fixed-shape functions
    pub(crate) fn from_parts(lower: Array1<f64>, upper: Array1<f64>) -> Self {
        debug_assert!(lower.len() == upper.len());
        Self { lower, upper }
    }

    /// Same interval on every axis; callers guarantee `dim >= 1` and `lower <= upper`
    pub(crate) fn filled(dim: usize, lower: f64, upper: f64) -> Self {
        debug_assert!(dim >= 1 && lower <= upper);
        Self {
            lower: Array1::from_elem(dim, lower),
            upper: Array1::from_elem(dim, upper),
        }
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Bounds as `(min, max)` pairs, one per axis
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| (lo, hi))
            .collect()
    }

    /// True if `x` has the right length and every component lies inside its interval
    pub fn contains(&self, x: ArrayView1<f64>) -> bool {
        x.len() == self.dim() && self.first_violation(x).is_none()
    }

    /// Validate an input before evaluation
    ///
    /// Checks run in a fixed order: element count, then rank, then bounds. The
    /// first component outside its interval is reported.
    pub fn check_input<'a>(&self, x: ArrayViewD<'a, f64>) -> Result<ArrayView1<'a, f64>> {
        if x.len() != self.dim() {
            return Err(InputError::LengthMismatch {
                expected: self.dim(),
                actual: x.len(),
            }
            .into());
        }
        let ndim = x.ndim();
        let x = x
            .into_dimensionality::<Ix1>()
            .map_err(|_| InputError::NotOneDimensional { ndim })?;
        if let Some(violation) = self.first_violation(x.view()) {
            return Err(violation.into());
        }
        Ok(x)
    }

    fn first_violation(&self, x: ArrayView1<f64>) -> Option<InputError> {
        x.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .enumerate()
            .find(|&(_, (&xi, (&lo, &hi)))| !(lo <= xi && xi <= hi))
            .map(|(index, (&value, (&lower, &upper)))| InputError::OutOfBounds {
                index,
                value,
                lower,
                upper,
            })
    }
}

/// Refuse construction below the minimum number of axes a formula reads
pub(crate) fn require_dim(function: &'static str, dim: usize, min: usize) -> Result<()> {
    if dim < min {
        return Err(Error::InvalidDimension {
            function,
            dim,
            reason: if min == 1 {
                "at least one dimension is required"
            } else {
                "the formula reads the first two components"
            },
        });
    }
    Ok(())
}

/// Known location(s) of the global minimum
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalOptimum {
    Point(Array1<f64>),
    /// Several equivalent minimizers (Branin has three)
    Points(Vec<Array1<f64>>),
}

impl GlobalOptimum {
    pub fn points(&self) -> &[Array1<f64>] {
        match self {
            GlobalOptimum::Point(p) => std::slice::from_ref(p),
            GlobalOptimum::Points(ps) => ps,
        }
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Euclidean distance from `x` to the nearest known minimizer
    ///
    /// Returns `f64::INFINITY` when no minimizer has the same length as `x`.
    pub fn distance(&self, x: ArrayView1<f64>) -> f64 {
        self.points()
            .iter()
            .filter(|p| p.len() == x.len())
            .map(|p| {
                p.iter()
                    .zip(x.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// True if `x` lies within `tolerance` (Euclidean) of a known minimizer
    pub fn is_near(&self, x: ArrayView1<f64>, tolerance: f64) -> bool {
        self.distance(x) <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_scalar_bounds_broadcast() {
        let domain = Domain::uniform(3, -5.0, 10.0).unwrap();
        assert_eq!(domain.dim(), 3);
        assert_eq!(domain.lower(), &array![-5.0, -5.0, -5.0]);
        assert_eq!(domain.upper(), &array![10.0, 10.0, 10.0]);
        assert_eq!(domain.to_pairs(), vec![(-5.0, 10.0); 3]);
    }

    #[test]
    fn test_vector_bounds_must_match_dim() {
        let domain = Domain::uniform(2, vec![-1.0, 0.0], 1.0).unwrap();
        assert_eq!(domain.lower(), &array![-1.0, 0.0]);

        let err = Domain::uniform(3, vec![-1.0, 0.0], 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds(_)));
    }

    #[test]
    fn test_inverted_or_nan_bounds_rejected() {
        assert!(Domain::new(array![1.0], array![0.0]).is_err());
        assert!(Domain::new(array![f64::NAN], array![0.0]).is_err());
        assert!(Domain::new(array![0.0, 0.0], array![1.0]).is_err());
        // degenerate interval is allowed
        assert!(Domain::new(array![2.0], array![2.0]).is_ok());
    }

    #[test]
    fn test_check_input_order() {
        let domain = Domain::uniform(4, -1.0, 1.0).unwrap();

        // wrong count wins over wrong rank
        let x = Array2::<f64>::zeros((3, 3)).into_dyn();
        assert_eq!(
            domain.check_input(x.view()).unwrap_err(),
            Error::InvalidInput(InputError::LengthMismatch {
                expected: 4,
                actual: 9
            })
        );

        // right count, wrong rank
        let x = Array2::<f64>::zeros((2, 2)).into_dyn();
        assert_eq!(
            domain.check_input(x.view()).unwrap_err(),
            Error::InvalidInput(InputError::NotOneDimensional { ndim: 2 })
        );

        let x = array![0.0, 0.5, 2.0, -3.0].into_dyn();
        assert_eq!(
            domain.check_input(x.view()).unwrap_err(),
            Error::InvalidInput(InputError::OutOfBounds {
                index: 2,
                value: 2.0,
                lower: -1.0,
                upper: 1.0
            })
        );

        // bounds are inclusive
        let x = array![-1.0, 1.0, 0.0, 0.0].into_dyn();
        assert_eq!(domain.check_input(x.view()).unwrap().len(), 4);
    }

    #[test]
    fn test_nan_component_is_out_of_bounds() {
        let domain = Domain::uniform(2, -1.0, 1.0).unwrap();
        let x = array![0.0, f64::NAN];
        assert!(!domain.contains(x.view()));
        assert!(domain.check_input(x.view().into_dyn()).is_err());
    }

    #[test]
    fn test_optimum_distance() {
        let opt = GlobalOptimum::Points(vec![array![0.0, 0.0], array![3.0, 4.0]]);
        assert_eq!(opt.len(), 2);
        assert!((opt.distance(array![3.0, 5.0].view()) - 1.0).abs() < 1e-12);
        assert!(opt.is_near(array![0.1, 0.0].view(), 0.2));
        assert_eq!(opt.distance(array![1.0].view()), f64::INFINITY);

        let single = GlobalOptimum::Point(array![1.0, 1.0]);
        assert_eq!(single.points().len(), 1);
    }
}
