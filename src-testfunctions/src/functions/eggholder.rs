//! Eggholder test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1, array};

const LOWER: f64 = -512.0;
const UPPER: f64 = 512.0;

/// Eggholder function - highly multimodal, very challenging
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
///
/// Only the first two components are read.
pub fn eggholder<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - x2 - 47.0).abs().sqrt().sin()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Eggholder {
    domain: Domain,
    optimum: Option<GlobalOptimum>,
}

impl Eggholder {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("eggholder", dim, 2)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("eggholder: dim={}", dim);
        Ok(Self {
            domain,
            optimum: Self::optimum_for(dim),
        })
    }

    fn optimum_for(dim: usize) -> Option<GlobalOptimum> {
        (dim == 2).then(|| GlobalOptimum::Point(array![512.0, 404.2319]))
    }
}

impl Default for Eggholder {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            optimum: Self::optimum_for(2),
        }
    }
}

impl TestFunction for Eggholder {
    fn name(&self) -> &'static str {
        "eggholder"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn global_optimum(&self) -> Option<&GlobalOptimum> {
        self.optimum.as_ref()
    }

    fn known_minimum(&self) -> Option<f64> {
        self.optimum.as_ref().map(|_| -959.6407)
    }

    fn compute(&self, x: ArrayView1<f64>) -> f64 {
        eggholder(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eggholder_optimum() {
        let f = Eggholder::default();
        let value = f.evaluate(&array![512.0, 404.2319]).unwrap();
        assert!((value - (-959.6407)).abs() < 1e-3, "got {}", value);
    }

    #[test]
    fn test_eggholder_higher_dims_have_no_documented_optimum() {
        let f = Eggholder::new(3).unwrap();
        assert!(f.global_optimum().is_none());
        assert!(f.known_minimum().is_none());
        // extra axes are validated but unused
        let a = f.evaluate(&array![512.0, 404.2319, -500.0]).unwrap();
        let b = f.evaluate(&array![512.0, 404.2319, 500.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_eggholder_needs_two_components() {
        assert!(Eggholder::new(1).unwrap_err().is_invalid_dimension());
        assert!(Eggholder::default().evaluate(&array![512.1, 0.0]).is_err());
    }
}
