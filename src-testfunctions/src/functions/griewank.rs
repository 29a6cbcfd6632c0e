//! Griewank test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

const LOWER: f64 = -600.0;
const UPPER: f64 = 600.0;

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
///
/// No bounds check; use [`Griewank`] for validated evaluation.
pub fn griewank<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares / 4000.0 - product_cos + 1.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Griewank {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl Griewank {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("griewank", dim, 1)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("griewank: dim={}", dim);
        Ok(Self {
            domain,
            optimum: GlobalOptimum::Point(Array1::zeros(dim)),
        })
    }
}

impl Default for Griewank {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            optimum: GlobalOptimum::Point(Array1::zeros(2)),
        }
    }
}

impl TestFunction for Griewank {
    fn name(&self) -> &'static str {
        "griewank"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn global_optimum(&self) -> Option<&GlobalOptimum> {
        Some(&self.optimum)
    }

    fn known_minimum(&self) -> Option<f64> {
        Some(0.0)
    }

    fn compute(&self, x: ArrayView1<f64>) -> f64 {
        griewank(&x)
    }
}
