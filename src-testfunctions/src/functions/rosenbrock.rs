//! Rosenbrock test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

const LOWER: f64 = -5.0;
const UPPER: f64 = 10.0;

/// Rosenbrock function - N-dimensional banana valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
pub fn rosenbrock<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| 100.0 * (xnext - xi.powi(2)).powi(2) + (xi - 1.0).powi(2))
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rosenbrock {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl Rosenbrock {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("rosenbrock", dim, 1)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("rosenbrock: dim={}", dim);
        Ok(Self {
            domain,
            optimum: GlobalOptimum::Point(Array1::ones(dim)),
        })
    }
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            optimum: GlobalOptimum::Point(Array1::ones(2)),
        }
    }
}

impl TestFunction for Rosenbrock {
    fn name(&self) -> &'static str {
        "rosenbrock"
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
        rosenbrock(&x)
    }
}
