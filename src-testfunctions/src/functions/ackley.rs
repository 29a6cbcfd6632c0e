//! Ackley test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::f64::consts::{E, PI};

const LOWER: f64 = -32.768;
const UPPER: f64 = 32.768;

/// Ackley function - N-dimensional multimodal, nearly flat outer region
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let a = 20.0;
    let b = 0.2;
    let c = 2.0 * PI;
    let n = x.len() as f64;

    let norm = x.iter().map(|&xi| xi.powi(2)).sum::<f64>().sqrt();
    let mean_cos = x.iter().map(|&xi| (c * xi).cos()).sum::<f64>() / n;

    -a * (-b * norm / n.sqrt()).exp() - mean_cos.exp() + a + E
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ackley {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl Ackley {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("ackley", dim, 1)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("ackley: dim={}", dim);
        Ok(Self {
            domain,
            optimum: GlobalOptimum::Point(Array1::zeros(dim)),
        })
    }
}

impl Default for Ackley {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            optimum: GlobalOptimum::Point(Array1::zeros(2)),
        }
    }
}

impl TestFunction for Ackley {
    fn name(&self) -> &'static str {
        "ackley"
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
        ackley(&x)
    }
}
