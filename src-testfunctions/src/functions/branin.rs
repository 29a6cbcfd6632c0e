//! Branin test function

use crate::domain::{Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::f64::consts::PI;

/// Branin function - multimodal with three global minima
/// Global minimum: f(x) = 0.397887 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let a = 1.0;
    let b = 5.1 / (4.0 * PI.powi(2));
    let c = 5.0 / PI;
    let r = 6.0;
    let s = 10.0;
    let t = 1.0 / (8.0 * PI);

    a * (x2 - b * x1.powi(2) + c * x1 - r).powi(2) + s * (1.0 - t) * x1.cos() + s
}

/// Branin, optionally embedded in a higher-dimensional box
///
/// Axes past the second are bounded to `[0, 1]` and ignored by the formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Branin {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl Branin {
    pub fn new(dim: usize) -> Result<Self> {
        require_dim("branin", dim, 2)?;
        log::trace!("branin: dim={}", dim);
        Ok(Self::build(dim))
    }

    fn build(dim: usize) -> Self {
        let mut lower = Array1::<f64>::zeros(dim);
        let mut upper = Array1::<f64>::ones(dim);
        lower[0] = -5.0;
        upper[0] = 10.0;
        lower[1] = 0.0;
        upper[1] = 15.0;

        // padded with zeros so each minimizer has `dim` components
        let points: Vec<Array1<f64>> = [(-PI, 12.275), (PI, 2.275), (9.42478, 2.475)]
            .iter()
            .map(|&(x1, x2)| {
                let mut p = Array1::<f64>::zeros(dim);
                p[0] = x1;
                p[1] = x2;
                p
            })
            .collect();

        Self {
            domain: Domain::from_parts(lower, upper),
            optimum: GlobalOptimum::Points(points),
        }
    }
}

impl Default for Branin {
    fn default() -> Self {
        Self::build(2)
    }
}

impl TestFunction for Branin {
    fn name(&self) -> &'static str {
        "branin"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn global_optimum(&self) -> Option<&GlobalOptimum> {
        Some(&self.optimum)
    }

    fn known_minimum(&self) -> Option<f64> {
        Some(0.397887)
    }

    fn compute(&self, x: ArrayView1<f64>) -> f64 {
        branin(&x)
    }
}
