//! Levy test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::f64::consts::PI;

const LOWER: f64 = -5.0;
const UPPER: f64 = 10.0;

/// Levy function - multimodal function (generalized version)
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
///
/// The middle sum runs over the interior components `1..dim-1` only, so it is
/// empty for `dim <= 2`. With `dim == 1` the first and last terms both read `w_0`.
pub fn levy<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let n = x.len();
    let w: Vec<f64> = x.iter().map(|&xi| 1.0 + (xi - 1.0) / 4.0).collect();

    let first_term = (PI * w[0]).sin().powi(2);

    let middle_sum: f64 = w
        .iter()
        .skip(1)
        .take(n.saturating_sub(2))
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();

    let last_term = {
        let wn = w[n - 1];
        (wn - 1.0).powi(2) * (1.0 + (2.0 * PI * wn).sin().powi(2))
    };

    first_term + middle_sum + last_term
}

#[derive(Debug, Clone, PartialEq)]
pub struct Levy {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl Levy {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("levy", dim, 1)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("levy: dim={}", dim);
        Ok(Self {
            domain,
            optimum: GlobalOptimum::Point(Array1::ones(dim)),
        })
    }
}

impl Default for Levy {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            optimum: GlobalOptimum::Point(Array1::ones(2)),
        }
    }
}

impl TestFunction for Levy {
    fn name(&self) -> &'static str {
        "levy"
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
        levy(&x)
    }
}
