//! Michalewicz test function

use crate::domain::{Bound, Domain, GlobalOptimum, require_dim};
use crate::error::Result;
use crate::test_function::TestFunction;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1, array};
use std::f64::consts::PI;

const LOWER: f64 = 0.0;
const UPPER: f64 = PI;
/// Steepness of the valleys; larger values make the search harder
pub const MICHALEWICZ_STEEPNESS: f64 = 10.0;

/// Michalewicz function - N-dimensional multimodal with steep ridges
/// Documented 2D minimizer near (2.20, 1.57); no minimum value is tabulated
/// Bounds: x_i in [0, π]
pub fn michalewicz<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    michalewicz_with_steepness(x, MICHALEWICZ_STEEPNESS)
}

fn michalewicz_with_steepness<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>, m: f64) -> f64 {
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| xi.sin() * ((i as f64 + 1.0) * xi / PI).sin().powf(2.0 * m))
        .sum::<f64>()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Michalewicz {
    domain: Domain,
    m: f64,
    optimum: Option<GlobalOptimum>,
}

impl Michalewicz {
    pub fn new(dim: usize) -> Result<Self> {
        Self::with_bounds(dim, LOWER, UPPER)
    }

    pub fn with_bounds(
        dim: usize,
        lower: impl Into<Bound>,
        upper: impl Into<Bound>,
    ) -> Result<Self> {
        require_dim("michalewicz", dim, 1)?;
        let domain = Domain::uniform(dim, lower, upper)?;
        log::trace!("michalewicz: dim={}", dim);
        Ok(Self {
            domain,
            m: MICHALEWICZ_STEEPNESS,
            optimum: Self::optimum_for(dim),
        })
    }

    /// The exponent is `2 * m`
    pub fn steepness(&self) -> f64 {
        self.m
    }

    // only the two-dimensional minimizer is documented
    fn optimum_for(dim: usize) -> Option<GlobalOptimum> {
        (dim == 2).then(|| GlobalOptimum::Point(array![2.20, 1.57]))
    }
}

impl Default for Michalewicz {
    fn default() -> Self {
        Self {
            domain: Domain::filled(2, LOWER, UPPER),
            m: MICHALEWICZ_STEEPNESS,
            optimum: Self::optimum_for(2),
        }
    }
}

impl TestFunction for Michalewicz {
    fn name(&self) -> &'static str {
        "michalewicz"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn global_optimum(&self) -> Option<&GlobalOptimum> {
        self.optimum.as_ref()
    }

    fn known_minimum(&self) -> Option<f64> {
        None
    }

    fn compute(&self, x: ArrayView1<f64>) -> f64 {
        michalewicz_with_steepness(&x, self.m)
    }
}
