//! Shared contract of every benchmark function

use crate::domain::{Domain, GlobalOptimum};
use crate::error::Result;
use ndarray::{Array1, ArrayView1, ArrayViewD};

/// A benchmark function with a bounded domain and a documented optimum
///
/// Implementors supply the formula in [`TestFunction::compute`]; callers go through
/// [`TestFunction::evaluate`], which validates the input against [`TestFunction::domain`]
/// first. Instances never change after construction so evaluation is pure and can be
/// shared across threads.
pub trait TestFunction: std::fmt::Debug + Send + Sync {
    /// Short snake_case identifier, e.g. `"bukin_n6"`
    fn name(&self) -> &'static str;

    fn domain(&self) -> &Domain;

    /// Known minimizer(s), if documented for this dimensionality
    fn global_optimum(&self) -> Option<&GlobalOptimum>;

    /// Documented objective value at the global optimum
    fn known_minimum(&self) -> Option<f64>;

    /// Evaluate the formula on an already validated input
    fn compute(&self, x: ArrayView1<f64>) -> f64;

    fn dim(&self) -> usize {
        self.domain().dim()
    }

    fn lower_bound(&self) -> &Array1<f64> {
        self.domain().lower()
    }

    fn upper_bound(&self) -> &Array1<f64> {
        self.domain().upper()
    }

    /// Validate `x` then evaluate
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        self.evaluate_dyn(x.view().into_dyn())
    }

    fn evaluate_slice(&self, x: &[f64]) -> Result<f64> {
        self.evaluate_dyn(ArrayView1::from(x).into_dyn())
    }

    /// Validate an array of any rank then evaluate
    ///
    /// Anything other than a flat vector of `dim` in-bounds components is rejected
    /// with [`crate::Error::InvalidInput`].
    fn evaluate_dyn(&self, x: ArrayViewD<f64>) -> Result<f64> {
        let x = self
            .domain()
            .check_input(x)
            .inspect_err(|e| log::debug!("{}: rejected input: {}", self.name(), e))?;
        Ok(self.compute(x))
    }
}
