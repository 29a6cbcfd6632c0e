//! Bukin N.6 test function

use crate::domain::{Domain, GlobalOptimum};
use crate::error::{Error, Result};
use crate::test_function::TestFunction;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1, array};

/// Bukin N.6 function - highly multimodal with narrow global optimum
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix1>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    100.0 * (x2 - 0.01 * x1.powi(2)).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

/// Bukin N.6 on its fixed two-dimensional domain
#[derive(Debug, Clone, PartialEq)]
pub struct BukinN6 {
    domain: Domain,
    optimum: GlobalOptimum,
}

impl BukinN6 {
    /// Only `dim == 2` is accepted; the domain is not parametrizable
    pub fn new(dim: usize) -> Result<Self> {
        if dim != 2 {
            return Err(Error::InvalidDimension {
                function: "bukin_n6",
                dim,
                reason: "the domain is fixed to two dimensions",
            });
        }
        log::trace!("bukin_n6: dim=2");
        Ok(Self::default())
    }
}

impl Default for BukinN6 {
    fn default() -> Self {
        Self {
            domain: Domain::from_parts(array![-15.0, -3.0], array![-5.0, 3.0]),
            optimum: GlobalOptimum::Point(array![-10.0, 1.0]),
        }
    }
}

impl TestFunction for BukinN6 {
    fn name(&self) -> &'static str {
        "bukin_n6"
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
        bukin_n6(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bukin_n6_optimum() {
        let f = BukinN6::new(2).unwrap();
        assert_eq!(f.evaluate(&array![-10.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_bukin_n6_rejects_other_dimensions() {
        for dim in [0, 1, 3, 10] {
            let err = BukinN6::new(dim).unwrap_err();
            assert!(err.is_invalid_dimension(), "dim {}: {:?}", dim, err);
        }
    }

    #[test]
    fn test_bukin_n6_asymmetric_bounds() {
        let f = BukinN6::default();
        assert_eq!(f.lower_bound(), &array![-15.0, -3.0]);
        assert_eq!(f.upper_bound(), &array![-5.0, 3.0]);
        // inside [-15, 15] but not inside the first axis interval
        assert!(f.evaluate(&array![0.0, 0.0]).unwrap_err().is_invalid_input());
        assert!(f.evaluate(&array![-10.0, 3.5]).unwrap_err().is_invalid_input());

        // 100 sqrt(|0 - 2.25|) + 0.05
        let value = f.evaluate(&array![-15.0, 0.0]).unwrap();
        assert!((value - 150.05).abs() < 1e-10, "got {}", value);
    }
}
