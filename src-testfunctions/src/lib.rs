//! Optimization test functions library
//!
//! A small catalog of classic benchmark functions used to validate global
//! optimizers: Griewank, Ackley, Levy, Rosenbrock, Bukin N.6, Michalewicz,
//! Eggholder and Branin. Every function knows its search domain and its
//! documented global optimum, and refuses inputs outside that domain.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use optim_testfunctions::*;
//!
//! let f = Ackley::new(2)?;
//! let value = f.evaluate(&array![0.0, 0.0])?;
//! assert!(value.abs() < 1e-9);
//!
//! // out of the box [-32.768, 32.768]^2
//! assert!(f.evaluate(&array![40.0, 0.0]).unwrap_err().is_invalid_input());
//!
//! // raw formulas skip validation
//! assert_eq!(rosenbrock(&array![1.0, 1.0]), 0.0);
//!
//! // metadata for every function available in 2D
//! let metadata = get_function_metadata(2);
//! assert_eq!(metadata["branin"].global_minima.len(), 3);
//! # Ok::<(), optim_testfunctions::Error>(())
//! ```

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod domain;
pub mod error;
pub mod functions;
pub mod registry;
pub mod test_function;

pub use domain::{Bound, Domain, GlobalOptimum};
pub use error::{Error, InputError, Result};
pub use functions::*;
pub use registry::{FunctionConfig, FunctionKind, create_function, create_function_by_name};
pub use test_function::TestFunction;

/// Metadata for a test function at a given dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    pub dim: usize,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

impl FunctionMetadata {
    pub fn from_function(kind: FunctionKind, function: &dyn TestFunction) -> Self {
        let global_minima = match (function.global_optimum(), function.known_minimum()) {
            (Some(optimum), Some(value)) => optimum
                .points()
                .iter()
                .map(|p| (p.to_vec(), value))
                .collect(),
            _ => vec![],
        };
        Self {
            name: function.name().to_string(),
            dim: function.dim(),
            bounds: function.domain().to_pairs(),
            global_minima,
            description: kind.description().to_string(),
            multimodal: kind.is_multimodal(),
        }
    }
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Bounds matrix (2 x dim) of an existing function
pub fn function_bounds(function: &dyn TestFunction) -> Array2<f64> {
    let domain = function.domain();
    Array2::from_shape_fn((2, domain.dim()), |(i, j)| {
        if i == 0 {
            domain.lower()[j]
        } else {
            domain.upper()[j]
        }
    })
}

/// Get metadata for every test function that can be built with `dim` dimensions
pub fn get_function_metadata(dim: usize) -> HashMap<String, FunctionMetadata> {
    FunctionKind::ALL
        .iter()
        .filter(|kind| kind.supports_dim(dim))
        .filter_map(|&kind| {
            create_function(kind, dim).ok().map(|f| {
                let metadata = FunctionMetadata::from_function(kind, f.as_ref());
                (kind.name().to_string(), metadata)
            })
        })
        .collect()
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if the function is unknown or not available at `dim`
pub fn get_function_bounds(function_name: &str, dim: usize) -> Option<Vec<(f64, f64)>> {
    create_function_by_name(function_name, dim)
        .ok()
        .map(|f| f.domain().to_pairs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_all_function_minima() {
        let _ = env_logger::builder().is_test(true).try_init();
        let loose_tolerance = 1e-3; // documented minima are rounded

        for dim in [2, 3, 5] {
            let metadata = get_function_metadata(dim);
            for (func_name, meta) in metadata.iter() {
                let f = create_function_by_name(func_name, dim).unwrap();

                for (minimum_location, expected_value) in &meta.global_minima {
                    let x = Array1::from_vec(minimum_location.clone());
                    let actual_value = f.evaluate(&x).unwrap();
                    let error = (actual_value - expected_value).abs();

                    let test_tolerance = if expected_value.abs() > 1.0 {
                        loose_tolerance * expected_value.abs()
                    } else {
                        loose_tolerance
                    };

                    assert!(
                        error <= test_tolerance,
                        "Function {} failed: at {:?}, expected {:.10}, got {:.10}, \
                         error {:.2e} > tolerance {:.2e}",
                        func_name,
                        minimum_location,
                        expected_value,
                        actual_value,
                        error,
                        test_tolerance
                    );
                }
            }
        }
    }

    #[test]
    fn test_metadata_per_dimension() {
        let m2 = get_function_metadata(2);
        assert_eq!(m2.len(), 8);
        // Michalewicz has a documented minimizer but no tabulated value
        assert!(m2["michalewicz"].global_minima.is_empty());
        assert_eq!(m2["eggholder"].global_minima.len(), 1);

        // no Bukin N.6 outside 2D, no documented Michalewicz/Eggholder optimum
        let m3 = get_function_metadata(3);
        assert_eq!(m3.len(), 7);
        assert!(!m3.contains_key("bukin_n6"));
        assert!(m3["michalewicz"].global_minima.is_empty());
        assert!(m3["eggholder"].global_minima.is_empty());
        assert_eq!(m3["branin"].bounds, vec![(-5.0, 10.0), (0.0, 15.0), (0.0, 1.0)]);

        // only the N-dimensional uniform-bound functions, Michalewicz included
        let m1 = get_function_metadata(1);
        assert_eq!(m1.len(), 5);
        assert!(get_function_metadata(0).is_empty());
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata(2);

        for (name, meta) in metadata.iter() {
            assert_eq!(&meta.name, name);
            assert_eq!(meta.bounds.len(), meta.dim);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            // Allow functions with no tabulated minimum value (michalewicz)
            if name != "michalewicz" {
                assert!(!meta.global_minima.is_empty(), "Function {} has no global minima", name);
            }

            for (lower, upper) in &meta.bounds {
                assert!(
                    lower < upper,
                    "Function {} has invalid bounds: {} >= {}",
                    name,
                    lower,
                    upper
                );
            }

            for (location, _value) in &meta.global_minima {
                assert_eq!(
                    location.len(),
                    meta.dim,
                    "Function {} minimum has wrong length",
                    name
                );
                for (x, (lower, upper)) in location.iter().zip(meta.bounds.iter()) {
                    assert!(x >= lower && x <= upper, "Function {} minimum outside bounds", name);
                }
            }
        }
    }

    #[test]
    fn test_metadata_serializes() {
        let metadata = get_function_metadata(2);
        let json = serde_json::to_string(&metadata["bukin_n6"]).unwrap();
        let back: FunctionMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata["bukin_n6"]);
        assert_eq!(back.bounds, vec![(-15.0, -5.0), (-3.0, 3.0)]);
    }

    #[test]
    fn test_bounds_helpers() {
        let b = create_bounds(3, -1.0, 2.0);
        assert_eq!(b.shape(), &[2, 3]);
        assert_eq!(b[[0, 2]], -1.0);
        assert_eq!(b[[1, 0]], 2.0);

        let f = BukinN6::default();
        let b = function_bounds(&f);
        assert_eq!(b[[0, 0]], -15.0);
        assert_eq!(b[[1, 1]], 3.0);

        assert_eq!(get_function_bounds("ackley", 2), Some(vec![(-32.768, 32.768); 2]));
        assert_eq!(get_function_bounds("bukin_n6", 4), None);
        assert_eq!(get_function_bounds("unknown", 2), None);
    }
}
