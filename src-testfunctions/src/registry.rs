//! Name-based lookup of test functions
//!
//! Benchmark harnesses usually pick problems by name. [`FunctionKind`] parses the
//! snake_case identifiers, [`create_function`] builds a boxed [`TestFunction`]
//! with default bounds, and [`FunctionConfig`] is the serde form of the
//! constructor parameters:
//!
//! ```rust
//! use optim_testfunctions::{FunctionConfig, TestFunction};
//!
//! let config: FunctionConfig =
//!     serde_json::from_str(r#"{ "function": "ackley", "dim": 3, "lower": -5.0, "upper": 5.0 }"#)
//!         .unwrap();
//! let f = config.build().unwrap();
//! assert_eq!(f.dim(), 3);
//! assert_eq!(f.upper_bound()[2], 5.0);
//! ```

use crate::domain::Bound;
use crate::error::{Error, Result};
use crate::functions::*;
use crate::test_function::TestFunction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Griewank,
    Ackley,
    Levy,
    Rosenbrock,
    BukinN6,
    Michalewicz,
    Eggholder,
    Branin,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 8] = [
        FunctionKind::Griewank,
        FunctionKind::Ackley,
        FunctionKind::Levy,
        FunctionKind::Rosenbrock,
        FunctionKind::BukinN6,
        FunctionKind::Michalewicz,
        FunctionKind::Eggholder,
        FunctionKind::Branin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionKind::Griewank => "griewank",
            FunctionKind::Ackley => "ackley",
            FunctionKind::Levy => "levy",
            FunctionKind::Rosenbrock => "rosenbrock",
            FunctionKind::BukinN6 => "bukin_n6",
            FunctionKind::Michalewicz => "michalewicz",
            FunctionKind::Eggholder => "eggholder",
            FunctionKind::Branin => "branin",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FunctionKind::Griewank => "N-dimensional multimodal function with a coupling product",
            FunctionKind::Ackley => "N-dimensional multimodal function with a flat outer region",
            FunctionKind::Levy => "N-dimensional multimodal function",
            FunctionKind::Rosenbrock => "N-dimensional banana function",
            FunctionKind::BukinN6 => "2D multimodal function with a narrow curved ridge",
            FunctionKind::Michalewicz => "N-dimensional multimodal function with steep ridges",
            FunctionKind::Eggholder => "2D highly multimodal function",
            FunctionKind::Branin => "2D multimodal function with 3 global minima",
        }
    }

    pub fn is_multimodal(self) -> bool {
        !matches!(self, FunctionKind::Rosenbrock)
    }

    /// Bukin N.6 and Branin hardcode their per-axis bounds
    pub fn has_fixed_domain(self) -> bool {
        matches!(self, FunctionKind::BukinN6 | FunctionKind::Branin)
    }

    /// Whether `dim` is accepted by the constructor
    pub fn supports_dim(self, dim: usize) -> bool {
        match self {
            FunctionKind::BukinN6 => dim == 2,
            FunctionKind::Eggholder | FunctionKind::Branin => dim >= 2,
            _ => dim >= 1,
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "griewank" => Ok(FunctionKind::Griewank),
            "ackley" => Ok(FunctionKind::Ackley),
            "levy" => Ok(FunctionKind::Levy),
            "rosenbrock" => Ok(FunctionKind::Rosenbrock),
            "bukin_n6" | "bukinn6" => Ok(FunctionKind::BukinN6),
            "michalewicz" => Ok(FunctionKind::Michalewicz),
            "eggholder" => Ok(FunctionKind::Eggholder),
            "branin" => Ok(FunctionKind::Branin),
            _ => Err(Error::UnknownFunction(s.to_string())),
        }
    }
}

/// Build a function with its default bounds
pub fn create_function(kind: FunctionKind, dim: usize) -> Result<Box<dyn TestFunction>> {
    let function: Box<dyn TestFunction> = match kind {
        FunctionKind::Griewank => Box::new(Griewank::new(dim)?),
        FunctionKind::Ackley => Box::new(Ackley::new(dim)?),
        FunctionKind::Levy => Box::new(Levy::new(dim)?),
        FunctionKind::Rosenbrock => Box::new(Rosenbrock::new(dim)?),
        FunctionKind::BukinN6 => Box::new(BukinN6::new(dim)?),
        FunctionKind::Michalewicz => Box::new(Michalewicz::new(dim)?),
        FunctionKind::Eggholder => Box::new(Eggholder::new(dim)?),
        FunctionKind::Branin => Box::new(Branin::new(dim)?),
    };
    Ok(function)
}

/// Same as [`create_function`] but looked up by name
pub fn create_function_by_name(name: &str, dim: usize) -> Result<Box<dyn TestFunction>> {
    create_function(name.parse()?, dim)
}

/// Constructor parameters of one test function
///
/// Missing bounds fall back to the function defaults. Bounds may be given as a
/// scalar (broadcast to every axis) or as one value per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub function: FunctionKind,
    #[serde(default = "default_dim")]
    pub dim: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Bound>,
}

fn default_dim() -> usize {
    2
}

impl FunctionConfig {
    pub fn new(function: FunctionKind, dim: usize) -> Self {
        Self {
            function,
            dim,
            lower: None,
            upper: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn with_bounds(mut self, lower: impl Into<Bound>, upper: impl Into<Bound>) -> Self {
        self.lower = Some(lower.into());
        self.upper = Some(upper.into());
        self
    }

    pub fn build(&self) -> Result<Box<dyn TestFunction>> {
        if self.lower.is_none() && self.upper.is_none() {
            return create_function(self.function, self.dim);
        }
        if self.function.has_fixed_domain() {
            return Err(Error::InvalidBounds(format!(
                "{} has a fixed domain and does not accept custom bounds",
                self.function
            )));
        }

        // a single override keeps the default on the other side
        let defaults = create_function(self.function, self.dim)?;
        let lower = self
            .lower
            .clone()
            .unwrap_or_else(|| Bound::from(defaults.lower_bound().clone()));
        let upper = self
            .upper
            .clone()
            .unwrap_or_else(|| Bound::from(defaults.upper_bound().clone()));

        let dim = self.dim;
        let function: Box<dyn TestFunction> = match self.function {
            FunctionKind::Griewank => Box::new(Griewank::with_bounds(dim, lower, upper)?),
            FunctionKind::Ackley => Box::new(Ackley::with_bounds(dim, lower, upper)?),
            FunctionKind::Levy => Box::new(Levy::with_bounds(dim, lower, upper)?),
            FunctionKind::Rosenbrock => Box::new(Rosenbrock::with_bounds(dim, lower, upper)?),
            FunctionKind::Michalewicz => Box::new(Michalewicz::with_bounds(dim, lower, upper)?),
            FunctionKind::Eggholder => Box::new(Eggholder::with_bounds(dim, lower, upper)?),
            FunctionKind::BukinN6 => Box::new(BukinN6::new(dim)?),
            FunctionKind::Branin => Box::new(Branin::new(dim)?),
        };
        Ok(function)
    }
}
