//! Test function implementations, one module per function
//!
//! Each module exposes the raw formula as a free function (no validation, same
//! signature style as the rest of the catalog) and a struct implementing
//! [`crate::TestFunction`] that owns the domain and the documented optimum.

pub mod ackley;
pub mod branin;
pub mod bukin_n6;
pub mod eggholder;
pub mod griewank;
pub mod levy;
pub mod michalewicz;
pub mod rosenbrock;

// Re-export all functions for easy access
pub use ackley::{Ackley, ackley};
pub use branin::{Branin, branin};
pub use bukin_n6::{BukinN6, bukin_n6};
pub use eggholder::{Eggholder, eggholder};
pub use griewank::{Griewank, griewank};
pub use levy::{Levy, levy};
pub use michalewicz::{MICHALEWICZ_STEEPNESS, Michalewicz, michalewicz};
pub use rosenbrock::{Rosenbrock, rosenbrock};
