//! # noised-rs
//!
//! A Rust library for values with uncertainty, propagating errors through
//! arithmetic and elementary functions with first-order (linearised) error
//! propagation.
//!
//! ## Core Concept: Variance Follows the Derivative
//!
//! A `NoisedValue` is a central estimate paired with its variance. For a
//! function `f` of independent inputs, the propagated variance is the sum of
//! `(df/dx_i)^2 * var_i` over the inputs:
//!
//! ```rust
//! use noised_rs::NoisedValue;
//!
//! // Two independent measurements
//! let width = NoisedValue::with_error(4.0, 0.1).unwrap();
//! let height = NoisedValue::with_error(2.0, 0.2).unwrap();
//!
//! let area = width * height;
//! assert_eq!(area.value(), 8.0);
//! assert!((area.variance() - 0.68).abs() < 1e-12);
//!
//! println!("{area}"); // 8 ± 0.8246... (10.308% error)
//! ```
//!
//! ## Features
//!
//! - **Validated construction**: from a variance or an error, never both
//! - **Operator overloading**: `+ - * /` and negation between uncertain values and plain `f64`s
//! - **Elementary functions**: `pow`, `exp`, `ln`, `sqrt`, `sin`, `cos`, `tan`
//! - **Compatibility checks**: separation of two measurements in combined standard errors
//! - **Monte Carlo cross-check**: sampling-based propagation for validating the linear rules
//!
//! ## Known Limitation
//!
//! Operands are always treated as independent. Correlation between values
//! derived from a shared origin is not tracked, so `a - a` carries twice the
//! variance of `a` rather than being exactly zero.

pub mod error;
pub mod format;
pub mod monte_carlo;
pub mod noised;
pub mod operations;
pub mod statistics;

pub use error::{NoisedError, Result};
pub use monte_carlo::MonteCarlo;
pub use noised::NoisedValue;
pub use statistics::{mean, one, zero};

pub use operations::BinaryOperation;
