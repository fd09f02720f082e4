//! Error types for the noised-rs library.
//!
//! Every variant is a contract violation detected eagerly, either when a
//! value is constructed or when a derived quantity is requested.

use thiserror::Error;

/// The main error type for the noised-rs library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoisedError {
    /// Both a variance and an error were supplied to the constructor.
    #[error("Conflicting uncertainty: got both variance {variance} and error {error}")]
    ConflictingUncertainty {
        /// The supplied variance
        variance: f64,
        /// The supplied error
        error: f64,
    },

    /// A supplied variance or error is negative (or NaN).
    #[error("Invalid uncertainty: {parameter} must be non-negative, got {value}")]
    InvalidUncertainty {
        /// Either `"variance"` or `"error"`
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Relative error was requested for a value of exactly zero.
    #[error("Undefined relative error: value is 0")]
    UndefinedRelativeError,

    /// An empty collection was given where at least one element is required.
    #[error("Empty data: at least one value is required")]
    EmptyData,

    /// Error when sample count is invalid.
    #[error("Invalid sample count: {count} ({reason})")]
    InvalidSampleCount {
        /// The invalid sample count
        count: usize,
        /// The reason the count is invalid
        reason: &'static str,
    },
}

/// A specialized `Result` type for noised operations.
pub type Result<T> = std::result::Result<T, NoisedError>;

impl NoisedError {
    /// Create an error for a negative or NaN uncertainty.
    ///
    /// # Example
    /// ```
    /// use noised_rs::error::NoisedError;
    ///
    /// let error = NoisedError::invalid_uncertainty("variance", -1.0);
    /// assert!(error.to_string().contains("variance"));
    /// ```
    #[must_use]
    pub fn invalid_uncertainty(parameter: &'static str, value: f64) -> Self {
        Self::InvalidUncertainty { parameter, value }
    }

    /// Create an error for invalid sample count.
    ///
    /// # Example
    /// ```
    /// use noised_rs::error::NoisedError;
    ///
    /// let error = NoisedError::invalid_sample_count(1, "at least two samples are required");
    /// assert!(error.to_string().contains("at least two"));
    /// ```
    #[must_use]
    pub fn invalid_sample_count(count: usize, reason: &'static str) -> Self {
        Self::InvalidSampleCount { count, reason }
    }
}
