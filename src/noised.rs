use crate::error::{NoisedError, Result};

/// A measured or computed quantity paired with its uncertainty.
///
/// `NoisedValue` stores a central estimate together with its variance. The
/// standard error and relative error are derived once at construction, so
/// every read of them is consistent for the life of the value. Values are
/// immutable: arithmetic always produces a new `NoisedValue`.
///
/// Operands of every operation are assumed to be statistically independent.
/// No covariance is tracked, so `a - a` keeps the combined variance of both
/// operands instead of collapsing to an exact zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoisedValue {
    pub(crate) value: f64,
    pub(crate) variance: f64,
    pub(crate) error: f64,
    pub(crate) relative_error: Option<f64>,
}

impl NoisedValue {
    /// Creates a value from a central estimate and at most one of variance
    /// or error.
    ///
    /// Supplying neither makes the value exact. Supplying both is rejected
    /// regardless of their magnitudes.
    ///
    /// # Errors
    /// Returns [`NoisedError::ConflictingUncertainty`] if both `variance` and
    /// `error` are given, and [`NoisedError::InvalidUncertainty`] if the one
    /// given is negative or NaN.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let length = NoisedValue::new(10.0, Some(4.0), None).unwrap();
    /// assert_eq!(length.error(), 2.0);
    ///
    /// assert!(NoisedValue::new(10.0, Some(4.0), Some(2.0)).is_err());
    /// ```
    pub fn new(value: f64, variance: Option<f64>, error: Option<f64>) -> Result<Self> {
        match (variance, error) {
            (None, None) => Ok(Self::exact(value)),
            (Some(variance), Some(error)) => {
                tracing::debug!(value, variance, error, "rejected both variance and error");
                Err(NoisedError::ConflictingUncertainty { variance, error })
            }
            (Some(variance), None) => {
                check_non_negative(value, "variance", variance)?;
                Ok(Self::from_variance(value, variance))
            }
            (None, Some(error)) => {
                check_non_negative(value, "error", error)?;
                Ok(Self::from_parts(value, error * error, error))
            }
        }
    }

    /// Creates an exact value with zero uncertainty.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let two = NoisedValue::exact(2.0);
    /// assert_eq!(two.variance(), 0.0);
    /// ```
    #[must_use]
    pub fn exact(value: f64) -> Self {
        Self::from_parts(value, 0.0, 0.0)
    }

    /// Creates a value from its variance.
    ///
    /// # Errors
    /// Returns [`NoisedError::InvalidUncertainty`] if `variance` is negative or NaN.
    pub fn with_variance(value: f64, variance: f64) -> Result<Self> {
        Self::new(value, Some(variance), None)
    }

    /// Creates a value from its standard error.
    ///
    /// # Errors
    /// Returns [`NoisedError::InvalidUncertainty`] if `error` is negative or NaN.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let mass = NoisedValue::with_error(4.0, 0.5).unwrap();
    /// assert_eq!(mass.variance(), 0.25);
    /// ```
    pub fn with_error(value: f64, error: f64) -> Result<Self> {
        Self::new(value, None, Some(error))
    }

    /// Builds the result of a propagation rule. The variance produced by the
    /// rules is non-negative by construction, so it is not validated again.
    pub(crate) fn from_variance(value: f64, variance: f64) -> Self {
        Self::from_parts(value, variance, variance.sqrt())
    }

    fn from_parts(value: f64, variance: f64, error: f64) -> Self {
        let relative_error = (value != 0.0).then(|| error / value.abs());

        Self {
            value,
            variance,
            error,
            relative_error,
        }
    }

    /// The central estimate.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The squared standard uncertainty.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// The standard error, `sqrt(variance)`.
    #[must_use]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// The error relative to the magnitude of the value, `error / |value|`.
    ///
    /// # Errors
    /// Returns [`NoisedError::UndefinedRelativeError`] when the value is exactly zero.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let x = NoisedValue::with_error(-4.0, 1.0).unwrap();
    /// assert_eq!(x.relative_error().unwrap(), 0.25);
    /// assert!(NoisedValue::exact(0.0).relative_error().is_err());
    /// ```
    pub fn relative_error(&self) -> Result<f64> {
        self.relative_error.ok_or(NoisedError::UndefinedRelativeError)
    }

    /// Whether the value carries no uncertainty.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.variance == 0.0
    }
}

impl Default for NoisedValue {
    fn default() -> Self {
        Self::exact(0.0)
    }
}

/// A plain number is an exact value.
impl From<f64> for NoisedValue {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

fn check_non_negative(value: f64, parameter: &'static str, uncertainty: f64) -> Result<()> {
    // NaN fails this comparison as well.
    if uncertainty >= 0.0 {
        Ok(())
    } else {
        tracing::debug!(value, parameter, uncertainty, "rejected invalid uncertainty");
        Err(NoisedError::invalid_uncertainty(parameter, uncertainty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_value_has_zero_uncertainty() {
        let x = NoisedValue::new(3.0, None, None).unwrap();
        assert_eq!(x.value(), 3.0);
        assert_eq!(x.variance(), 0.0);
        assert_eq!(x.error(), 0.0);
        assert_eq!(x.relative_error().unwrap(), 0.0);
        assert!(x.is_exact());
    }

    #[test]
    fn test_variance_derives_error() {
        let x = NoisedValue::with_variance(10.0, 4.0).unwrap();
        assert!((x.error() - 2.0).abs() < f64::EPSILON);
        assert!((x.relative_error().unwrap() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_error_derives_variance() {
        let x = NoisedValue::with_error(10.0, 0.3).unwrap();
        assert!((x.variance() - 0.09).abs() < 1e-12);
        assert_eq!(x.error(), 0.3);
    }

    #[test]
    fn test_conflicting_uncertainty_rejected_even_for_zeros() {
        assert_eq!(
            NoisedValue::new(1.0, Some(0.0), Some(0.0)),
            Err(NoisedError::ConflictingUncertainty {
                variance: 0.0,
                error: 0.0
            })
        );
        assert!(matches!(
            NoisedValue::new(1.0, Some(-1.0), Some(-1.0)),
            Err(NoisedError::ConflictingUncertainty { .. })
        ));
    }

    #[test]
    fn test_negative_uncertainty_rejected() {
        assert_eq!(
            NoisedValue::with_variance(1.0, -1.0),
            Err(NoisedError::invalid_uncertainty("variance", -1.0))
        );
        assert_eq!(
            NoisedValue::with_error(1.0, -1.0),
            Err(NoisedError::invalid_uncertainty("error", -1.0))
        );
    }

    #[test]
    fn test_nan_uncertainty_rejected() {
        assert!(matches!(
            NoisedValue::with_variance(1.0, f64::NAN),
            Err(NoisedError::InvalidUncertainty {
                parameter: "variance",
                ..
            })
        ));
    }

    #[test]
    fn test_relative_error_of_zero_is_undefined() {
        let zero = NoisedValue::with_variance(0.0, 1.0).unwrap();
        assert!(zero.is_zero());
        assert_eq!(
            zero.relative_error(),
            Err(NoisedError::UndefinedRelativeError)
        );
    }

    #[test]
    fn test_derived_quantities_are_stable() {
        let x = NoisedValue::with_error(7.0, 0.7).unwrap();
        let first = (x.variance(), x.error(), x.relative_error());
        let second = (x.variance(), x.error(), x.relative_error());
        assert_eq!(first, second);
    }

    #[test]
    fn test_promotion_from_f64() {
        let x: NoisedValue = 2.5.into();
        assert_eq!(x, NoisedValue::exact(2.5));
        assert_eq!(NoisedValue::default(), NoisedValue::exact(0.0));
    }
}
