use crate::NoisedValue;

// Statistical comparison of two uncertain values
impl NoisedValue {
    /// Separation between two values in units of their combined standard
    /// error, `|a - b| / sqrt(var_a + var_b)`.
    ///
    /// Two exact values follow IEEE division: distinct values are infinitely
    /// far apart and equal values give NaN.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let lab = NoisedValue::with_variance(9.81, 0.0009).unwrap();
    /// let field = NoisedValue::with_variance(9.77, 0.0007).unwrap();
    /// assert!((lab.n_sigma(field) - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn n_sigma(&self, other: impl Into<NoisedValue>) -> f64 {
        let other = other.into();
        (self.value - other.value).abs() / (self.variance + other.variance).sqrt()
    }

    /// Whether two values agree within `max_sigma` combined standard errors.
    #[must_use]
    pub fn is_compatible(&self, other: impl Into<NoisedValue>, max_sigma: f64) -> bool {
        self.n_sigma(other) <= max_sigma
    }

    /// Whether the central estimate is exactly zero.
    ///
    /// This is an exact comparison, not a tolerance check.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_variance(value: f64, variance: f64) -> NoisedValue {
        NoisedValue::with_variance(value, variance).unwrap()
    }

    #[test]
    fn test_n_sigma() {
        let a = with_variance(10.0, 3.0);
        let b = with_variance(14.0, 1.0);
        assert!((a.n_sigma(b) - 2.0).abs() < f64::EPSILON);
        assert!((b.n_sigma(a) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_n_sigma_with_itself_is_zero() {
        let a = with_variance(-3.5, 0.2);
        assert_eq!(a.n_sigma(a), 0.0);
    }

    #[test]
    fn test_n_sigma_against_plain_number() {
        let a = with_variance(5.0, 4.0);
        assert!((a.n_sigma(1.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_n_sigma_of_exact_values() {
        let a = NoisedValue::exact(1.0);
        assert!(a.n_sigma(2.0).is_infinite());
        assert!(a.n_sigma(a).is_nan());
    }

    #[test]
    fn test_is_compatible() {
        let a = with_variance(10.0, 1.0);
        let b = with_variance(11.0, 1.0);
        assert!(a.is_compatible(b, 1.0));
        assert!(!a.is_compatible(15.0, 3.0));
    }

    #[test]
    fn test_is_zero_is_exact_comparison() {
        assert!(with_variance(0.0, 1.0).is_zero());
        assert!(NoisedValue::exact(-0.0).is_zero());
        assert!(!NoisedValue::exact(1e-300).is_zero());
    }
}
