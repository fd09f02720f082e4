use crate::NoisedValue;

/// First-order propagation through a function of one variable:
/// `var_f = f'(a)^2 * var_a`.
///
/// An exact input stays exact, even where the derivative is not finite.
pub(crate) fn propagate_unary(input: &NoisedValue, value: f64, derivative: f64) -> NoisedValue {
    if input.is_exact() {
        return NoisedValue::exact(value);
    }
    NoisedValue::from_variance(value, derivative * derivative * input.variance)
}

// Elementary functions for uncertain values
impl NoisedValue {
    /// Takes the exponential of the value
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let x = NoisedValue::with_variance(0.0, 0.04).unwrap();
    /// let exp_val = x.exp();
    /// assert_eq!(exp_val.value(), 1.0);
    /// assert!((exp_val.variance() - 0.04).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn exp(&self) -> NoisedValue {
        let value = self.value.exp();
        propagate_unary(self, value, value)
    }

    /// Applies sine function to the value
    #[must_use]
    pub fn sin(&self) -> NoisedValue {
        propagate_unary(self, self.value.sin(), self.value.cos())
    }

    /// Applies cosine function to the value
    #[must_use]
    pub fn cos(&self) -> NoisedValue {
        propagate_unary(self, self.value.cos(), -self.value.sin())
    }

    /// Applies tangent function to the value
    #[must_use]
    pub fn tan(&self) -> NoisedValue {
        let cos = self.value.cos();
        propagate_unary(self, self.value.tan(), 1.0 / (cos * cos))
    }

    /// Takes the natural logarithm of the value
    ///
    /// The relative error of the input becomes the absolute error of the result.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let x = NoisedValue::with_error(10.0, 0.5).unwrap();
    /// assert!((x.ln().error() - 0.05).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ln(&self) -> NoisedValue {
        propagate_unary(self, self.value.ln(), 1.0 / self.value)
    }

    /// Takes the square root of the value
    #[must_use]
    pub fn sqrt(&self) -> NoisedValue {
        self.pow(0.5)
    }
}
