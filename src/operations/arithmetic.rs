use crate::NoisedValue;
use crate::operations::functions::propagate_unary;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Binary operation types and their first-order propagation rules
///
/// Each rule sums `(df/dx_i)^2 * var_i` over both operands, assuming the
/// operands are independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperation {
    #[must_use]
    pub fn apply(self, left: NoisedValue, right: NoisedValue) -> NoisedValue {
        let (a, var_a) = (left.value, left.variance);
        let (b, var_b) = (right.value, right.variance);

        match self {
            BinaryOperation::Add => NoisedValue::from_variance(a + b, var_a + var_b),
            BinaryOperation::Sub => BinaryOperation::Add.apply(left, -right),
            BinaryOperation::Mul => {
                NoisedValue::from_variance(a * b, var_a * b * b + var_b * a * a)
            }
            // b == 0 is left to IEEE division
            BinaryOperation::Div => NoisedValue::from_variance(
                a / b,
                (var_a * b * b + var_b * a * a) / b.powi(4),
            ),
        }
    }
}

// Addition operations
impl Add for NoisedValue {
    type Output = NoisedValue;

    fn add(self, rhs: Self) -> Self::Output {
        BinaryOperation::Add.apply(self, rhs)
    }
}

impl Add<f64> for NoisedValue {
    type Output = NoisedValue;

    fn add(self, rhs: f64) -> Self::Output {
        self + NoisedValue::exact(rhs)
    }
}

impl Add<NoisedValue> for f64 {
    type Output = NoisedValue;

    fn add(self, rhs: NoisedValue) -> Self::Output {
        rhs + self
    }
}

// Subtraction operations
impl Sub for NoisedValue {
    type Output = NoisedValue;

    fn sub(self, rhs: Self) -> Self::Output {
        BinaryOperation::Sub.apply(self, rhs)
    }
}

impl Sub<f64> for NoisedValue {
    type Output = NoisedValue;

    fn sub(self, rhs: f64) -> Self::Output {
        self - NoisedValue::exact(rhs)
    }
}

impl Sub<NoisedValue> for f64 {
    type Output = NoisedValue;

    fn sub(self, rhs: NoisedValue) -> Self::Output {
        NoisedValue::exact(self) - rhs
    }
}

// Multiplication operations
impl Mul for NoisedValue {
    type Output = NoisedValue;

    fn mul(self, rhs: Self) -> Self::Output {
        BinaryOperation::Mul.apply(self, rhs)
    }
}

impl Mul<f64> for NoisedValue {
    type Output = NoisedValue;

    fn mul(self, rhs: f64) -> Self::Output {
        self * NoisedValue::exact(rhs)
    }
}

impl Mul<NoisedValue> for f64 {
    type Output = NoisedValue;

    fn mul(self, rhs: NoisedValue) -> Self::Output {
        rhs * self
    }
}

// Division operations
impl Div for NoisedValue {
    type Output = NoisedValue;

    fn div(self, rhs: Self) -> Self::Output {
        BinaryOperation::Div.apply(self, rhs)
    }
}

impl Div<f64> for NoisedValue {
    type Output = NoisedValue;

    fn div(self, rhs: f64) -> Self::Output {
        self / NoisedValue::exact(rhs)
    }
}

impl Div<NoisedValue> for f64 {
    type Output = NoisedValue;

    fn div(self, rhs: NoisedValue) -> Self::Output {
        NoisedValue::exact(self) / rhs
    }
}

// Negation keeps the supplied error untouched
impl Neg for NoisedValue {
    type Output = NoisedValue;

    fn neg(self) -> Self::Output {
        NoisedValue {
            value: -self.value,
            ..self
        }
    }
}

impl NoisedValue {
    /// Raises the value to an exact real power.
    ///
    /// The variance is `p^2 * a^(2p - 2) * var_a`. A zero exponent always
    /// yields an exact `1`, whatever the uncertainty of the base.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let side = NoisedValue::with_error(2.0, 0.1).unwrap();
    /// let volume = side.pow(3.0);
    /// assert_eq!(volume.value(), 8.0);
    /// assert!((volume.error() - 1.2).abs() < 1e-12);
    ///
    /// assert_eq!(side.pow(0.0), NoisedValue::exact(1.0));
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: f64) -> NoisedValue {
        if exponent == 0.0 {
            return NoisedValue::exact(1.0);
        }
        let a = self.value;
        propagate_unary(self, a.powf(exponent), exponent * a.powf(exponent - 1.0))
    }

    /// Raises the value to an exact integer power.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> NoisedValue {
        self.pow(f64::from(exponent))
    }
}
