#![allow(clippy::cast_precision_loss)]

use crate::NoisedValue;
use crate::error::{NoisedError, Result};
use std::iter::Sum;

/// The exact additive identity.
#[must_use]
pub fn zero() -> NoisedValue {
    NoisedValue::exact(0.0)
}

/// The exact multiplicative identity.
#[must_use]
pub fn one() -> NoisedValue {
    NoisedValue::exact(1.0)
}

/// Arithmetic mean of independent uncertain values.
///
/// Variances accumulate through addition and are then scaled by
/// `1 / count^2` when the sum is divided by the exact count.
///
/// # Errors
/// Returns [`NoisedError::EmptyData`] if `values` is empty.
///
/// # Example
/// ```rust
/// use noised_rs::{NoisedValue, statistics};
///
/// let readings = [
///     NoisedValue::with_variance(1.0, 1.0).unwrap(),
///     NoisedValue::with_variance(3.0, 1.0).unwrap(),
/// ];
/// let mean = statistics::mean(&readings).unwrap();
/// assert_eq!(mean.value(), 2.0);
/// assert_eq!(mean.variance(), 0.5);
/// ```
pub fn mean(values: &[NoisedValue]) -> Result<NoisedValue> {
    if values.is_empty() {
        tracing::debug!("mean requested over no values");
        return Err(NoisedError::EmptyData);
    }
    Ok(values.iter().sum::<NoisedValue>() / values.len() as f64)
}

impl Sum for NoisedValue {
    fn sum<I: Iterator<Item = NoisedValue>>(iter: I) -> Self {
        iter.fold(zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a NoisedValue> for NoisedValue {
    fn sum<I: Iterator<Item = &'a NoisedValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_variance(value: f64, variance: f64) -> NoisedValue {
        NoisedValue::with_variance(value, variance).unwrap()
    }

    #[test]
    fn test_identities() {
        assert_eq!(zero().value(), 0.0);
        assert!(zero().is_exact());
        assert_eq!(one().value(), 1.0);
        assert!(one().is_exact());

        let x = with_variance(4.0, 2.0);
        assert_eq!(x + zero(), x);
        assert_eq!(x * one(), x);
    }

    #[test]
    fn test_mean() {
        let values = [with_variance(1.0, 1.0), with_variance(3.0, 1.0)];
        let result = mean(&values).unwrap();
        assert!((result.value() - 2.0).abs() < f64::EPSILON);
        assert!((result.variance() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_of_single_value() {
        let x = with_variance(7.0, 9.0);
        assert_eq!(mean(&[x]).unwrap(), x);
    }

    #[test]
    fn test_mean_of_empty_slice() {
        assert_eq!(mean(&[]), Err(NoisedError::EmptyData));
    }

    #[test]
    fn test_sum_accumulates_variance() {
        let values = vec![
            with_variance(1.0, 0.5),
            with_variance(2.0, 1.5),
            with_variance(3.0, 2.0),
        ];
        let by_ref: NoisedValue = values.iter().sum();
        let by_value: NoisedValue = values.into_iter().sum();
        assert_eq!(by_ref, by_value);
        assert!((by_ref.value() - 6.0).abs() < f64::EPSILON);
        assert!((by_ref.variance() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NoisedValue = std::iter::empty::<NoisedValue>().sum();
        assert_eq!(total, zero());
    }
}
