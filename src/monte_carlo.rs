//! Sampling-based propagation, used to cross-check the first-order rules.
//!
//! Each input is treated as a normal distribution centred on its value with
//! its standard error as spread. Inputs are sampled independently, matching
//! the independence assumption of the analytic rules.

#![allow(clippy::cast_precision_loss)]

use crate::NoisedValue;
use crate::error::{NoisedError, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f64::consts::PI;

/// Configuration for a Monte Carlo propagation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCarlo {
    pub sample_count: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the thread RNG
    pub seed: Option<u64>,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self {
            sample_count: 10_000,
            seed: None,
        }
    }
}

impl MonteCarlo {
    /// Propagates `inputs` through `f` by sampling, returning the sample mean
    /// and variance of the outputs.
    ///
    /// `f` receives one sample per input, in the order of `inputs`.
    ///
    /// # Errors
    /// Returns [`NoisedError::InvalidSampleCount`] if fewer than two samples
    /// are configured.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    /// use noised_rs::monte_carlo::MonteCarlo;
    ///
    /// let a = NoisedValue::with_error(4.0, 0.1).unwrap();
    /// let b = NoisedValue::with_error(2.0, 0.2).unwrap();
    ///
    /// let config = MonteCarlo { sample_count: 50_000, seed: Some(7) };
    /// let sampled = config.propagate(&[a, b], |x| x[0] * x[1]).unwrap();
    /// let analytic = a * b;
    /// assert!((sampled.error() - analytic.error()).abs() < 0.05);
    /// ```
    pub fn propagate<F>(&self, inputs: &[NoisedValue], f: F) -> Result<NoisedValue>
    where
        F: Fn(&[f64]) -> f64,
    {
        if self.sample_count < 2 {
            return Err(NoisedError::invalid_sample_count(
                self.sample_count,
                "at least two samples are required",
            ));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        tracing::trace!(
            sample_count = self.sample_count,
            inputs = inputs.len(),
            "starting monte carlo propagation"
        );

        let mut draws = vec![0.0; inputs.len()];
        let outputs: Vec<f64> = (0..self.sample_count)
            .map(|_| {
                for (draw, input) in draws.iter_mut().zip(inputs) {
                    *draw = input.sample(&mut rng);
                }
                f(&draws)
            })
            .collect();

        let mean = outputs.iter().sum::<f64>() / outputs.len() as f64;
        let variance =
            outputs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / outputs.len() as f64;

        tracing::trace!(mean, variance, "finished monte carlo propagation");
        Ok(NoisedValue::from_variance(mean, variance))
    }
}

impl NoisedValue {
    /// Draws one sample from a normal distribution with this value as mean
    /// and its error as standard deviation. Exact values always return the
    /// value itself.
    ///
    /// # Example
    /// ```rust
    /// use noised_rs::NoisedValue;
    ///
    /// let exact = NoisedValue::exact(3.0);
    /// assert_eq!(exact.sample(&mut rand::rng()), 3.0);
    /// ```
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.is_exact() {
            return self.value;
        }
        // Box-Muller transform; 1 - u keeps the logarithm's argument in (0, 1]
        let u1: f64 = 1.0 - rng.random::<f64>();
        let u2: f64 = rng.random::<f64>();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        self.value + self.error * z0
    }

    /// Draws `count` independent samples.
    pub fn take_samples<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
