//! Distribution samplers.
//!
//! This module defines [`DistributionSpec`], the ephemeral value object
//! describing one sampling request, and [`Sample`], the typed result. Specs
//! are stateless with respect to their parameters: a distribution object is
//! constructed per call over the shared engine, which is statistically
//! equivalent to reusing one.

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use crate::engine::RandomEngine;
use crate::error::SampleError;

/// Number of digits after the decimal point used when a real sample is
/// persisted as a list element, matching the host's double-reply precision.
pub const ELEMENT_PRECISION: usize = 19;

/// One sampling request: a distribution kind plus its numeric parameters.
///
/// # Examples
///
/// ```rust
/// use randkv_core::engine::RandomEngine;
/// use randkv_core::distributions::DistributionSpec;
///
/// let mut engine = RandomEngine::from_seed(1);
/// let spec = DistributionSpec::DiscreteUniform { low: 5, high: 5 };
/// assert_eq!(spec.sample(&mut engine).unwrap().as_int(), Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionSpec {
    /// Integer uniform over the closed range `[low, high]`.
    DiscreteUniform {
        /// Inclusive lower bound.
        low: i64,
        /// Inclusive upper bound.
        high: i64,
    },
    /// Real uniform over the half-open range `[low, high)`.
    ContinuousUniform {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
    /// Gaussian with the given mean and standard deviation.
    Normal {
        /// Distribution mean.
        mean: f64,
        /// Standard deviation; zero is legal (degenerate), negative is not.
        stddev: f64,
    },
    /// Exponential with the given rate (lambda); the rate must be positive.
    Exponential {
        /// Rate parameter λ.
        rate: f64,
    },
}

impl DistributionSpec {
    /// Checks the parameters without drawing.
    ///
    /// List-populating commands validate up front so a rejected parameter
    /// leaves the target key untouched.
    pub fn validate(&self) -> Result<(), SampleError> {
        match *self {
            Self::DiscreteUniform { low, high } => {
                if low > high {
                    return Err(SampleError::InvalidRange {
                        low: low as f64,
                        high: high as f64,
                    });
                }
                Ok(())
            }
            Self::ContinuousUniform { low, high } => {
                if low > high {
                    return Err(SampleError::InvalidRange { low, high });
                }
                Ok(())
            }
            Self::Normal { mean, stddev } => Normal::new(mean, stddev)
                .map(|_| ())
                .map_err(|_| SampleError::BadParameter {
                    name: "standard deviation",
                    value: stddev,
                }),
            Self::Exponential { rate } => Exp::new(rate)
                .map(|_| ())
                .map_err(|_| SampleError::BadParameter {
                    name: "lambda",
                    value: rate,
                }),
        }
    }

    /// Draws one sample from the shared engine.
    ///
    /// Uniform kinds require `low <= high` and fail with
    /// [`SampleError::InvalidRange`] otherwise. Normal rejects a negative
    /// stddev and exponential a non-positive rate with
    /// [`SampleError::BadParameter`].
    pub fn sample(&self, engine: &mut RandomEngine) -> Result<Sample, SampleError> {
        match *self {
            Self::DiscreteUniform { low, high } => {
                if low > high {
                    return Err(SampleError::InvalidRange {
                        low: low as f64,
                        high: high as f64,
                    });
                }
                Ok(Sample::Int(engine.rng().gen_range(low..=high)))
            }
            Self::ContinuousUniform { low, high } => {
                if low > high {
                    return Err(SampleError::InvalidRange { low, high });
                }
                // Scale a [0, 1) draw; low == high degenerates to low.
                let u: f64 = engine.rng().gen();
                let v = low + (high - low) * u;
                // Rounding can push the product up to the excluded bound.
                Ok(Sample::Real(if v < high { v } else { low }))
            }
            Self::Normal { mean, stddev } => {
                let dist = Normal::new(mean, stddev).map_err(|_| SampleError::BadParameter {
                    name: "standard deviation",
                    value: stddev,
                })?;
                Ok(Sample::Real(dist.sample(engine.rng())))
            }
            Self::Exponential { rate } => {
                let dist = Exp::new(rate).map_err(|_| SampleError::BadParameter {
                    name: "lambda",
                    value: rate,
                })?;
                Ok(Sample::Real(dist.sample(engine.rng())))
            }
        }
    }
}

/// A single typed sample: an integer for discrete uniform, a real otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Discrete uniform result.
    Int(i64),
    /// Continuous uniform, normal or exponential result.
    Real(f64),
}

impl Sample {
    /// Returns the integer payload, if this is an integer sample.
    #[inline]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Real(_) => None,
        }
    }

    /// Returns the sample as a real, widening integers.
    #[inline]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }

    /// Renders the fixed-precision decimal string used for list elements:
    /// 19 digits after the decimal point, the same precision the host uses
    /// when replying with a bare double.
    pub fn to_element_string(self) -> String {
        format!("{:.*}", ELEMENT_PRECISION, self.as_real())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degenerate_discrete_range_is_constant() {
        let mut engine = RandomEngine::from_seed(3);
        let spec = DistributionSpec::DiscreteUniform { low: 5, high: 5 };
        for _ in 0..32 {
            assert_eq!(spec.sample(&mut engine).unwrap(), Sample::Int(5));
        }
    }

    #[test]
    fn degenerate_continuous_range_is_constant() {
        let mut engine = RandomEngine::from_seed(3);
        let spec = DistributionSpec::ContinuousUniform { low: 2.5, high: 2.5 };
        for _ in 0..32 {
            assert_eq!(spec.sample(&mut engine).unwrap(), Sample::Real(2.5));
        }
    }

    #[test]
    fn inverted_uniform_bounds_are_rejected() {
        let mut engine = RandomEngine::from_seed(3);
        let spec = DistributionSpec::ContinuousUniform { low: 5.0, high: 2.0 };
        assert!(matches!(
            spec.sample(&mut engine),
            Err(SampleError::InvalidRange { .. })
        ));
        let spec = DistributionSpec::DiscreteUniform { low: 9, high: 1 };
        assert!(matches!(
            spec.sample(&mut engine),
            Err(SampleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn zero_stddev_normal_returns_mean() {
        let mut engine = RandomEngine::from_seed(3);
        let spec = DistributionSpec::Normal { mean: 4.0, stddev: 0.0 };
        assert_eq!(spec.sample(&mut engine).unwrap(), Sample::Real(4.0));
    }

    #[test]
    fn negative_stddev_is_rejected() {
        let mut engine = RandomEngine::from_seed(3);
        let spec = DistributionSpec::Normal { mean: 0.0, stddev: -1.0 };
        assert!(matches!(
            spec.sample(&mut engine),
            Err(SampleError::BadParameter { name: "standard deviation", .. })
        ));
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let mut engine = RandomEngine::from_seed(3);
        for rate in [0.0, -2.0] {
            let spec = DistributionSpec::Exponential { rate };
            assert!(matches!(
                spec.sample(&mut engine),
                Err(SampleError::BadParameter { name: "lambda", .. })
            ));
        }
    }

    #[test]
    fn exponential_samples_are_non_negative() {
        let mut engine = RandomEngine::from_seed(11);
        let spec = DistributionSpec::Exponential { rate: 1.0 };
        for _ in 0..256 {
            assert!(spec.sample(&mut engine).unwrap().as_real() >= 0.0);
        }
    }

    #[test]
    fn exponential_sample_mean_approaches_inverse_rate() {
        use approx::assert_relative_eq;

        let mut engine = RandomEngine::from_seed(2024);
        let spec = DistributionSpec::Exponential { rate: 2.0 };
        let n = 20_000;
        let sum: f64 = (0..n)
            .map(|_| spec.sample(&mut engine).unwrap().as_real())
            .sum();
        assert_relative_eq!(sum / f64::from(n), 0.5, epsilon = 0.05);
    }

    #[test]
    fn validate_matches_sample_rejection() {
        let spec = DistributionSpec::Normal { mean: 0.0, stddev: -1.0 };
        assert!(spec.validate().is_err());
        let spec = DistributionSpec::Exponential { rate: 1.0 };
        assert!(spec.validate().is_ok());
        let spec = DistributionSpec::DiscreteUniform { low: 2, high: 1 };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn element_string_has_nineteen_fractional_digits() {
        let s = Sample::Real(1.5).to_element_string();
        let frac = s.split('.').nth(1).unwrap();
        assert_eq!(frac.len(), 19);
        assert!(s.starts_with("1.5"));

        let s = Sample::Int(-3).to_element_string();
        assert!(s.starts_with("-3."));
        assert_eq!(s.split('.').nth(1).unwrap().len(), 19);
    }

    proptest! {
        #[test]
        fn discrete_uniform_stays_in_closed_range(
            low in -1_000i64..1_000,
            span in 0i64..1_000,
            seed in any::<u64>(),
        ) {
            let high = low + span;
            let mut engine = RandomEngine::from_seed(seed);
            let spec = DistributionSpec::DiscreteUniform { low, high };
            for _ in 0..64 {
                let v = spec.sample(&mut engine).unwrap().as_int().unwrap();
                prop_assert!(v >= low && v <= high);
            }
        }

        #[test]
        fn continuous_uniform_stays_in_half_open_range(
            low in -1_000.0f64..1_000.0,
            span in 0.001f64..1_000.0,
            seed in any::<u64>(),
        ) {
            let high = low + span;
            let mut engine = RandomEngine::from_seed(seed);
            let spec = DistributionSpec::ContinuousUniform { low, high };
            for _ in 0..64 {
                let v = spec.sample(&mut engine).unwrap().as_real();
                prop_assert!(v >= low && v < high);
            }
        }
    }
}
