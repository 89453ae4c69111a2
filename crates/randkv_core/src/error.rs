//! Sampling error types.

use thiserror::Error;

/// Errors that can occur when validating or sampling a distribution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// Uniform bounds are inverted (low > high).
    #[error("invalid range: low {low} exceeds high {high}")]
    InvalidRange {
        /// The lower bound as given.
        low: f64,
        /// The upper bound as given.
        high: f64,
    },

    /// A distribution parameter was rejected by the underlying algorithm.
    ///
    /// The original implementation passed non-positive stddev/rate straight
    /// through to the sampler with implementation-defined results; here the
    /// distribution constructors validate, so the rejection is surfaced.
    #[error("invalid {name}: {value}")]
    BadParameter {
        /// The parameter name (e.g. "standard deviation", "lambda").
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}
