//! # randkv_core: Sampling Foundation for the RandKV Module
//!
//! ## Layer 1 (Foundation) Role
//!
//! randkv_core is the bottom layer of the two-layer architecture, providing:
//! - The shared pseudo-random engine (`engine`)
//! - Distribution samplers and sample formatting (`distributions`)
//! - Histogram binning mathematics (`histogram`)
//! - Configurable resource limits (`limits`)
//! - Error types: `SampleError` (`error`)
//!
//! Layer 1 has no knowledge of commands, keys or the host key-value store;
//! it only turns engine draws into typed samples and bins slices of reals.
//!
//! ## Usage Example
//!
//! ```rust
//! use randkv_core::engine::RandomEngine;
//! use randkv_core::distributions::DistributionSpec;
//!
//! let mut engine = RandomEngine::from_seed(42);
//! let spec = DistributionSpec::Normal { mean: 0.0, stddev: 1.0 };
//! let sample = spec.sample(&mut engine).unwrap();
//! assert!(sample.as_real().is_finite());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod engine;
pub mod error;
pub mod histogram;
pub mod limits;

pub use distributions::{DistributionSpec, Sample};
pub use engine::RandomEngine;
pub use error::SampleError;
pub use histogram::Histogram;
pub use limits::Limits;
