//! Shared pseudo-random engine.
//!
//! This module provides [`RandomEngine`], the single generator instance that
//! every sampling operation in the module draws from. It is seeded once from
//! OS entropy at module load and never reseeded afterwards.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Process-wide pseudo-random engine.
///
/// Exactly one instance is created when the module loads and it lives for
/// the process lifetime. Every sample advances the shared state, so command
/// outcomes are never idempotent and sequences are not reproducible across
/// runs (except via [`RandomEngine::from_seed`] in tests).
///
/// The engine is owned by the command context and passed by `&mut` reference
/// rather than living in a global. Hosts that execute commands concurrently
/// must serialise access themselves; this module assumes run-to-completion
/// execution per command.
///
/// # Examples
///
/// ```rust
/// use randkv_core::engine::RandomEngine;
///
/// let mut rng1 = RandomEngine::from_seed(12345);
/// let mut rng2 = RandomEngine::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_bits(), rng2.next_bits());
/// ```
#[derive(Debug)]
pub struct RandomEngine {
    /// The underlying PRNG instance.
    inner: StdRng,
}

impl RandomEngine {
    /// Creates the production engine, seeded once from OS entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic engine for tests.
    ///
    /// The same seed always produces the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the next raw 64-bit draw, advancing the shared state.
    #[inline]
    pub fn next_bits(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Mutable access to the underlying generator for distribution sampling.
    #[inline]
    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.inner
    }
}
