//! Shared command context.
//!
//! The original implementation kept the engine in a process global. Here it
//! is an explicitly owned singleton constructed at module load and passed to
//! every handler, which keeps the "one engine, never reseeded" lifecycle
//! without hidden global state. Hosts that execute commands concurrently
//! must wrap the context in their own mutual exclusion.

use randkv_core::engine::RandomEngine;
use randkv_core::limits::Limits;

/// Per-process state shared by all command handlers.
#[derive(Debug)]
pub struct CommandContext {
    engine: RandomEngine,
    limits: Limits,
}

impl CommandContext {
    /// Production constructor: entropy-seeded engine, default limits.
    pub fn new() -> Self {
        Self {
            engine: RandomEngine::from_entropy(),
            limits: Limits::default(),
        }
    }

    /// Deterministic constructor for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            engine: RandomEngine::from_seed(seed),
            limits: Limits::default(),
        }
    }

    /// Replaces the resource limits, e.g. with host-configured values.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The shared engine.
    #[inline]
    pub fn engine(&mut self) -> &mut RandomEngine {
        &mut self.engine
    }

    /// The configured resource limits.
    #[inline]
    pub fn limits(&self) -> Limits {
        self.limits
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
